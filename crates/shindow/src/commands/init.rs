use std::path::Path;

use shindow_core::config;

use super::CommandResult;

/// Creates the default configuration file at `~/.config/shindow/config.toml`.
///
/// An existing file is left untouched.
pub fn execute() -> CommandResult {
    let dir = config::config_dir().ok_or("could not determine home directory")?;
    std::fs::create_dir_all(&dir).map_err(|e| format!("could not create {}: {e}", dir.display()))?;

    write_if_missing(
        &dir.join("config.toml"),
        &config::template::generate_config(),
    )?;

    println!("\nEdit config.toml to change which processes are listed and to enable logging.");
    Ok(())
}

/// Writes content to a file only if it doesn't already exist.
fn write_if_missing(path: &Path, content: &str) -> CommandResult {
    if path.exists() {
        println!("Already exists: {}", path.display());
        return Ok(());
    }

    std::fs::write(path, content).map_err(|e| format!("could not write {}: {e}", path.display()))?;
    println!("Created {}", path.display());
    Ok(())
}
