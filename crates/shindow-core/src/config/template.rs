/// Generates the default `config.toml` contents with explanatory comments.
///
/// This is used by `shindow init` to create a starter config file that
/// users can immediately edit.
pub fn generate_config() -> String {
    r##"# Shindow configuration
# Location: ~/.config/shindow/config.toml

[process]
# Only processes whose executable name contains this text are listed.
# Matching is case-insensitive. Leave empty to list every process.
name_filter = "eqgame.exe"

[logging]
# Enable file logging to ~/.config/shindow/logs/shindow.log.
enabled = false
# Minimum log level: "debug", "info", "warn", or "error".
level = "info"
# Maximum log file size in MB before rotation.
max_file_mb = 10
"##
    .to_string()
}
