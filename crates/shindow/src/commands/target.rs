use clap::Args;

use shindow_core::{App, Rect, TargetFields};

use super::{CommandResult, Context, HostPlatform, ProcessArgs};

#[derive(Args)]
pub struct RectArgs {
    /// Left edge
    #[arg(long, allow_hyphen_values = true)]
    pub x: String,
    /// Top edge
    #[arg(long, allow_hyphen_values = true)]
    pub y: String,
    /// Width
    #[arg(long, allow_hyphen_values = true)]
    pub width: String,
    /// Height
    #[arg(long, allow_hyphen_values = true)]
    pub height: String,
}

/// Prints the saved target and host window placement.
pub fn show(ctx: &Context) -> CommandResult {
    let settings = ctx.load_settings()?;

    println!("Settings: {}", ctx.settings_path.display());
    if settings.is_new {
        println!("  (file not found, showing defaults)");
    }
    println!("Target:      {}", settings.target());
    println!("Host window: {}", settings.window_rect());
    Ok(())
}

/// Validates and saves an explicit target rectangle.
pub fn set(ctx: &Context, args: &RectArgs) -> CommandResult {
    let fields = TargetFields {
        x: args.x.clone(),
        y: args.y.clone(),
        width: args.width.clone(),
        height: args.height.clone(),
    };
    let rect = fields.parse()?;

    let mut settings = ctx.load_settings()?;
    settings.set_target(&rect);
    settings.save(&ctx.settings_path)?;

    println!("Saved target {rect} to {}", ctx.settings_path.display());
    Ok(())
}

/// Sets the target to the monitor that holds the selected window.
pub fn monitor(ctx: &Context, args: &ProcessArgs) -> CommandResult {
    let mut app = ctx.app(args)?;
    let rect = app.fill_monitor()?;
    save(&mut app, &rect)
}

/// Sets the target to the selected window's client area.
pub fn window(ctx: &Context, args: &ProcessArgs) -> CommandResult {
    let mut app = ctx.app(args)?;
    let rect = app.match_window()?;
    save(&mut app, &rect)
}

fn save(app: &mut App<HostPlatform>, rect: &Rect) -> CommandResult {
    app.save()?;
    println!("Saved target {rect} to {}", app.settings_path().display());
    Ok(())
}
