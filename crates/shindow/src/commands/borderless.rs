use clap::Args;

use shindow_core::{AppError, log_warn};

use super::{CommandResult, Context, ProcessArgs};

#[derive(Args)]
pub struct BorderlessArgs {
    #[command(flatten)]
    pub process: ProcessArgs,

    /// Left edge of the target rectangle (defaults to the saved target)
    #[arg(long, allow_hyphen_values = true)]
    pub x: Option<String>,
    /// Top edge of the target rectangle
    #[arg(long, allow_hyphen_values = true)]
    pub y: Option<String>,
    /// Target width
    #[arg(long, allow_hyphen_values = true)]
    pub width: Option<String>,
    /// Target height
    #[arg(long, allow_hyphen_values = true)]
    pub height: Option<String>,
}

impl BorderlessArgs {
    fn has_overrides(&self) -> bool {
        self.x.is_some() || self.y.is_some() || self.width.is_some() || self.height.is_some()
    }
}

/// Makes the selected window borderless at the target rectangle.
///
/// Any of `--x/--y/--width/--height` replaces the matching saved field.
/// When overrides are given and the window was changed, the new target
/// is saved.
pub fn execute(ctx: &Context, args: &BorderlessArgs) -> CommandResult {
    let mut app = ctx.app(&args.process)?;

    for (field, value) in [
        (&mut app.target.x, &args.x),
        (&mut app.target.y, &args.y),
        (&mut app.target.width, &args.width),
        (&mut app.target.height, &args.height),
    ] {
        if let Some(value) = value {
            field.clone_from(value);
        }
    }

    match app.make_borderless() {
        Ok(_) => {}
        Err(AppError::Toggle(e)) if e.is_partial() => {
            log_warn!("window left part-way through the change at {:?}", e.phase_reached());
            eprintln!(
                "Warning: the window was only partly changed, restore it before retrying."
            );
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    }

    let target = app.target_rect()?;
    println!("Window is borderless at {target}");

    if args.has_overrides() {
        app.save()?;
        println!("Saved target to {}", app.settings_path().display());
    }
    Ok(())
}
