use super::{CommandResult, Context, ProcessArgs};

/// Gives the selected window its decorations back without moving it.
pub fn execute(ctx: &Context, args: &ProcessArgs) -> CommandResult {
    let mut app = ctx.app(args)?;
    app.restore_borders()?;
    println!("Window borders restored");
    Ok(())
}
