mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "shindow",
    version,
    about = "Toggle a game window between bordered and borderless fullscreen"
)]
struct Cli {
    /// Settings file (defaults to shindow.ini next to the executable)
    #[arg(long, global = true, value_name = "PATH")]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default configuration file
    Init,
    /// List running processes that match the configured name filter
    List(commands::list::ListArgs),
    /// Strip a window's borders and move it to the target rectangle
    Borderless(commands::borderless::BorderlessArgs),
    /// Give a window its borders back without moving it
    Restore(commands::ProcessArgs),
    /// Inspect or change the saved target rectangle
    Target {
        #[command(subcommand)]
        command: TargetCommands,
    },
}

#[derive(Subcommand)]
enum TargetCommands {
    /// Show the saved target rectangle and host window placement
    Show,
    /// Set the target rectangle explicitly
    Set(commands::target::RectArgs),
    /// Set the target to the full bounds of the window's monitor
    Monitor(commands::ProcessArgs),
    /// Set the target to the window's current client area
    Window(commands::ProcessArgs),
}

fn main() {
    let cli = Cli::parse();

    let config = shindow_core::config::load();
    shindow_core::log::init(&config.logging);
    let ctx = commands::Context::new(cli.settings, config);

    let result = match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::List(args) => commands::list::execute(&ctx, &args),
        Commands::Borderless(args) => commands::borderless::execute(&ctx, &args),
        Commands::Restore(args) => commands::restore::execute(&ctx, &args),
        Commands::Target { command } => match command {
            TargetCommands::Show => commands::target::show(&ctx),
            TargetCommands::Set(args) => commands::target::set(&ctx, &args),
            TargetCommands::Monitor(args) => commands::target::monitor(&ctx, &args),
            TargetCommands::Window(args) => commands::target::window(&ctx, &args),
        },
    };

    if let Err(e) = result {
        shindow_core::log_error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
