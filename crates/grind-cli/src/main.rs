mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::run::RunMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "grind",
    about = "Personal accountability bot — weekly task roadmap, scheduled reminders, issue alerts",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from .grind/ or .git/)
    #[arg(long, global = true, env = "GRIND_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold .grind/ with a starter config and roadmap
    Init,

    /// Run the long-lived service: cron reminders, chat polling, health endpoint
    Serve {
        /// Port for the health endpoint
        #[arg(long, default_value = "10000", env = "PORT")]
        port: u16,
    },

    /// Perform one unit of scheduled work and exit (for external schedulers).
    /// Always drains pending chat commands first.
    Run {
        #[arg(long, value_enum, default_value = "notify")]
        mode: RunMode,
    },

    /// Mark a task done for the current week
    Done {
        /// 1-based task number as shown by `grind tasks`
        number: usize,
    },

    /// Current week progress, task by task
    Status,

    /// This week's task list
    Tasks,

    /// Current week and month
    Week,
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } | Commands::Run { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    let root_path = cli.root.as_deref();
    let root = root::resolve_root(root_path);

    let result = match cli.command {
        Commands::Init => cmd::init::run(&root),
        Commands::Serve { port } => cmd::serve::run(&root, port),
        Commands::Run { mode } => cmd::run::run(&root, mode),
        Commands::Done { number } => cmd::done::run(&root, number),
        Commands::Status => cmd::status::run(&root, cli.json),
        Commands::Tasks => cmd::tasks::run(&root, cli.json),
        Commands::Week => cmd::week::run(&root, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
