//! CLI Adapter.

mod defaults;
mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "ntpconf")]
#[command(version)]
#[command(
    about = "Synthesize ntp.conf and its auxiliary artifacts from platform facts",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the rendered configuration file for a request
    #[clap(visible_alias = "r")]
    Render {
        /// Request file (.toml, .yaml or .yml) holding facts and parameters
        request: PathBuf,
        /// Directory template identifiers are resolved against [default: request file directory]
        #[arg(short = 't', long)]
        templates_dir: Option<PathBuf>,
    },
    /// Print the full render plan as JSON
    #[clap(visible_alias = "p")]
    Plan {
        /// Request file (.toml, .yaml or .yml) holding facts and parameters
        request: PathBuf,
        /// Directory template identifiers are resolved against [default: request file directory]
        #[arg(short = 't', long)]
        templates_dir: Option<PathBuf>,
    },
    /// Print the platform defaults for a set of facts as TOML
    #[clap(visible_alias = "d")]
    Defaults {
        /// os.family fact (RedHat, Debian, Suse, FreeBSD, Archlinux, Solaris, Gentoo)
        #[arg(short, long)]
        family: String,
        /// os.name fact
        #[arg(short, long, default_value = "")]
        name: String,
        /// os.release.major fact
        #[arg(short, long, default_value = "")]
        release: String,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Render { request, templates_dir } => {
            render::run_render(&request, templates_dir.as_deref())
        }
        Commands::Plan { request, templates_dir } => {
            render::run_plan(&request, templates_dir.as_deref())
        }
        Commands::Defaults { family, name, release } => {
            defaults::run_defaults(&family, &name, &release)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
