use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

use crate::{
    batch::BatchArgs, compare::CompareArgs, generate::GenerateSubcommands,
    optimize::OptimizeArgs,
};

mod batch;
mod compare;
mod file_utils;
mod generate;
mod optimize;
mod params;
mod parsers;
mod report;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long)]
    debug: bool,

    /// JSON file overriding the default optimizer parameters
    #[arg(long, env = "ROUTEWISE_PARAMS", global = true)]
    params: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Optimize a single request
    Optimize {
        #[command(flatten)]
        args: OptimizeArgs,
    },
    /// Run every objective over a request
    Compare {
        #[command(flatten)]
        args: CompareArgs,
    },
    /// Optimize every request of a folder in parallel
    Batch {
        #[command(flatten)]
        args: BatchArgs,
    },
    #[command(visible_alias = "g")]
    Generate {
        #[command(subcommand)]
        commands: GenerateSubcommands,
    },
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let optimizer = params::create_optimizer(cli.params.as_deref())?;

    match cli.command {
        Some(Commands::Optimize { args }) => optimize::run(&optimizer, args)?,
        Some(Commands::Compare { args }) => compare::run(&optimizer, args)?,
        Some(Commands::Batch { args }) => batch::run(&optimizer, args)?,
        Some(Commands::Generate { commands }) => generate::run(commands)?,
        None => {}
    }

    Ok(())
}
