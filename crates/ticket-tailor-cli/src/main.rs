//! ticket-tailor CLI: fill `{{VARIABLE}}` ticket templates from the terminal.
//!
//! Provides five commands: `init`, `template`, `extract`, `render`, and `check`.
//!
//! Extraction and filling are delegated to an engine selected by config or
//! `--engine`, via the [`ticket_tailor_core::engine::TicketEngine`] trait.

mod commands;
mod input;
mod output;

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use ticket_tailor_core::config::CONFIG_FILE;
use ticket_tailor_core::engine::EngineKind;

#[derive(Parser)]
#[command(
    name = "ticket-tailor",
    about = "Fill {{VARIABLE}} ticket templates with your values",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to ticket-tailor.config.json
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Engine to use (overrides the config file)
    #[arg(long, global = true, value_enum)]
    engine: Option<EngineChoice>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a config file in the current directory
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Print the built-in default ticket template
    Template {
        /// Write to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// List the variables found in a template
    Extract {
        #[command(flatten)]
        source: TemplateArgs,

        /// Print a JSON array instead of one name per line
        #[arg(long)]
        json: bool,
    },

    /// Fill a template with values
    Render {
        #[command(flatten)]
        source: TemplateArgs,

        #[command(flatten)]
        values: ValueArgs,

        /// Prompt for every variable that still has no value
        #[arg(long, short)]
        interactive: bool,

        /// Fail instead of leaving unfilled placeholders in the output
        #[arg(long)]
        require_all: bool,

        /// Write the ticket to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Report which variables are filled; exits non-zero if any are missing
    Check {
        #[command(flatten)]
        source: TemplateArgs,

        #[command(flatten)]
        values: ValueArgs,
    },
}

/// Where the template comes from.
#[derive(Args, Debug, Default)]
pub struct TemplateArgs {
    /// Template file (`-` for stdin). Defaults to the configured template,
    /// then to the built-in default ticket.
    #[arg(long, short)]
    pub template: Option<PathBuf>,
}

/// Where variable values come from. `--var` overrides `--values`.
#[derive(Args, Debug, Default)]
pub struct ValueArgs {
    /// A value for one variable, as NAME=VALUE (repeatable)
    #[arg(long = "var", value_name = "NAME=VALUE", value_parser = input::parse_var)]
    pub vars: Vec<(String, String)>,

    /// JSON file with an object of variable names to values
    #[arg(long)]
    pub values: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum EngineChoice {
    Scan,
    Genai,
}

impl EngineChoice {
    pub fn kind(self) -> EngineKind {
        match self {
            Self::Scan => EngineKind::Scan,
            Self::Genai => EngineKind::GenAi,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let engine = cli.engine.map(EngineChoice::kind);

    match cli.command {
        Commands::Init { force } => {
            commands::init::run(&cli.config, engine, force)?;
        }
        Commands::Template { output } => {
            commands::template::run(output.as_deref())?;
        }
        Commands::Extract { source, json } => {
            commands::extract::run(&cli.config, engine, &source, json).await?;
        }
        Commands::Render {
            source,
            values,
            interactive,
            require_all,
            output,
        } => {
            commands::render::run(
                &cli.config,
                engine,
                &source,
                &values,
                interactive,
                require_all,
                output.as_deref(),
            )
            .await?;
        }
        Commands::Check { source, values } => {
            commands::check::run(&cli.config, engine, &source, &values).await?;
        }
    }

    Ok(())
}
