use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tokio::runtime::Runtime;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "faqgen")]
#[command(version, about = "AI-driven FAQ content generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long)]
    verbose: bool,

    #[arg(long, short)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        #[arg(long, help = "Bind host (overrides config)")]
        host: Option<String>,
        #[arg(long, short, help = "Bind port (overrides config)")]
        port: Option<u16>,
    },

    /// Generate FAQ pairs for a topic
    Generate {
        #[arg(help = "Topic to generate FAQs for")]
        topic: String,
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json"
        )]
        format: String,
    },

    /// Break an answer string into display segments and key points
    Segment {
        #[arg(help = "Answer text to segment")]
        answer: String,
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json"
        )]
        format: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration (merged from all sources)
    Show {
        #[arg(long, help = "Output as JSON instead of TOML")]
        json: bool,
    },
    /// Show configuration file paths
    Path,
    /// Initialize configuration
    Init {
        #[arg(long, short, help = "Initialize global config")]
        global: bool,
        #[arg(long, help = "Overwrite existing config")]
        force: bool,
    },
}

fn main() -> ExitCode {
    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError:\x1b[0m {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Serve { host, port } => {
            let rt = Runtime::new()?;
            rt.block_on(faqgen::cli::commands::serve::run(host, port))?;
        }
        Commands::Generate { topic, format } => {
            let rt = Runtime::new()?;
            rt.block_on(faqgen::cli::commands::generate::run(&topic, &format))?;
        }
        Commands::Segment { answer, format } => {
            faqgen::cli::commands::segment::run(&answer, &format)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { json } => {
                faqgen::cli::commands::config::show(json)?;
            }
            ConfigAction::Path => {
                faqgen::cli::commands::config::path();
            }
            ConfigAction::Init { global, force } => {
                faqgen::cli::commands::config::init(global, force)?;
            }
        },
    }

    Ok(())
}
