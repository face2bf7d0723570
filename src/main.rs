//! Folio - Portfolio site content, assistant and contact API.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use folio::assistant::{format_system_instruction, ContextAssembler};
use folio::commands::{self, CommandError};
use folio::content::{browse_articles, filter_projects, ArticleQuery};
use folio::display;

#[derive(Parser)]
#[command(
    name = "folio",
    about = "Portfolio site content, assistant and contact API",
    version
)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to a config file (defaults to ./folio.toml, then the user config dir).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the site API.
    Serve {
        /// Override the configured host.
        #[arg(long)]
        host: Option<String>,
        /// Override the configured port.
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Ask the assistant a single question.
    Ask {
        /// The question to ask.
        message: String,
    },
    /// Print the site context given to the assistant.
    Context {
        /// Print the full system instruction instead of the raw context.
        #[arg(long)]
        prompt: bool,
    },
    /// List blog articles, newest first.
    Articles {
        /// Case-insensitive text matched against title and excerpt.
        #[arg(short, long)]
        search: Option<String>,
        /// Only show articles with this tag.
        #[arg(short, long)]
        tag: Option<String>,
        /// Page number, starting at 1.
        #[arg(short, long)]
        page: Option<usize>,
        /// Do not truncate excerpts.
        #[arg(long)]
        raw: bool,
    },
    /// List showcase projects.
    Projects {
        /// Only show projects in this category.
        #[arg(short, long)]
        category: Option<String>,
        /// Do not truncate descriptions.
        #[arg(long)]
        raw: bool,
    },
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

async fn run(cli: Cli) -> Result<(), CommandError> {
    let mut config = commands::load_config(cli.config)?;

    match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }

            let cancel = CancellationToken::new();
            let shutdown = cancel.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    tracing::info!("Received Ctrl-C, shutting down");
                }
                shutdown.cancel();
            });

            commands::serve(config, cancel).await
        }
        Commands::Ask { message } => {
            let reply = commands::ask(&config, &message).await?;
            display::print_reply(&config.profile.assistant_name, &reply);
            Ok(())
        }
        Commands::Context { prompt } => {
            let store = commands::load_store(&config)?;
            let assembler = ContextAssembler::new(&store, &config.profile);
            if prompt {
                println!(
                    "{}",
                    format_system_instruction(&config.profile, &assembler.assemble())
                );
            } else {
                println!("{}", assembler.render());
            }
            Ok(())
        }
        Commands::Articles {
            search,
            tag,
            page,
            raw,
        } => {
            let store = commands::load_store(&config)?;
            let query = ArticleQuery { search, tag, page };
            display::print_article_page(&browse_articles(&store.list_articles(), &query), raw);
            Ok(())
        }
        Commands::Projects { category, raw } => {
            let store = commands::load_store(&config)?;
            let projects = filter_projects(&store.list_projects(), category.as_deref());
            display::print_projects(&projects, raw);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            display::print_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
