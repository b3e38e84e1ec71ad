//! highxbot command-line entry point.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use highxbot::console::{Typing, run_chat};
use highxbot::{BotConfig, RandomSelector, WebCapability, build_responder_with_selector, load_config};
use tracing_subscriber::EnvFilter;

/// Rule-based chatbot with exact, word-overlap and fuzzy knowledge lookup.
#[derive(Parser, Debug)]
#[command(name = "highxbot", version, about)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Args, Debug, Clone, Default)]
struct CommonArgs {
    /// YAML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Knowledge file (`question|answer` per line); overrides the config
    #[arg(long, global = true)]
    knowledge: Option<PathBuf>,

    /// Seed for greeting and fallback selection
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive console session (default)
    Chat {
        /// Print replies at once, without the typing effect
        #[arg(long)]
        no_typing: bool,
    },
    /// Answer a single message and exit
    Ask {
        /// Message text; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Serve the HTTP front-end
    Serve {
        /// Bind address; overrides HIGHXBOT_SERVER__BIND_ADDR
        #[arg(long)]
        bind: Option<String>,

        /// Port; overrides HIGHXBOT_SERVER__PORT
        #[arg(long)]
        port: Option<u16>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Chat { no_typing: false });

    match command {
        Command::Chat { no_typing } => {
            init_console_tracing();
            let config = bot_config(&cli.common)?;
            let responder = build_responder_with_selector(&config, selector(&cli.common))?;
            let typing = if no_typing {
                Typing::instant()
            } else {
                Typing::from_config(&config.console)
            };
            let stdin = io::stdin();
            run_chat(&responder, &config.name, typing, stdin.lock(), io::stdout())
                .context("console session failed")?;
            Ok(())
        }
        Command::Ask { text } => {
            init_console_tracing();
            let config = bot_config(&cli.common)?;
            let responder = build_responder_with_selector(&config, selector(&cli.common))?;
            println!("{}", responder.respond(&text.join(" ")));
            Ok(())
        }
        Command::Serve { bind, port } => serve(&cli.common, bind, port),
    }
}

fn bot_config(common: &CommonArgs) -> Result<BotConfig> {
    let mut config = load_config(common.config.as_deref())
        .with_context(|| format!("loading config {:?}", common.config))?;
    if let Some(path) = &common.knowledge {
        config.knowledge.path = path.clone();
    }
    Ok(config)
}

fn selector(common: &CommonArgs) -> RandomSelector {
    match common.seed {
        Some(seed) => RandomSelector::with_seed(seed),
        None => RandomSelector::new(),
    }
}

/// Logs go to stderr at `warn` unless `RUST_LOG` says otherwise, so they do
/// not interleave with the conversation.
fn init_console_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

#[cfg(feature = "server")]
fn serve(common: &CommonArgs, bind: Option<String>, port: Option<u16>) -> Result<()> {
    use std::sync::Arc;

    WebCapability::detect().require()?;

    let mut server_config = server::ServerConfig::load()?;
    if let Some(bind) = bind {
        server_config.bind_addr = bind;
    }
    if let Some(port) = port {
        server_config.port = port;
    }
    server::init_tracing(&server_config);

    let config = bot_config(common)?;
    let responder = build_responder_with_selector(&config, selector(common))?;
    let state = server::ServerState::new(server_config, config.name.as_str(), responder);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("building tokio runtime")?;
    runtime.block_on(server::start_server(Arc::new(state)))
}

#[cfg(not(feature = "server"))]
fn serve(_common: &CommonArgs, _bind: Option<String>, _port: Option<u16>) -> Result<()> {
    init_console_tracing();
    let capability = WebCapability::detect();
    if let WebCapability::Unavailable { reason } = capability {
        tracing::error!(reason, "web_unavailable");
    }
    capability.require()?;
    Ok(())
}
