//! Toybox server — entry point.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use toybox_server::config::ServerConfig;
use toybox_server::operations::builtin_registry;
use toybox_server::protocol::Dispatcher;
use toybox_server::server::Server;

#[derive(Parser)]
#[command(
    name = "toybox-server",
    about = "Serve toy operations (square roots, SVG badges, greetings) as line-delimited JSON over stdio",
    version
)]
struct Cli {
    /// Log filter (trace, debug, info, warn, error). Falls back to TOYBOX_LOG.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Maximum size of one request frame in bytes. Falls back to TOYBOX_MAX_FRAME_BYTES.
    #[arg(long, global = true)]
    max_frame_bytes: Option<usize>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve requests over stdin/stdout (default).
    Serve,

    /// Print server information and operations as JSON.
    Info,

    /// Generate shell completion scripts.
    ///
    /// Examples:
    ///   toybox-server completions bash > ~/.local/share/bash-completion/completions/toybox-server
    ///   toybox-server completions zsh > ~/.zfunc/_toybox-server
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish).
        shell: Shell,
    },

    /// Launch interactive REPL mode.
    Repl,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = ServerConfig::resolve(cli.log_level.as_deref(), cli.max_frame_bytes);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let dispatcher = Dispatcher::new(builtin_registry()?);

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            tracing::info!("toybox-server v{}", env!("CARGO_PKG_VERSION"));
            let server = Server::new(dispatcher, config);
            server.run_stdio().await?;
        }

        Commands::Info => {
            let operations = dispatcher.registry().list();
            let info = serde_json::json!({
                "server": {
                    "name": env!("CARGO_PKG_NAME"),
                    "version": env!("CARGO_PKG_VERSION"),
                },
                "max_frame_bytes": config.max_frame_bytes,
                "operation_count": operations.len(),
                "operations": operations,
            });
            println!("{}", serde_json::to_string_pretty(&info)?);
        }

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "toybox-server", &mut std::io::stdout());
        }

        Commands::Repl => {
            toybox_server::repl::run(&dispatcher).await?;
        }
    }

    Ok(())
}
