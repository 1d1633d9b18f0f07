use std::sync::Arc;

use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use rpc_chat::config::{self, AppConfig};
use rpc_chat::ui::ChatApp;
use rpc_chat::ui::render::render_transcript;
use rpc_chat::{CallClient, ChatServer, ChatService};
use tokio::io::{BufReader, stdin, stdout};
use tokio::signal;

#[derive(Parser)]
#[command(name = "rpc_chat", version, about = "Multi-client chat relay over TCP RPC")]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
    /// Override the listen address (server) or server address (client)
    #[arg(long, value_name = "HOST:PORT")]
    addr: Option<String>,
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Run the chat server
    Server,
    /// Print the current transcript once and exit
    History,
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let app_config = config::load_config(&cli.config);

    let result = match cli.mode {
        Some(Mode::Server) => run_server(listen_addr(&cli, &app_config)).await,
        Some(Mode::History) => print_history(server_addr(&cli, &app_config)).await,
        None => run_client(server_addr(&cli, &app_config)).await,
    };

    // Transport failures are fatal; no retry.
    if let Err(err) = result {
        log::error!("{err}");
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn listen_addr(cli: &Cli, config: &AppConfig) -> String {
    cli.addr.clone().unwrap_or_else(|| config.listen_addr.clone())
}

fn server_addr(cli: &Cli, config: &AppConfig) -> String {
    cli.addr.clone().unwrap_or_else(|| config.server_addr.clone())
}

async fn run_server(addr: String) -> rpc_chat::Result<()> {
    let service = Arc::new(ChatService::new());
    let server = ChatServer::bind(addr.as_str(), Arc::clone(&service)).await?;

    tokio::select! {
        _ = server.run() => {}
        _ = signal::ctrl_c() => {
            log::info!("Received shutdown signal, stopping chat server...");
        }
    }

    log::info!("Final transcript: {} messages", service.len());
    Ok(())
}

async fn run_client(addr: String) -> rpc_chat::Result<()> {
    let client = CallClient::connect(addr.as_str()).await?;
    ChatApp::new(client, BufReader::new(stdin()), stdout())
        .run()
        .await
}

async fn print_history(addr: String) -> rpc_chat::Result<()> {
    let mut client = CallClient::connect(addr.as_str()).await?;
    let snapshot = client.fetch().await?;
    render_transcript(&mut stdout(), &snapshot).await?;
    client.close().await
}
