use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ozchat_core::ResponderConfig;
use ozchat_http::{AppState, create_router};
use ozchat_service::{ChatService, OperatorService, SessionService, SimulatedResponder};
use ozchat_storage::{ChatStore, Store};

#[derive(Parser)]
#[command(name = "ozchat")]
#[command(about = "Wizard-of-Oz chat relay", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server (visitor and operator APIs).
    Serve {
        #[arg(short, long, default_value = "3000")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Dashboard counters.
    Stats,
    /// Active sessions, most recently active first.
    Sessions,
    /// Full transcript of one session.
    History { session_id: String },
}

fn get_db_path() -> PathBuf {
    if let Ok(path) = std::env::var("OZCHAT_DB_PATH") {
        return PathBuf::from(path);
    }
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ozchat")
        .join("chat.db")
}

/// Missing token leaves the operator surface disabled rather than open.
fn get_operator_token() -> Option<String> {
    match std::env::var("OZCHAT_OPERATOR_TOKEN") {
        Ok(token) if !token.trim().is_empty() => Some(token),
        _ => {
            tracing::warn!("OZCHAT_OPERATOR_TOKEN is not set; admin endpoints will reject all requests");
            None
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    let db_path = get_db_path();

    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let store = Store::new(&db_path)?;

    match cli.command {
        Commands::Serve { port, host } => {
            let store: Arc<dyn ChatStore> = Arc::new(store);
            let responder =
                SimulatedResponder::new(Arc::clone(&store), ResponderConfig::from_env());
            let state = Arc::new(AppState {
                chat: ChatService::new(Arc::clone(&store), responder),
                sessions: SessionService::new(Arc::clone(&store)),
                operator: OperatorService::new(store),
                operator_token: get_operator_token(),
            });
            let router = create_router(state);
            let addr = format!("{}:{}", host, port);
            tracing::info!("Starting HTTP server on {}", addr);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;
        }
        Commands::Stats => {
            let stats = store.dashboard_stats()?;
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        Commands::Sessions => {
            let sessions = store.list_active_sessions()?;
            println!("{}", serde_json::to_string_pretty(&sessions)?);
        }
        Commands::History { session_id } => {
            let messages = store.history(&session_id)?;
            if messages.is_empty() {
                println!("No messages for session: {}", session_id);
            } else {
                println!("{}", serde_json::to_string_pretty(&messages)?);
            }
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutting down");
}
