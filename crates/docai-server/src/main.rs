//! DocAI: document classification and relevance search server.

use std::path::PathBuf;
use std::sync::Arc;

use docai_core::DocAiConfig;
use docai_server::{build_router, cli, AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn resolve_data_dir() -> PathBuf {
    std::env::var("DOCAI_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data"))
}

fn print_help() {
    println!("DocAI: document classification and relevance search");
    println!();
    println!("Usage: docai [command]");
    println!();
    println!("Commands:");
    println!("  (none)                      Start the server");
    println!("  process <file> [uploader]   Ingest a file and print the document");
    println!("  search <query> [category]   Search stored documents");
    println!("  list [role]                 List documents visible to a role");
    println!("  help                        Show this help message");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    if matches!(args.get(1).map(String::as_str), Some("--help" | "-h" | "help")) {
        print_help();
        return Ok(());
    }

    let data_dir = resolve_data_dir();
    info!("Data directory: {}", data_dir.display());
    let config = DocAiConfig::from_env(&data_dir)?;
    let port = config.port;
    let state = AppState::new(config)
        .map_err(|e| anyhow::anyhow!("Failed to initialize: {}", e))?;

    // Handle CLI subcommands
    if args.len() > 1 {
        match args[1].as_str() {
            "process" => {
                let Some(file) = args.get(2) else {
                    eprintln!("Usage: docai process <file> [uploader]");
                    std::process::exit(1);
                };
                let uploader = args.get(3).map(String::as_str).unwrap_or("cli");
                cli::process(&state, &PathBuf::from(file), uploader)?;
            }
            "search" => {
                let Some(query) = args.get(2) else {
                    eprintln!("Usage: docai search <query> [category]");
                    std::process::exit(1);
                };
                cli::search(&state, query, args.get(3).map(String::as_str))?;
            }
            "list" => cli::list(&state, args.get(2).map(String::as_str))?,
            _ => {
                eprintln!("Unknown command: {}. Use 'docai help' for usage.", args[1]);
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    let app = build_router(Arc::new(state));

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("DocAI server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
