//! Impact Score Server CLI
//!
//! Starts the HTTP server answering impact score queries.

use impact_server::{config::ServerConfig, start_server, ServerError};
use std::env;
use std::process;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let args: Vec<String> = env::args().collect();

    let config = if args.len() > 2 && args[1] == "--config" {
        ServerConfig::from_file(&args[2])?
    } else if args.len() > 1 && args[1] == "--help" {
        print_help();
        process::exit(0);
    } else {
        eprintln!("Warning: No config file specified, using defaults (127.0.0.1:8000)");
        eprintln!("Usage: impact-server --config <path-to-config.toml>");
        eprintln!();
        ServerConfig::default()
    };

    // Variables already set in the environment win over .env
    dotenvy::dotenv().ok();

    // API keys in the environment take precedence over the file
    start_server(config.with_env_credentials()).await?;

    Ok(())
}

fn print_help() {
    println!("Impact Score Server - deterministic impact scoring over HTTP");
    println!();
    println!("USAGE:");
    println!("    impact-server --config <path-to-config.toml>");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>    Load configuration from TOML file");
    println!("    --help             Print this help message");
    println!();
    println!("ENDPOINTS:");
    println!("    GET /score?entity=<name>   Score an entity (3-100 characters)");
    println!("    GET /                      Status message and server time");
    println!("    GET /health                Health and scoring mode");
    println!();
    println!("CONFIGURATION:");
    println!("    The TOML config file may contain:");
    println!("    - bind_address: IP address to bind (default: '127.0.0.1')");
    println!("    - bind_port: Port number (default: 8000)");
    println!("    - cors_permissive: Allow any origin (default: true)");
    println!("    - log_filter: Log filter when RUST_LOG is unset (default: 'info')");
    println!("    - [entity] min_chars / max_chars: Entity name bounds");
    println!("    - [credentials] search_api_key / llm_api_key");
    println!();
    println!("ENVIRONMENT:");
    println!("    SERPAPI_KEY, OPENAI_API_KEY   Enable external scoring when both are set");
    println!("    RUST_LOG                      Override the log filter");
    println!();
}
