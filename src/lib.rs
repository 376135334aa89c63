pub mod agent;
pub mod cli;
pub mod config;
pub mod error;
pub mod history;
pub mod llm;
pub mod models;
pub mod normalize;
pub mod server;

use agent::SupportAgent;
use cli::Args;
use log::info;
use server::Server;
use std::error::Error;
use std::sync::Arc;

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    info!("--- Core Configuration ---");
    info!("Server Address: {}", args.server_addr);
    info!("Chat Model: {}", args.chat_model.as_deref().unwrap_or("adapter default"));
    info!("Assembly Mode: {}", args.assembly_mode);
    info!("API Key Configured: {}", !args.chat_api_key.is_empty());
    info!("Knowledge Base Entries: {}", config::knowledge::knowledge_base().len());
    info!("-------------------------");

    let agent = Arc::new(SupportAgent::new(&args)?);
    let addr = args.server_addr.clone();
    let server = Server::new(addr, agent);
    server.run().await?;

    Ok(())
}
