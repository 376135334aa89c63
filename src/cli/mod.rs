use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Host address and port for the server to listen on.
    #[arg(long, env = "SERVER_ADDR", default_value = "127.0.0.1:4000")]
    pub server_addr: String,

    /// API Key for the Gemini generateContent endpoint.
    #[arg(long, env = "GEMINI_API_KEY", default_value = "")]
    pub chat_api_key: String,

    /// Model name for chat completion (e.g., gemini-pro, gemini-1.5-flash-latest)
    #[arg(long, env = "CHAT_MODEL")]
    pub chat_model: Option<String>,

    /// Base URL for the Gemini API (up to and excluding the model name)
    #[arg(long, env = "CHAT_BASE_URL")]
    pub chat_base_url: Option<String>,

    /// Prompt assembly strategy (flattened, structured)
    #[arg(long, env = "ASSEMBLY_MODE", default_value = "structured")]
    pub assembly_mode: String,
}
