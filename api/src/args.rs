use clap::Parser;
use ginger_core::domain::common::{DatabaseConfig, GingerConfig, LLMConfig};

#[derive(Debug, Clone, Parser)]
pub struct ServerArgs {
    #[clap(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[clap(long, env = "SERVER_PORT", default_value = "3333")]
    pub port: u16,

    #[clap(long, env = "SERVER_ROOT_PATH", default_value = "/api")]
    pub root_path: String,

    #[clap(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Parser)]
pub struct DatabaseArgs {
    #[clap(long, env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[clap(long, env = "DATABASE_PORT", default_value = "5432")]
    pub port: u16,

    #[clap(long, env = "DATABASE_USER", default_value = "ginger")]
    pub username: String,

    #[clap(long, env = "DATABASE_PASSWORD", default_value = "ginger")]
    pub password: String,

    #[clap(long, env = "DATABASE_NAME", default_value = "ginger")]
    pub name: String,
}

#[derive(Debug, Clone, Parser)]
pub struct AiArgs {
    /// Optional on purpose: the server must boot without a key, only the
    /// AI endpoints fail until one is set.
    #[clap(long, env = "GEMINI_API_KEY")]
    pub gemini_api_key: Option<String>,

    #[clap(long, env = "GEMINI_MODEL", default_value = "gemini-3-flash-preview")]
    pub gemini_model: String,
}

#[derive(Debug, Clone, Parser)]
#[command(version, about = "Ginger nutrition tracking API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub ai: AiArgs,
}

impl From<Args> for GingerConfig {
    fn from(args: Args) -> Self {
        Self {
            database: DatabaseConfig {
                host: args.db.host,
                port: args.db.port,
                username: args.db.username,
                password: args.db.password,
                name: args.db.name,
            },
            llm: LLMConfig {
                gemini_api_key: args.ai.gemini_api_key,
                gemini_model: args.ai.gemini_model,
            },
        }
    }
}
