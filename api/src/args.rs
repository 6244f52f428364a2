use clap::{ArgAction, Parser};
use fitplan_core::domain::common::{
    DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, DEFAULT_LLM_TIMEOUT_SECS, DatabaseConfig,
    FitPlanConfig, LLMConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "FitPlan diet and workout plan backend", long_about = None)]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(flatten)]
    pub llm: LLMArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ServerArgs {
    #[arg(long = "host", env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "port", env = "PORT", default_value_t = 5000)]
    pub port: u16,

    #[arg(long = "root-path", env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    /// Comma separated list. Leave empty to accept any origin.
    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ','
    )]
    pub allowed_origins: Vec<String>,

    #[arg(
        long = "metrics",
        env = "METRICS_ENABLED",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub metrics: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct DatabaseArgs {
    #[arg(
        long = "database-url",
        env = "DATABASE_URL",
        default_value = "sqlite://users.db?mode=rwc"
    )]
    pub database_url: String,
}

#[derive(clap::Args, Debug, Clone)]
pub struct LLMArgs {
    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: String,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    pub gemini_model: String,

    #[arg(
        long = "gemini-base-url",
        env = "GEMINI_BASE_URL",
        default_value = DEFAULT_GEMINI_BASE_URL
    )]
    pub gemini_base_url: String,

    #[arg(
        long = "llm-request-timeout-secs",
        env = "LLM_REQUEST_TIMEOUT_SECS",
        default_value_t = DEFAULT_LLM_TIMEOUT_SECS
    )]
    pub request_timeout_secs: u64,
}

#[derive(clap::Args, Debug, Clone)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false, action = ArgAction::Set)]
    pub json: bool,
}

impl From<LLMArgs> for LLMConfig {
    fn from(args: LLMArgs) -> Self {
        Self {
            gemini_api_key: args.gemini_api_key,
            gemini_model: args.gemini_model,
            gemini_base_url: args.gemini_base_url,
            request_timeout_secs: args.request_timeout_secs,
        }
    }
}

impl From<Args> for FitPlanConfig {
    fn from(args: Args) -> Self {
        Self {
            database: DatabaseConfig {
                url: args.database.database_url,
            },
            llm: args.llm.into(),
        }
    }
}
