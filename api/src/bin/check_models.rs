use clap::Parser;
use dotenv::dotenv;
use fitplan_api::{
    application::logging::init_logger,
    args::{LLMArgs, LogArgs},
};
use fitplan_core::{domain::common::LLMConfig, infrastructure::llm::GeminiLLMClient};

/// Lists the Gemini models the configured API key can call.
#[derive(Debug, Parser)]
#[command(name = "check-models", version)]
struct CheckModelsArgs {
    #[command(flatten)]
    llm: LLMArgs,

    #[command(flatten)]
    log: LogArgs,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv().ok();

    let args = CheckModelsArgs::parse();
    init_logger(&args.log)?;

    let config = LLMConfig::from(args.llm);
    let client = GeminiLLMClient::new(&config)?;

    for model in client.list_models().await? {
        println!("{}", model.name);
    }

    Ok(())
}
