use anyhow::Context;
use clap::Parser;
use interest_inventory::domain::catalog::missing_question_ids;
use interest_inventory::utils::logger;
use interest_inventory::{app, CliArgs, FileQuestionSource, Inventory};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    if args.json_logs {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    let config = match args.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            std::process::exit(1);
        }
    };
    tracing::debug!("Server config: {:?}", config);

    let source = FileQuestionSource::new(&config.questions_path);
    let inventory = match Inventory::from_source(&source).await {
        Ok(inventory) => inventory.with_strict_answers(config.strict_answers),
        Err(e) => {
            tracing::error!("❌ Failed to load questions: {}", e);
            std::process::exit(1);
        }
    };

    let data = inventory.test_data();
    tracing::info!(
        "📚 Loaded {} questions for {} interest areas",
        data.questions.len(),
        data.interest_areas.len()
    );
    let missing = missing_question_ids(&data.interest_areas, &data.questions);
    if !missing.is_empty() {
        tracing::warn!(
            "⚠️ {} area question ids have no catalog entry: {:?}",
            missing.len(),
            missing
        );
    }
    if inventory.strict_answers() {
        tracing::info!("🔒 Strict answer validation enabled");
    }

    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {}", address))?;
    tracing::info!("🚀 Server listening on {}", listener.local_addr()?);

    app::serve(listener, Arc::new(inventory))
        .await
        .context("server error")?;

    tracing::info!("✅ Server stopped");
    Ok(())
}
