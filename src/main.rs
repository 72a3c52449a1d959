use clap::Parser;
use std::sync::Arc;
use swap_intent_api::utils::logger;
use swap_intent_api::{AppConfig, AppState, ChatCompletionAdvisor, CliConfig, SwapEngine};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting swap-intent-api");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 解析並驗證配置，失敗直接結束進程
    let config = match AppConfig::resolve(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e);
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 顧問服務與引擎每個進程建一份，請求之間共享
    let advisor = Arc::new(ChatCompletionAdvisor::new(
        config.advisory_base_url.clone(),
        config.api_key.clone(),
        config.advisory_model.clone(),
        config.temperature,
    ));
    let engine = Arc::new(SwapEngine::new(advisor));

    let app = swap_intent_api::create_router().with_state(AppState { engine });

    let listener = tokio::net::TcpListener::bind(&config.bind).await?;
    tracing::info!("🚀 Swap intent API listening on {}", config.bind);
    tracing::info!("📡 Advisory backend: {}", config.advisory_base_url);

    axum::serve(listener, app).await?;

    Ok(())
}
