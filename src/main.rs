use clap::Parser;
use mock_listings::app::report;
use mock_listings::utils::{logger, validation::Validate};
use mock_listings::{CliConfig, ListingPipeline, LocalStorage, MockDataEngine};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting mock-listings");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    let pipeline = ListingPipeline::new(LocalStorage::default(), config);
    let engine = MockDataEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            println!("{}", report::confirmation_line(&output_path));
        }
        Err(e) => {
            tracing::error!(
                "Generation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
