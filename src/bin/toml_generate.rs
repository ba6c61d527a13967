use clap::Parser;
use mock_listings::app::report;
use mock_listings::utils::{logger, validation::Validate};
use mock_listings::{ListingPipeline, LocalStorage, MockDataEngine, MockDataError, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-generate")]
#[command(about = "Mock listing generator driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "mock-data.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override the seed from config
    #[arg(long)]
    seed: Option<u64>,

    /// Validate the config and show what would be generated without writing
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("📁 Loading configuration from: {}", args.config);

    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(e.exit_code());
        }
    };

    // 命令列覆蓋設定
    if let Some(seed) = args.seed {
        config.set_seed(seed);
        tracing::info!("🔧 Seed overridden to: {}", seed);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    if args.dry_run {
        let summary_config = config.clone();
        let engine = MockDataEngine::new(ListingPipeline::new(LocalStorage::default(), config));
        match engine.dry_run().await {
            Ok(dataset) => {
                // 乾跑的摘要就是使用者要看的輸出，直接印到 stdout
                for line in report::dry_run_report(&summary_config, &dataset) {
                    println!("{}", line);
                }
                return;
            }
            Err(e) => fail(e),
        }
    }

    let pipeline = ListingPipeline::new(LocalStorage::default(), config);
    let engine = MockDataEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            println!("{}", report::confirmation_line(&output_path));
        }
        Err(e) => fail(e),
    }
}

fn fail(e: MockDataError) -> ! {
    tracing::error!(
        "❌ Generation failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
