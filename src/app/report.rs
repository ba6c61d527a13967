use crate::core::{ConfigProvider, GeneratedDataset};

/// The single line printed to stdout after a successful run.
pub fn confirmation_line(output_path: &str) -> String {
    format!("Data saved to {}", output_path)
}

pub fn config_summary<C: ConfigProvider>(config: &C) -> Vec<String> {
    let window = config.backfill_window();
    let seed = match config.seed() {
        Some(seed) => seed.to_string(),
        None => "random".to_string(),
    };

    vec![
        "📋 Configuration summary:".to_string(),
        format!("   Output: {}", config.output_path()),
        format!(
            "   Source: {}",
            config.source_path().unwrap_or("embedded dataset")
        ),
        format!("   Seed: {}", seed),
        format!(
            "   Backfill window: {}d {}h {}m",
            window.max_days, window.max_hours, window.max_minutes
        ),
    ]
}

/// 乾跑結果：設定摘要加上預計輸出的筆數
pub fn dry_run_report<C: ConfigProvider>(config: &C, dataset: &GeneratedDataset) -> Vec<String> {
    let mut lines = config_summary(config);
    lines.push(format!(
        "🔍 Would write {} listings ({} timestamps backfilled) to {}",
        dataset.listings.len(),
        dataset.backfilled,
        config.output_path()
    ));
    lines
}
