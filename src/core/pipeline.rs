use crate::config::validate_window;
use crate::core::{Clock, ConfigProvider, GeneratedDataset, Listing, Pipeline, Storage, SystemClock};
use crate::domain::dataset::embedded_listings;
use crate::domain::services::{backfill_timestamps, shuffle_listings, sort_newest_first};
use crate::utils::error::{MockDataError, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub struct ListingPipeline<S: Storage, C: ConfigProvider, K: Clock = SystemClock> {
    storage: S,
    config: C,
    clock: K,
}

impl<S: Storage, C: ConfigProvider> ListingPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self::with_clock(storage, config, SystemClock)
    }
}

impl<S: Storage, C: ConfigProvider, K: Clock> ListingPipeline<S, C, K> {
    pub fn with_clock(storage: S, config: C, clock: K) -> Self {
        Self {
            storage,
            config,
            clock,
        }
    }

    fn rng(&self) -> StdRng {
        match self.config.seed() {
            Some(seed) => {
                tracing::debug!("Using fixed seed {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, K: Clock> Pipeline for ListingPipeline<S, C, K> {
    async fn extract(&self) -> Result<Vec<Listing>> {
        let listings = match self.config.source_path() {
            Some(path) => {
                tracing::debug!("Reading listings from: {}", path);
                let data = self.storage.read_file(path).await?;
                serde_json::from_slice::<Vec<Listing>>(&data)?
            }
            None => {
                tracing::debug!("Using embedded dataset");
                embedded_listings()
            }
        };

        if listings.is_empty() {
            tracing::warn!("Source has no listings, output will be an empty array");
        }

        Ok(listings)
    }

    async fn transform(&self, mut listings: Vec<Listing>) -> Result<GeneratedDataset> {
        let window = self.config.backfill_window();
        // 超出範圍會讓 gen_range 或 chrono Duration panic
        validate_window(&window, "backfill.").map_err(|e| MockDataError::ProcessingError {
            message: format!("Invalid backfill window: {}", e),
        })?;

        let mut rng = self.rng();
        let now = self.clock.now();

        shuffle_listings(&mut listings, &mut rng);

        let backfilled = backfill_timestamps(&mut listings, now, &window, &mut rng);
        tracing::debug!(
            "Backfilled {} timestamps relative to {} (window: {}d {}h {}m)",
            backfilled,
            now,
            window.max_days,
            window.max_hours,
            window.max_minutes
        );

        sort_newest_first(&mut listings);

        Ok(GeneratedDataset {
            listings,
            backfilled,
        })
    }

    async fn load(&self, dataset: GeneratedDataset) -> Result<String> {
        let output_path = self.config.output_path();
        let json_data = serde_json::to_string_pretty(&dataset.listings)?;

        tracing::debug!("Writing {} bytes to {}", json_data.len(), output_path);
        self.storage
            .write_file(output_path, json_data.as_bytes())
            .await?;

        Ok(output_path.to_string())
    }
}
