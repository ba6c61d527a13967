use crate::core::{GeneratedDataset, Pipeline};
use crate::utils::error::Result;

pub struct MockDataEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> MockDataEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// 依序執行 extract、transform、load，回傳輸出路徑
    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting mock data generation");

        let listings = self.pipeline.extract().await?;
        tracing::info!("Extracted {} listings", listings.len());

        let dataset = self.pipeline.transform(listings).await?;
        tracing::info!(
            "Transformed {} listings ({} timestamps backfilled)",
            dataset.listings.len(),
            dataset.backfilled
        );

        let output_path = self.pipeline.load(dataset).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }

    /// 只跑 extract 與 transform，不寫出任何檔案
    pub async fn dry_run(&self) -> Result<GeneratedDataset> {
        tracing::info!("Dry run: nothing will be written");

        let listings = self.pipeline.extract().await?;
        let dataset = self.pipeline.transform(listings).await?;
        tracing::info!(
            "Would write {} listings ({} timestamps backfilled)",
            dataset.listings.len(),
            dataset.backfilled
        );

        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Listing;
    use crate::utils::error::MockDataError;
    use std::sync::Mutex;

    struct RecordingPipeline {
        stages: Mutex<Vec<&'static str>>,
        fail_load: bool,
    }

    impl RecordingPipeline {
        fn new(fail_load: bool) -> Self {
            Self {
                stages: Mutex::new(Vec::new()),
                fail_load,
            }
        }
    }

    #[async_trait::async_trait]
    impl Pipeline for RecordingPipeline {
        async fn extract(&self) -> Result<Vec<Listing>> {
            self.stages.lock().unwrap().push("extract");
            Ok(Vec::new())
        }

        async fn transform(&self, listings: Vec<Listing>) -> Result<GeneratedDataset> {
            self.stages.lock().unwrap().push("transform");
            Ok(GeneratedDataset {
                listings,
                backfilled: 0,
            })
        }

        async fn load(&self, _dataset: GeneratedDataset) -> Result<String> {
            self.stages.lock().unwrap().push("load");
            if self.fail_load {
                return Err(MockDataError::IoError(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "read-only filesystem",
                )));
            }
            Ok("out.json".to_string())
        }
    }

    #[tokio::test]
    async fn test_run_executes_stages_in_order() {
        let engine = MockDataEngine::new(RecordingPipeline::new(false));

        let output_path = engine.run().await.unwrap();

        assert_eq!(output_path, "out.json");
        assert_eq!(
            *engine.pipeline.stages.lock().unwrap(),
            vec!["extract", "transform", "load"]
        );
    }

    #[tokio::test]
    async fn test_dry_run_skips_load() {
        let engine = MockDataEngine::new(RecordingPipeline::new(true));

        let dataset = engine.dry_run().await.unwrap();

        assert!(dataset.listings.is_empty());
        assert_eq!(
            *engine.pipeline.stages.lock().unwrap(),
            vec!["extract", "transform"]
        );
    }

    #[tokio::test]
    async fn test_run_propagates_load_failure() {
        let engine = MockDataEngine::new(RecordingPipeline::new(true));

        let result = engine.run().await;

        assert!(matches!(result, Err(MockDataError::IoError(_))));
    }
}
