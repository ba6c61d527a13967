use anyhow::Result;
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use mock_listings::core::{Clock, Pipeline};
use mock_listings::{CliConfig, Listing, ListingPipeline, LocalStorage, MockDataEngine, Section};
use std::collections::HashSet;
use tempfile::TempDir;

struct FixedClock(NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

fn frozen_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 15)
        .unwrap()
        .and_hms_micro_opt(18, 5, 30, 123_456)
        .unwrap()
}

async fn generate(seed: Option<u64>) -> Result<(TempDir, Vec<Listing>)> {
    let temp_dir = TempDir::new()?;
    let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
    let config = CliConfig {
        seed,
        ..CliConfig::default()
    };

    let pipeline = ListingPipeline::with_clock(storage, config, FixedClock(frozen_now()));
    MockDataEngine::new(pipeline).run().await?;

    let text = std::fs::read_to_string(temp_dir.path().join("processed_mock_data.json"))?;
    let listings: Vec<Listing> = serde_json::from_str(&text)?;
    Ok((temp_dir, listings))
}

#[tokio::test]
async fn test_output_keeps_every_listing() -> Result<()> {
    let (_dir, listings) = generate(None).await?;
    assert_eq!(listings.len(), 32);
    Ok(())
}

#[tokio::test]
async fn test_every_timestamp_is_present_and_parseable() -> Result<()> {
    let (_dir, listings) = generate(None).await?;

    for listing in &listings {
        let ts = listing.timestamp.as_deref().unwrap_or_default();
        assert!(!ts.is_empty(), "{} has no timestamp", listing.title);
        assert!(
            DateTime::parse_from_rfc3339(ts).is_ok(),
            "{} has unparseable timestamp {}",
            listing.title,
            ts
        );
    }
    Ok(())
}

#[tokio::test]
async fn test_output_is_sorted_newest_first() -> Result<()> {
    let (_dir, listings) = generate(None).await?;

    for pair in listings.windows(2) {
        assert!(pair[0].timestamp >= pair[1].timestamp);
    }
    Ok(())
}

#[tokio::test]
async fn test_explicit_timestamp_is_retained() -> Result<()> {
    let (_dir, listings) = generate(None).await?;

    let sofa = listings
        .iter()
        .find(|l| l.title == "Antique Sofa")
        .expect("Antique Sofa missing from output");
    assert_eq!(sofa.timestamp.as_deref(), Some("2025-01-06T14:30:00Z"));
    Ok(())
}

#[tokio::test]
async fn test_backfilled_timestamps_within_window() -> Result<()> {
    let (_dir, listings) = generate(Some(8)).await?;
    let now = frozen_now().and_utc();
    let oldest = now - (Duration::days(30) + Duration::hours(23) + Duration::minutes(59));

    for listing in listings.iter().filter(|l| l.title != "Antique Sofa") {
        let ts = DateTime::parse_from_rfc3339(listing.timestamp.as_deref().unwrap())?
            .with_timezone(&Utc);
        assert!(ts <= now, "{} is in the future", listing.title);
        assert!(ts >= oldest, "{} is older than the window", listing.title);
    }
    Ok(())
}

#[tokio::test]
async fn test_two_runs_share_the_same_listings() -> Result<()> {
    let (_a, first) = generate(None).await?;
    let (_b, second) = generate(None).await?;

    let key = |l: &Listing| (l.section, l.title.clone());
    let mut first_keys: Vec<_> = first.iter().map(key).collect();
    let mut second_keys: Vec<_> = second.iter().map(key).collect();
    first_keys.sort();
    second_keys.sort();
    assert_eq!(first_keys, second_keys);
    Ok(())
}

#[tokio::test]
async fn test_same_seed_and_clock_is_byte_identical() -> Result<()> {
    let (a, _) = generate(Some(1234)).await?;
    let (b, _) = generate(Some(1234)).await?;

    let first = std::fs::read(a.path().join("processed_mock_data.json"))?;
    let second = std::fs::read(b.path().join("processed_mock_data.json"))?;
    assert_eq!(first, second);
    Ok(())
}

#[tokio::test]
async fn test_sections_belong_to_known_set() -> Result<()> {
    let (_dir, listings) = generate(None).await?;
    let known: HashSet<Section> = Section::ALL.into_iter().collect();

    for listing in &listings {
        assert!(known.contains(&listing.section));
    }
    Ok(())
}

#[tokio::test]
async fn test_transform_without_engine() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
    let pipeline = ListingPipeline::with_clock(
        storage,
        CliConfig {
            seed: Some(3),
            ..CliConfig::default()
        },
        FixedClock(frozen_now()),
    );

    let listings = pipeline.extract().await?;
    let dataset = pipeline.transform(listings).await?;

    assert_eq!(dataset.backfilled, 31);
    assert_eq!(
        dataset.listings[0].timestamp.as_deref().map(|t| t.ends_with('Z')),
        Some(true)
    );
    Ok(())
}
