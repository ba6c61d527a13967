use crate::domain::model::{BackfillWindow, Listing};
use chrono::{Duration, NaiveDateTime, Timelike};
use rand::seq::SliceRandom;
use rand::Rng;

pub fn shuffle_listings<R: Rng + ?Sized>(listings: &mut [Listing], rng: &mut R) {
    listings.shuffle(rng);
}

/// ISO-8601 with a literal `Z`. Fractional seconds only appear when the microsecond part is non-zero.
pub fn format_timestamp(at: NaiveDateTime) -> String {
    let micros = at.nanosecond() / 1_000;
    let base = at.format("%Y-%m-%dT%H:%M:%S");
    if micros == 0 {
        format!("{}Z", base)
    } else {
        format!("{}.{:06}Z", base, micros)
    }
}

pub fn random_past_time<R: Rng + ?Sized>(
    now: NaiveDateTime,
    window: &BackfillWindow,
    rng: &mut R,
) -> NaiveDateTime {
    let days = rng.gen_range(0..=window.max_days);
    let hours = rng.gen_range(0..=window.max_hours);
    let minutes = rng.gen_range(0..=window.max_minutes);

    now - (Duration::days(days) + Duration::hours(hours) + Duration::minutes(minutes))
}

/// Fills in every missing timestamp and returns how many were filled.
pub fn backfill_timestamps<R: Rng + ?Sized>(
    listings: &mut [Listing],
    now: NaiveDateTime,
    window: &BackfillWindow,
    rng: &mut R,
) -> usize {
    let mut filled = 0;
    for listing in listings.iter_mut().filter(|l| !l.has_timestamp()) {
        let at = random_past_time(now, window, rng);
        listing.timestamp = Some(format_timestamp(at));
        filled += 1;
    }
    filled
}

/// 依時間戳字串由新到舊排序（字典序）
pub fn sort_newest_first(listings: &mut [Listing]) {
    listings.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}
