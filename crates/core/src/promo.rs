//! Simulated promotion lookups.
//!
//! There is no pricing API key wired in, so the finder fabricates a
//! plausible answer: an artificial delay, a 70% hit rate, and a price
//! band derived from the game's age. A real storefront client would keep
//! the same signature and map its own failures to [`DealResult::NotFound`].

use std::time::Duration;

use chrono::{Datelike, Local};
use rand::Rng;
use tokio::time::sleep;
use tracing::debug;

use crate::models::{DealResult, GameRecord};

/// Chance that a lookup finds a promotion at all.
const DEAL_PROBABILITY: f64 = 0.7;
/// Simulated latency window in milliseconds, upper bound exclusive.
const DELAY_MS_MIN: u64 = 1000;
const DELAY_MS_MAX: u64 = 2000;
/// Placeholder vendor until a real storefront is integrated.
const VENDOR_NAME: &str = "Nuuvem";
const VENDOR_URL: &str = "https://www.nuuvem.com/";

/// Produces simulated best-price deals for catalog records.
///
/// Lookups are independent across calls and fail closed: nothing in
/// here panics or surfaces an error, the worst outcome is `NotFound`.
#[derive(Debug, Clone)]
pub struct PromoFinder {
    current_year: i32,
}

impl PromoFinder {
    /// Build a finder anchored at the current calendar year.
    pub fn new() -> Self {
        Self {
            current_year: Local::now().year(),
        }
    }

    /// Build a finder anchored at a fixed year.
    pub fn with_year(current_year: i32) -> Self {
        Self { current_year }
    }

    /// Look up the best promotion for a record.
    ///
    /// Suspends for a uniformly random interval in [1000, 2000) ms to
    /// model network latency, then draws the outcome. Callers must not
    /// assume any ordering between concurrent lookups.
    pub async fn lookup(&self, record: &GameRecord) -> DealResult {
        let delay = rand::thread_rng().gen_range(DELAY_MS_MIN..DELAY_MS_MAX);
        sleep(Duration::from_millis(delay)).await;

        let result = draw_deal(record, self.current_year, &mut rand::thread_rng());
        debug!(
            name = %record.name,
            found = result.is_found(),
            "Promotion lookup resolved"
        );
        result
    }
}

impl Default for PromoFinder {
    fn default() -> Self {
        Self::new()
    }
}

/// Draw a simulated deal for `record` as of `current_year`.
///
/// Split out from [`PromoFinder::lookup`] so the statistical contract can
/// be exercised with a seeded generator.
pub fn draw_deal<R: Rng + ?Sized>(
    record: &GameRecord,
    current_year: i32,
    rng: &mut R,
) -> DealResult {
    if !rng.gen_bool(DEAL_PROBABILITY) {
        return DealResult::NotFound;
    }

    let age = current_year - record.year;
    let (min_price, max_price) = price_band(age);
    let price = rng.gen_range(min_price..max_price);

    DealResult::Found {
        price: (price * 100.0).round() / 100.0,
        vendor_name: VENDOR_NAME.to_string(),
        vendor_url: VENDOR_URL.to_string(),
    }
}

/// Price band for a game of the given age, upper bound exclusive.
///
/// Future-dated records (negative age) fall in the newest band.
pub fn price_band(age: i32) -> (f64, f64) {
    if age <= 1 {
        (150.0, 250.0)
    } else if age <= 4 {
        (80.0, 149.0)
    } else if age <= 7 {
        (40.0, 79.0)
    } else {
        (10.0, 39.0)
    }
}
