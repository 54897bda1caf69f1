//! Guest Ratings
//!
//! The reviews page shows a live summary of the ratings kept in the
//! datastore. When no live source is configured, the read fails, or nothing
//! has been rated yet, the summary comes from the built-in review list.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::content::{self, RatingSummary};
use crate::error::Result;
use crate::provider::RatingSource;

/// Ratings from the built-in review list
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticRatings;

#[async_trait]
impl RatingSource for StaticRatings {
    async fn ratings(&self) -> Result<Vec<u8>> {
        Ok(content::reviews().iter().map(|r| r.rating).collect())
    }

    fn name(&self) -> &str {
        "static"
    }
}

/// Summary plus where it came from
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingReport {
    #[serde(flatten)]
    pub summary: RatingSummary,
    pub source: String,
}

impl RatingReport {
    pub fn from_static() -> Self {
        Self {
            summary: RatingSummary::from_reviews(&content::reviews()),
            source: StaticRatings.name().to_string(),
        }
    }
}

/// Picks the live rating source when it has something to show
#[derive(Clone, Default)]
pub struct RatingBoard {
    live: Option<Arc<dyn RatingSource>>,
}

impl RatingBoard {
    /// Board that only knows the built-in reviews
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_live(mut self, source: Arc<dyn RatingSource>) -> Self {
        self.live = Some(source);
        self
    }

    pub const fn live_configured(&self) -> bool {
        self.live.is_some()
    }

    pub async fn report(&self) -> RatingReport {
        let Some(live) = &self.live else {
            return RatingReport::from_static();
        };

        match live.ratings().await {
            Ok(ratings) => {
                let summary = RatingSummary::from_ratings(ratings);
                if summary.count == 0 {
                    tracing::debug!(source = live.name(), "No live ratings yet, using reviews");
                    return RatingReport::from_static();
                }
                RatingReport {
                    summary,
                    source: live.name().to_string(),
                }
            }
            Err(e) => {
                tracing::warn!(source = live.name(), error = %e, "Rating read failed, using reviews");
                RatingReport::from_static()
            }
        }
    }
}
