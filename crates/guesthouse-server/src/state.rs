//! Application State

use guesthouse_core::{BookingDesk, RatingBoard};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Booking pipeline with whichever collaborators are configured
    pub desk: BookingDesk,

    /// Live guest ratings, built-in reviews otherwise
    pub ratings: RatingBoard,
}

impl AppState {
    /// State whose ratings come from the built-in reviews only
    pub fn new(desk: BookingDesk) -> Self {
        Self {
            desk,
            ratings: RatingBoard::new(),
        }
    }

    pub fn with_ratings(mut self, ratings: RatingBoard) -> Self {
        self.ratings = ratings;
        self
    }
}
