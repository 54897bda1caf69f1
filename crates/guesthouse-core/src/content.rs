//! Site Content
//!
//! Fixed marketing data rendered by the static pages.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

pub const SITE_NAME: &str = "Senate Guesthouse";

pub const TAGLINE: &str = "A quiet, friendly place to stay a short walk from the town centre";

pub const ABOUT: &str = "Senate Guesthouse is a family-run guesthouse with comfortable rooms, \
    a leafy garden terrace and breakfast made fresh every morning. Whether you are visiting for \
    business or taking a short break, our team will make you feel at home.";

pub const HIGHLIGHTS: [(&str, &str); 3] = [
    ("Comfortable Rooms", "Clean, air-conditioned rooms with fresh linen and private bathrooms."),
    ("Breakfast Included", "A continental breakfast served every morning from 7 to 10 AM."),
    ("Great Location", "Walk to shops, restaurants and the bus station in minutes."),
];

/// A room type offered by the guesthouse
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub name: String,
    pub description: String,
    /// Price per night in USD
    pub nightly_rate: Decimal,
    pub max_guests: u32,
    pub amenities: Vec<String>,
    pub image: String,
}

impl Room {
    fn new(
        name: &str,
        description: &str,
        nightly_rate: Decimal,
        max_guests: u32,
        amenities: &[&str],
        image: &str,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            nightly_rate,
            max_guests,
            amenities: amenities.iter().map(|a| (*a).to_string()).collect(),
            image: image.into(),
        }
    }

    /// Rate formatted for display, e.g. `$65/night`
    pub fn rate_label(&self) -> String {
        format!("${}/night", self.nightly_rate.round_dp(2).normalize())
    }

    /// Cost of a stay before any discounts
    pub fn stay_cost(&self, nights: u32) -> Decimal {
        self.nightly_rate * Decimal::from(nights)
    }
}

pub fn rooms() -> Vec<Room> {
    vec![
        Room::new(
            "Standard Single",
            "A cosy room for the solo traveller with a single bed and work desk.",
            dec!(45),
            1,
            &["Free Wi-Fi", "Air conditioning", "Private bathroom"],
            "/images/room-single.jpg",
        ),
        Room::new(
            "Deluxe Double",
            "A bright double room with a queen-size bed overlooking the garden.",
            dec!(65),
            2,
            &["Free Wi-Fi", "Air conditioning", "Private bathroom", "Garden view", "Smart TV"],
            "/images/room-double.jpg",
        ),
        Room::new(
            "Family Suite",
            "Two connected rooms with a double bed and two singles, ideal for families.",
            dec!(110),
            4,
            &["Free Wi-Fi", "Air conditioning", "Two bathrooms", "Kitchenette", "Smart TV"],
            "/images/room-suite.jpg",
        ),
    ]
}

/// A picture in the gallery
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub src: String,
    /// Never empty
    pub alt: String,
    pub caption: String,
}

pub fn gallery() -> Vec<GalleryImage> {
    [
        ("/images/exterior.jpg", "Front view of the guesthouse at dusk", "Welcome"),
        ("/images/garden.jpg", "Garden terrace with tables and umbrellas", "Garden terrace"),
        ("/images/room-double.jpg", "Deluxe double room with queen-size bed", "Deluxe Double"),
        ("/images/room-suite.jpg", "Family suite living area", "Family Suite"),
        ("/images/breakfast.jpg", "Breakfast buffet with fruit and pastries", "Breakfast"),
        ("/images/lounge.jpg", "Shared lounge with sofas and television", "Lounge"),
    ]
    .into_iter()
    .map(|(src, alt, caption)| GalleryImage {
        src: src.into(),
        alt: alt.into(),
        caption: caption.into(),
    })
    .collect()
}

/// A guest review
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub author: String,
    /// 1 to 5 stars
    pub rating: u8,
    pub text: String,
    pub stay: String,
}

pub fn reviews() -> Vec<Review> {
    [
        ("Amina K.", 5, "Spotless rooms and the friendliest staff. Breakfast was lovely.", "November 2024"),
        ("David O.", 4, "Great value and a quiet night's sleep. Parking was easy.", "October 2024"),
        ("Grace M.", 5, "We booked the family suite and the kids loved the garden.", "September 2024"),
        ("Peter N.", 4, "Close to everything in town. Wi-Fi was fast enough for work.", "August 2024"),
        ("Lucy W.", 5, "Felt like home. Will definitely stay again.", "July 2024"),
    ]
    .into_iter()
    .map(|(author, rating, text, stay)| Review {
        author: author.into(),
        rating,
        text: text.into(),
        stay: stay.into(),
    })
    .collect()
}

/// Aggregate star rating
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingSummary {
    /// Mean rating rounded to one decimal place
    pub average: Decimal,
    pub count: usize,
    /// `distribution[i]` counts reviews with `i + 1` stars
    pub distribution: [usize; 5],
}

impl RatingSummary {
    pub fn from_reviews(reviews: &[Review]) -> Self {
        Self::from_ratings(reviews.iter().map(|r| r.rating))
    }

    /// Ratings outside 1..=5 are ignored
    pub fn from_ratings(ratings: impl IntoIterator<Item = u8>) -> Self {
        let mut distribution = [0usize; 5];
        let mut total = 0u32;
        let mut count = 0usize;

        for rating in ratings.into_iter().filter(|r| (1..=5).contains(r)) {
            distribution[usize::from(rating - 1)] += 1;
            total += u32::from(rating);
            count += 1;
        }

        if count == 0 {
            return Self::default();
        }

        let average = (Decimal::from(total) / Decimal::from(count)).round_dp(1);
        Self {
            average,
            count,
            distribution,
        }
    }

    /// Star string like `★★★★☆` for the rounded average
    pub fn stars(&self) -> String {
        let full = self.average.round().to_usize().unwrap_or(0).min(5);
        format!("{}{}", "★".repeat(full), "☆".repeat(5 - full))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rooms_have_rates() {
        let rooms = rooms();
        assert_eq!(rooms.len(), 3);
        assert_eq!(rooms[1].rate_label(), "$65/night");
        assert_eq!(rooms[2].stay_cost(3), dec!(330));
    }

    #[test]
    fn test_gallery_images_have_alt_text() {
        let images = gallery();
        assert!(!images.is_empty());
        assert!(images.iter().all(|img| !img.alt.trim().is_empty()));
    }

    #[test]
    fn test_rating_summary() {
        let summary = RatingSummary::from_reviews(&reviews());
        assert_eq!(summary.count, 5);
        assert_eq!(summary.average, dec!(4.6));
        assert_eq!(summary.distribution, [0, 0, 0, 2, 3]);
        assert_eq!(summary.stars(), "★★★★★");
    }

    #[test]
    fn test_rating_summary_ignores_out_of_range() {
        let mut reviews = reviews();
        reviews.truncate(1);
        reviews.push(Review {
            author: "Bot".into(),
            rating: 0,
            text: String::new(),
            stay: String::new(),
        });
        let summary = RatingSummary::from_reviews(&reviews);
        assert_eq!(summary.count, 1);
        assert_eq!(summary.average, dec!(5));
    }

    #[test]
    fn test_summary_from_raw_ratings() {
        let summary = RatingSummary::from_ratings([5, 4, 4, 3, 9]);
        assert_eq!(summary.count, 4);
        assert_eq!(summary.average, dec!(4));
        assert_eq!(summary.distribution, [0, 0, 1, 2, 1]);
    }

    #[test]
    fn test_empty_summary() {
        let summary = RatingSummary::from_reviews(&[]);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.stars(), "☆☆☆☆☆");
    }
}
