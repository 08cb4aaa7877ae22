use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Thumbs up / thumbs down on a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Liked,
    Disliked,
}

impl Rating {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Liked => "liked",
            Rating::Disliked => "disliked",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rating {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "liked" => Ok(Rating::Liked),
            "disliked" => Ok(Rating::Disliked),
            other => Err(CoreError::InvalidRating(other.to_string())),
        }
    }
}

/// Row written to the `ratings` table.
///
/// `recommendation_id` is not checked against existing recommendations, and
/// the same recommendation may be rated any number of times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingRecord {
    pub recommendation_id: String,
    pub rating: Rating,
}
