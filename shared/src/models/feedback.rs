//! Feedback Model
//!
//! 访客评价：星级 1-5，可附一张照片。

use serde::{Deserialize, Serialize};

/// Highest (and default) star rating
pub const MAX_RATING: u8 = 5;

/// Visitor feedback as exposed over the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub experience: String,
    pub rating: u8,
    /// Stored image filename, served under `/uploads/feedback/`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Server-assigned submission time (Unix millis)
    pub submitted_at: i64,
}

/// Translate a submitted rating value to an integer 1-5.
///
/// The feedback form sends either the star-symbol strings rendered on
/// the page ("⭐" through "⭐⭐⭐⭐⭐") or a plain integer as text.
/// Anything unrecognized falls back to the maximum rating.
pub fn parse_rating(value: &str) -> u8 {
    match value.trim() {
        "⭐" => 1,
        "⭐⭐" => 2,
        "⭐⭐⭐" => 3,
        "⭐⭐⭐⭐" => 4,
        "⭐⭐⭐⭐⭐" => 5,
        other => match other.parse::<u8>() {
            Ok(n) if (1..=MAX_RATING).contains(&n) => n,
            _ => MAX_RATING,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_symbols_map_to_their_count() {
        assert_eq!(parse_rating("⭐"), 1);
        assert_eq!(parse_rating("⭐⭐⭐"), 3);
        assert_eq!(parse_rating("⭐⭐⭐⭐⭐"), 5);
    }

    #[test]
    fn plain_integers_pass_through() {
        assert_eq!(parse_rating("1"), 1);
        assert_eq!(parse_rating("4"), 4);
    }

    #[test]
    fn unrecognized_values_default_to_max() {
        assert_eq!(parse_rating("garbage"), 5);
        assert_eq!(parse_rating(""), 5);
        assert_eq!(parse_rating("0"), 5);
        assert_eq!(parse_rating("9"), 5);
    }
}
