use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A restaurant proposed by a user, waiting for or past moderation.
///
/// `name` is the lookup key for approval but is not unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
    pub cuisine: String,
    /// Free-form score, kept in the numeric form it was submitted in;
    /// serialized as `null` when absent.
    pub rating: Option<Number>,
}

impl Restaurant {
    /// A zero rating counts as "not rated".
    pub fn new(
        name: impl Into<String>,
        cuisine: impl Into<String>,
        rating: Option<Number>,
    ) -> Self {
        Self {
            name: name.into(),
            cuisine: cuisine.into(),
            rating: rating.filter(|n| n.as_f64() != Some(0.0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_rating_serializes_as_null() {
        let restaurant = Restaurant::new("Joe's", "Italian", None);
        assert_eq!(
            serde_json::to_value(&restaurant).unwrap(),
            json!({"name": "Joe's", "cuisine": "Italian", "rating": null})
        );
    }

    #[test]
    fn zero_rating_is_dropped() {
        assert_eq!(Restaurant::new("A", "B", Some(Number::from(0))).rating, None);
        assert_eq!(Restaurant::new("A", "B", Number::from_f64(0.0)).rating, None);
        assert_eq!(
            Restaurant::new("A", "B", Number::from_f64(4.5)).rating,
            Number::from_f64(4.5)
        );
    }

    #[test]
    fn integer_rating_stays_an_integer() {
        let restaurant = Restaurant::new("Joe's", "Italian", Some(Number::from(4)));
        assert_eq!(serde_json::to_value(&restaurant).unwrap()["rating"], json!(4));
    }
}
