use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A business to look up, as submitted from the dashboard form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessRequest {
    pub name: String,
    pub location: String,
}

/// Rating, review count and marketing headline for one business
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessData {
    pub rating: f64,
    pub reviews: u32,
    pub headline: String,
}

/// Result of a headline-only regeneration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadlineResponse {
    pub headline: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidRequest {
    #[error("Business name cannot be empty")]
    EmptyName,
    #[error("Location cannot be empty")]
    EmptyLocation,
}

impl BusinessRequest {
    /// Build a request from raw form input, trimming both fields.
    pub fn parse(name: &str, location: &str) -> Result<Self, InvalidRequest> {
        let name = name.trim();
        if name.is_empty() {
            return Err(InvalidRequest::EmptyName);
        }
        let location = location.trim();
        if location.is_empty() {
            return Err(InvalidRequest::EmptyLocation);
        }
        Ok(Self {
            name: name.to_string(),
            location: location.to_string(),
        })
    }
}
