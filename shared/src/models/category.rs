//! Service category model

use serde::{Deserialize, Serialize};

/// Marketplace service kind
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceCategory {
    /// Puja booking
    #[default]
    Puja,
    /// Hall rental
    Hall,
    /// Temple event
    Event,
    /// Pilgrim accommodation
    Accommodation,
}

impl ServiceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceCategory::Puja => "puja",
            ServiceCategory::Hall => "hall",
            ServiceCategory::Event => "event",
            ServiceCategory::Accommodation => "accommodation",
        }
    }
}

impl std::fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
