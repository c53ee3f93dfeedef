//! Marketplace posting model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Marketplace category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Buy,
    Sell,
    Rent,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Buy => "buy",
            Category::Sell => "sell",
            Category::Rent => "rent",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "buy" => Some(Category::Buy),
            "sell" => Some(Category::Sell),
            "rent" => Some(Category::Rent),
            _ => None,
        }
    }
}

/// A marketplace posting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Posting {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    /// Free-form text ("Rs.12000/month"), not a numeric amount
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    pub contact: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new posting.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPosting {
    pub title: String,
    pub description: String,
    pub category: Category,
    #[serde(default)]
    pub price: Option<String>,
    pub contact: String,
}
