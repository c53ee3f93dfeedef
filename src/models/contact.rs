//! Important-contact model.

use serde::{Deserialize, Serialize};

/// A community service contact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub role: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub department: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
}

/// Input for creating a new contact.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContact {
    pub name: String,
    pub role: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    pub department: String,
    #[serde(default)]
    pub availability: Option<String>,
}
