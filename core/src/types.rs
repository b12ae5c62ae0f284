//! Domain DTOs for the demo posts API.
//!
//! # Design
//! Field names follow the API's camelCase JSON. The mock-server crate defines
//! its own copies; integration tests catch drift between the two.

use serde::{Deserialize, Serialize};

/// Comments are consumed as raw JSON; nothing in the viewer reads their
/// fields.
pub type Comment = serde_json::Value;

/// A single post returned by `GET /posts`. Every field is required, so a
/// list containing one incomplete post fails to decode as a whole.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub body: String,
}

/// Request payload for `POST /posts`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub user_id: u64,
}

impl NewPost {
    /// The fixed payload the viewer's create command always sends.
    pub fn demo() -> Self {
        Self {
            title: "TSU".to_string(),
            body: "We learn typescript".to_string(),
            user_id: 1,
        }
    }
}
