//! Stateless HTTP request builder and response parser for the posts API.
//!
//! # Design
//! `PostsClient` holds only a `base_url`. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`. Reads and the create call are independent
//! operations on the same value; neither is layered on the other.
//!
//! Parse methods always return a typed `Result`. The fetch wrapper's
//! "log and show nothing" behaviour is the separate `or_empty` step, so a
//! caller that needs to tell "no data" from "error" still can.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Comment, NewPost, Post};

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

pub const POSTS_PATH: &str = "/posts";
pub const COMMENTS_PATH: &str = "/comments";

/// Synchronous, stateless client for the demo posts API.
#[derive(Debug, Clone)]
pub struct PostsClient {
    base_url: String,
}

impl Default for PostsClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl PostsClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn posts_endpoint(&self) -> String {
        format!("{}{POSTS_PATH}", self.base_url)
    }

    pub fn comments_endpoint(&self) -> String {
        format!("{}{COMMENTS_PATH}", self.base_url)
    }

    /// GET an arbitrary endpoint URL.
    pub fn build_get(&self, endpoint: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: endpoint.to_string(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_list_posts(&self) -> HttpRequest {
        self.build_get(&self.posts_endpoint())
    }

    pub fn build_list_comments(&self) -> HttpRequest {
        self.build_get(&self.comments_endpoint())
    }

    pub fn build_create_post(&self, input: &NewPost) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: self.posts_endpoint(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    /// POST the fixed demo payload. Takes no input so the body can never vary.
    pub fn build_create_demo_post(&self) -> Result<HttpRequest, ApiError> {
        self.build_create_post(&NewPost::demo())
    }

    /// Check the status and decode the body as a JSON array of `T`.
    pub fn parse_collection<T: DeserializeOwned>(&self, response: HttpResponse) -> Result<Vec<T>, ApiError> {
        check_status(&response)?;
        let items: Vec<T> =
            serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))?;
        tracing::debug!(count = items.len(), payload = %response.body, "decoded collection");
        Ok(items)
    }

    pub fn parse_posts(&self, response: HttpResponse) -> Result<Vec<Post>, ApiError> {
        self.parse_collection(response)
    }

    pub fn parse_comments(&self, response: HttpResponse) -> Result<Vec<Comment>, ApiError> {
        self.parse_collection(response)
    }

    /// Any 2xx is accepted; the demo API answers 201 with the stored record.
    pub fn parse_create_post(&self, response: HttpResponse) -> Result<serde_json::Value, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }
}

/// Collapse a failed fetch into an empty collection, logging the cause.
pub fn or_empty<T>(result: Result<Vec<T>, ApiError>, endpoint: &str) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(err) => {
            tracing::warn!(%endpoint, error = %err, "GET failed, showing empty result");
            Vec::new()
        }
    }
}

fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::HttpStatus {
        status: response.status,
        body: response.body.clone(),
    })
}
