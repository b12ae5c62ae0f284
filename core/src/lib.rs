//! Synchronous API client core for the demo posts service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The host executes the HTTP
//! round-trip and feeds the results into `PostsView`, which renders the
//! posts list.
//!
//! # Design
//! - `PostsClient` is stateless; it holds only `base_url`.
//! - Each operation is split into `build_*` and `parse_*` so the I/O boundary
//!   is explicit.
//! - Parse errors stay typed. `or_empty` is the opt-in policy that logs a
//!   failed fetch and substitutes an empty collection.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod types;
pub mod view;

pub use client::{or_empty, PostsClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{Comment, NewPost, Post};
pub use view::PostsView;
