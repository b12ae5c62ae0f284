//! Render state for the posts list.
//!
//! `PostsView` owns the only mutable state in the system: the collection
//! most recently handed to `apply_posts`. Whichever fetch completes last
//! wins; there is no request ordering.

use std::fmt::Write as _;

use crate::types::Post;

pub const HEADING: &str = "Posts";

#[derive(Debug, Clone, Default)]
pub struct PostsView {
    records: Vec<Post>,
}

impl PostsView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the render state with a freshly fetched collection.
    pub fn apply_posts(&mut self, posts: Vec<Post>) {
        tracing::debug!(count = posts.len(), "view state replaced");
        self.records = posts;
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// List item texts, one per stored post, in stored order.
    pub fn titles(&self) -> Vec<&str> {
        self.records.iter().map(|p| p.title.as_str()).collect()
    }

    /// Heading line followed by one `"{index}. {title}"` item per post.
    /// Items are keyed by position, starting at 1.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(HEADING);
        out.push('\n');
        for (index, post) in self.records.iter().enumerate() {
            // Writing into a String cannot fail.
            let _ = writeln!(out, "{}. {}", index + 1, post.title);
        }
        out
    }
}
