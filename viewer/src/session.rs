//! The display component: owns the view state and reacts to commands.
//!
//! Reads go through `Session::fetch`, which never fails: any transport,
//! status or decode error is logged and replaced with an empty collection.
//! Creating a post is a separate operation that reports failure as `Err`.

use std::io::{self, BufRead, Write};

use posts_core::{or_empty, ApiError, Comment, PostsClient, PostsView};
use serde::de::DeserializeOwned;

use crate::command::{Command, HELP};
use crate::transport::Transport;

const PROMPT: &str = "> ";

pub struct Session<T> {
    client: PostsClient,
    transport: T,
    view: PostsView,
}

impl<T: Transport> Session<T> {
    pub fn new(client: PostsClient, transport: T) -> Self {
        Self {
            client,
            transport,
            view: PostsView::new(),
        }
    }

    pub fn view(&self) -> &PostsView {
        &self.view
    }

    /// GET `endpoint` and decode a JSON array, or log and return nothing.
    pub fn fetch<U: DeserializeOwned>(&self, endpoint: &str) -> Vec<U> {
        let request = self.client.build_get(endpoint);
        let result = self
            .transport
            .execute(&request)
            .and_then(|response| self.client.parse_collection(response));
        or_empty(result, endpoint)
    }

    /// Initial load; identical to a refresh.
    pub fn mount(&mut self) {
        self.refresh();
    }

    pub fn refresh(&mut self) {
        let endpoint = self.client.posts_endpoint();
        let posts = self.fetch(&endpoint);
        tracing::info!(count = posts.len(), %endpoint, "fetched posts");
        self.view.apply_posts(posts);
    }

    /// Fetch comments and log them. The view is left untouched.
    pub fn comments(&self) -> Vec<Comment> {
        let endpoint = self.client.comments_endpoint();
        let comments: Vec<Comment> = self.fetch(&endpoint);
        tracing::info!(
            count = comments.len(),
            comments = %serde_json::Value::Array(comments.clone()),
            "fetched comments"
        );
        comments
    }

    /// Send the fixed demo post and log the outcome.
    pub fn create_post(&self) -> Result<serde_json::Value, ApiError> {
        let result = self
            .client
            .build_create_demo_post()
            .and_then(|request| self.transport.execute(&request))
            .and_then(|response| self.client.parse_create_post(response));
        match &result {
            Ok(json) => tracing::info!(response = %json, "POST response"),
            Err(err) => tracing::error!(error = %err, "POST error"),
        }
        result
    }

    /// Run one command, writing anything user-visible to `out`.
    /// Returns `false` once the session should end.
    pub fn dispatch<W: Write>(&mut self, command: Command, out: &mut W) -> io::Result<bool> {
        match command {
            Command::Refresh => {
                self.refresh();
                out.write_all(self.view.render().as_bytes())?;
            }
            Command::Comments => {
                let comments = self.comments();
                writeln!(out, "fetched {} comments", comments.len())?;
            }
            Command::Create => match self.create_post() {
                Ok(json) => writeln!(out, "created: {json}")?,
                Err(err) => writeln!(out, "create failed: {err}")?,
            },
            Command::Help => out.write_all(HELP.as_bytes())?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    /// Mount, render, then run each command in order.
    pub fn run_script<W: Write>(&mut self, commands: &[Command], out: &mut W) -> io::Result<()> {
        self.mount();
        out.write_all(self.view.render().as_bytes())?;
        for command in commands {
            if !self.dispatch(*command, out)? {
                break;
            }
        }
        out.flush()
    }

    /// Mount, render, then read commands line by line until `quit` or EOF.
    /// Lines that are not valid UTF-8 are decoded lossily and end up as
    /// unknown commands.
    pub fn run_interactive<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> io::Result<()> {
        self.mount();
        out.write_all(self.view.render().as_bytes())?;
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            if line.trim().is_empty() {
                write!(out, "{PROMPT}")?;
                out.flush()?;
                continue;
            }
            match line.parse::<Command>() {
                Ok(command) => {
                    if !self.dispatch(command, out)? {
                        return out.flush();
                    }
                }
                Err(err) => writeln!(out, "{err}")?,
            }
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }

        writeln!(out)?;
        out.flush()
    }
}
