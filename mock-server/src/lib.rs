use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

pub const SEED_POSTS: u64 = 20;
pub const POSTS_PER_USER: u64 = 10;
pub const COMMENTS_PER_POST: u64 = 2;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub body: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub post_id: u64,
    pub id: u64,
    pub name: String,
    pub email: String,
    pub body: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub user_id: u64,
}

#[derive(Debug, Default)]
pub struct Store {
    pub posts: Vec<Post>,
    pub comments: Vec<Comment>,
}

impl Store {
    /// Deterministic demo data shaped like the public placeholder API.
    pub fn seeded() -> Self {
        let posts: Vec<Post> = (1..=SEED_POSTS)
            .map(|id| Post {
                user_id: (id - 1) / POSTS_PER_USER + 1,
                id,
                title: format!("post title {id}"),
                body: format!("body of post {id}"),
            })
            .collect();
        let comments = posts
            .iter()
            .flat_map(|post| {
                (0..COMMENTS_PER_POST).map(move |n| {
                    let id = (post.id - 1) * COMMENTS_PER_POST + n + 1;
                    Comment {
                        post_id: post.id,
                        id,
                        name: format!("comment {id}"),
                        email: format!("user{id}@example.org"),
                        body: format!("comment {id} on post {}", post.id),
                    }
                })
            })
            .collect();
        Self { posts, comments }
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    app_with(Store::seeded())
}

pub fn app_with(store: Store) -> Router {
    let db: Db = Arc::new(RwLock::new(store));
    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route("/posts/{id}", get(get_post))
        .route("/posts/{id}/comments", get(list_post_comments))
        .route("/comments", get(list_comments))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_posts(State(db): State<Db>) -> Json<Vec<Post>> {
    let store = db.read().await;
    tracing::debug!(count = store.posts.len(), "GET /posts");
    Json(store.posts.clone())
}

async fn get_post(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Post>, StatusCode> {
    let store = db.read().await;
    store
        .posts
        .iter()
        .find(|p| p.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn list_comments(State(db): State<Db>) -> Json<Vec<Comment>> {
    let store = db.read().await;
    tracing::debug!(count = store.comments.len(), "GET /comments");
    Json(store.comments.clone())
}

async fn list_post_comments(State(db): State<Db>, Path(id): Path<u64>) -> Json<Vec<Comment>> {
    let store = db.read().await;
    Json(store.comments.iter().filter(|c| c.post_id == id).cloned().collect())
}

async fn create_post(State(db): State<Db>, Json(input): Json<NewPost>) -> (StatusCode, Json<Post>) {
    let mut store = db.write().await;
    let id = store.posts.iter().map(|p| p.id).max().unwrap_or(0) + 1;
    let post = Post {
        user_id: input.user_id,
        id,
        title: input.title,
        body: input.body,
    };
    store.posts.push(post.clone());
    tracing::info!(id, "created post");
    (StatusCode::CREATED, Json(post))
}
