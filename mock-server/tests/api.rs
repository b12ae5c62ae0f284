use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, Comment, Post, Store, COMMENTS_PER_POST, SEED_POSTS};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

// --- posts ---

#[tokio::test]
async fn list_posts_returns_seeded_posts() {
    let resp = app().oneshot(get("/posts")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let posts: Vec<Post> = body_json(resp).await;
    assert_eq!(posts.len() as u64, SEED_POSTS);
    assert_eq!(posts[0].id, 1);
    assert_eq!(posts[0].title, "post title 1");
}

#[tokio::test]
async fn list_posts_empty_store() {
    let resp = app_with(Store::default()).oneshot(get("/posts")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let posts: Vec<Post> = body_json(resp).await;
    assert!(posts.is_empty());
}

#[tokio::test]
async fn get_post_by_id() {
    let resp = app().oneshot(get("/posts/3")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let post: Post = body_json(resp).await;
    assert_eq!(post.id, 3);
}

#[tokio::test]
async fn get_post_not_found() {
    let resp = app().oneshot(get("/posts/9999")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_post_bad_id_returns_400() {
    let resp = app().oneshot(get("/posts/abc")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let resp = app().oneshot(get("/users")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- comments ---

#[tokio::test]
async fn list_comments_returns_all_comments() {
    let resp = app().oneshot(get("/comments")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let comments: Vec<Comment> = body_json(resp).await;
    assert_eq!(comments.len() as u64, SEED_POSTS * COMMENTS_PER_POST);
}

#[tokio::test]
async fn list_post_comments_filters_by_post() {
    let resp = app().oneshot(get("/posts/2/comments")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let comments: Vec<Comment> = body_json(resp).await;
    assert_eq!(comments.len() as u64, COMMENTS_PER_POST);
    assert!(comments.iter().all(|c| c.post_id == 2));
}

// --- create ---

#[tokio::test]
async fn create_post_returns_201_with_next_id() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/posts",
            r#"{"title":"TSU","body":"We learn typescript","userId":1}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let post: Post = body_json(resp).await;
    assert_eq!(post.id, SEED_POSTS + 1);
    assert_eq!(post.title, "TSU");
    assert_eq!(post.body, "We learn typescript");
    assert_eq!(post.user_id, 1);
}

#[tokio::test]
async fn create_post_missing_field_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/posts", r#"{"title":"only a title"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn create_then_list_includes_new_post() {
    use tower::Service;

    let mut app = app().into_service();

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/posts",
            r#"{"title":"fresh","body":"b","userId":2}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Post = body_json(resp).await;

    let resp = ServiceExt::ready(&mut app).await.unwrap().call(get("/posts")).await.unwrap();
    let posts: Vec<Post> = body_json(resp).await;
    assert_eq!(posts.len() as u64, SEED_POSTS + 1);
    assert_eq!(posts.last(), Some(&created));

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get(&format!("/posts/{}", created.id)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}
