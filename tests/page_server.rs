use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use mockito::{Matcher, Server};
use scribe::{config::Config, server::router};
use serde_json::json;
use tower::ServiceExt;

fn config(base_url: String) -> Config {
    Config {
        api_key: Some("gsk_test".to_string()),
        base_url,
        model: "llama-3.3-70b-versatile".to_string(),
    }
}

fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_text(app: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test(flavor = "multi_thread")]
async fn index_shows_empty_form() {
    let app = router(config("http://127.0.0.1:9".to_string()), "missing-logo.jpg");
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let (status, html) = body_text(app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("AI Content Writer"));
    assert!(html.contains("What would you like to write about?"));
}

#[tokio::test(flavor = "multi_thread")]
async fn generate_renders_model_markdown() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer gsk_test")
        .match_body(Matcher::AllOf(vec![
            Matcher::PartialJson(json!({"model": "llama-3.3-70b-versatile"})),
            Matcher::Regex("article about: Solar Power".to_string()),
        ]))
        .with_status(200)
        .with_body(
            json!({"choices": [{"message": {"content": "# Solar Power\n\nThe sun is **bright**."}}]})
                .to_string(),
        )
        .create_async()
        .await;

    let app = router(config(server.url()), "missing-logo.jpg");
    let (status, html) = body_text(app, form_post("/generate", "topic=Solar+Power")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<h1>Solar Power</h1>"));
    assert!(html.contains("<strong>bright</strong>"));
    assert!(html.contains("solar_power_article.md"));
    mock.assert_async().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn blank_topic_warns_without_calling_api() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .expect(0)
        .create_async()
        .await;

    let app = router(config(server.url()), "missing-logo.jpg");
    let (status, html) = body_text(app, form_post("/generate", "topic=+++")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Please enter a topic first!"));
    mock.assert_async().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn api_failure_is_shown_on_page() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(500)
        .with_body("upstream exploded")
        .create_async()
        .await;

    let app = router(config(server.url()), "missing-logo.jpg");
    let (status, html) = body_text(app, form_post("/generate", "topic=Rust")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("An error occurred while generating content"));
    assert!(html.contains("upstream exploded"));
    assert!(html.contains("Please make sure your Groq API key is properly set"));
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_key_is_shown_on_page() {
    let mut no_key = config("http://127.0.0.1:9".to_string());
    no_key.api_key = None;
    let app = router(no_key, "missing-logo.jpg");
    let (_, html) = body_text(app, form_post("/generate", "topic=Rust")).await;
    assert!(html.contains("GROQ_API_KEY is not set"));
}

#[tokio::test(flavor = "multi_thread")]
async fn download_returns_markdown_attachment() {
    let app = router(config("http://127.0.0.1:9".to_string()), "missing-logo.jpg");
    let response = app
        .oneshot(form_post(
            "/download",
            "topic=The+Future+of+Renewable+Energy+Sources&content=%23+Title%0D%0A%0D%0ABody",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/markdown; charset=utf-8"
    );
    let disposition = response.headers()[header::CONTENT_DISPOSITION]
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.contains("filename=\"the_future_of_renewable_energy_article.md\""));
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"# Title\n\nBody");
}

#[tokio::test(flavor = "multi_thread")]
async fn logo_is_served_when_present() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logo.jpg");

    let app = router(config("http://127.0.0.1:9".to_string()), path.clone());
    let request = Request::builder().uri("/logo.jpg").body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    scribe::logo::create_logo(&path, &dir.path().join("absent.ttf")).unwrap();
    let request = Request::builder().uri("/logo.jpg").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "image/jpeg");
}
