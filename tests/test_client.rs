use std::sync::{Arc, Mutex};

use axum::{Json, Router, extract::State, routing::post};
use serde_json::{Value, json};
use wecom_bot_sdk::{
    ErrorKind,
    http::client::WebhookClient,
    model::{FileMessage, MarkdownMessage, TextMessage},
};

/// 假的 webhook 接口，记录收到的报文
#[derive(Clone, Default)]
struct Received {
    bodies: Arc<Mutex<Vec<Value>>>,
}

async fn ok_handler(State(received): State<Received>, Json(body): Json<Value>) -> Json<Value> {
    received.bodies.lock().unwrap().push(body);
    Json(json!({ "errcode": 0, "errmsg": "ok" }))
}

async fn rejected_handler(Json(_body): Json<Value>) -> Json<Value> {
    Json(json!({ "errcode": 93000, "errmsg": "invalid webhook url" }))
}

async fn broken_handler() -> &'static str {
    "502 bad gateway"
}

async fn serve_webhook() -> (String, Received) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
    let received = Received::default();
    let router = Router::new()
        .route("/ok", post(ok_handler))
        .route("/rejected", post(rejected_handler))
        .route("/broken", post(broken_handler))
        .with_state(received.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    (format!("http://{addr}"), received)
}

#[tokio::test]
async fn accepted_message_reports_success() {
    let (base, received) = serve_webhook().await;
    let client = WebhookClient::new(format!("{base}/ok").as_str());

    let response = client.send_message(TextMessage::new("你好")).await.unwrap();
    assert!(response.is_success());
    assert_eq!(response.errcode, 0);
    assert_eq!(response.errmsg, "ok");

    let bodies = received.bodies.lock().unwrap();
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0]["msgtype"], "text");
    assert_eq!(bodies[0]["text"]["content"], "你好");
}

#[tokio::test]
async fn rejected_message_is_not_an_error() {
    let (base, _received) = serve_webhook().await;
    let client = WebhookClient::new(format!("{base}/rejected").as_str());

    let response = client
        .send_message(MarkdownMessage::new("# 标题"))
        .await
        .unwrap();
    assert!(!response.is_success());
    assert_eq!(response.errcode, 93000);
    assert_eq!(response.errmsg, "invalid webhook url");
    assert_eq!(response.to_string(), "[93000]invalid webhook url");
}

#[tokio::test]
async fn malformed_response_is_an_error() {
    let (base, _received) = serve_webhook().await;
    let client = WebhookClient::new(format!("{base}/broken").as_str());

    let err = client
        .send_message(TextMessage::new("你好"))
        .await
        .unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::Reqwest(_)));
    assert!(err.to_string().starts_with("parse webhook response"));
}

#[tokio::test]
async fn raw_body_is_passed_through() {
    let (base, received) = serve_webhook().await;
    let client = WebhookClient::new(format!("{base}/ok").as_str());

    let response = client
        .send_raw(r#"{"msgtype":"text","text":{"content":"raw"}}"#)
        .await
        .unwrap();
    assert!(response.is_success());

    let bodies = received.bodies.lock().unwrap();
    assert_eq!(bodies[0], json!({"msgtype":"text","text":{"content":"raw"}}));
}

#[tokio::test]
async fn send_by_url_overrides_bound_webhook() {
    let (base, received) = serve_webhook().await;
    let client = WebhookClient::new("http://127.0.0.1:9/unused");

    let response = client
        .send_message_by_url(format!("{base}/ok").as_str(), FileMessage::new("MEDIA"))
        .await
        .unwrap();
    assert!(response.is_success());
    assert_eq!(
        received.bodies.lock().unwrap()[0]["file"]["media_id"],
        "MEDIA"
    );
}

#[tokio::test]
async fn custom_reqwest_client_is_used() {
    let (base, _received) = serve_webhook().await;
    let client =
        WebhookClient::from_client(reqwest::Client::new(), format!("{base}/ok").as_str());

    let response = client
        .send_raw(r#"{"msgtype":"text","text":{"content":"raw"}}"#)
        .await
        .unwrap();
    assert!(response.is_success());
}

#[tokio::test]
async fn connection_refused_is_an_error() {
    let client = WebhookClient::new("http://127.0.0.1:9/");

    let err = client
        .send_message(TextMessage::new("你好"))
        .await
        .unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::Reqwest(_)));
    assert!(err.to_string().starts_with("send webhook request"));
}

#[test]
fn from_key_builds_full_webhook() {
    let client = WebhookClient::from_key("693a91f6-7xxx-4bc4-97a0-0ec2sifa5aaa");
    assert_eq!(
        client.webhook(),
        "https://qyapi.weixin.qq.com/cgi-bin/webhook/send?key=693a91f6-7xxx-4bc4-97a0-0ec2sifa5aaa"
    );
}
