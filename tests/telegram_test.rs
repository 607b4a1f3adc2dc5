mod common;

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{Json, Router, extract::State, routing::post};
use common::StubSearch;
use reqwest::Client;
use serde_json::{Value, json};
use tokio::sync::Notify;
use trackrelay::{RelayError, bot, bot::CommandRouter, telegram::TelegramClient};

#[derive(Clone, Default)]
struct FakeBotApi {
    pending: Arc<Mutex<Vec<Value>>>,
    offsets: Arc<Mutex<Vec<Value>>>,
    sent: Arc<Mutex<Vec<Value>>>,
    delivered: Arc<Notify>,
}

async fn get_me() -> Json<Value> {
    Json(json!({
        "ok": true,
        "result": { "id": 42, "is_bot": true, "first_name": "Tracks", "username": "trackrelay_bot" }
    }))
}

async fn get_updates(State(api): State<FakeBotApi>, Json(body): Json<Value>) -> Json<Value> {
    api.offsets.lock().unwrap().push(body["offset"].clone());
    let updates: Vec<Value> = api.pending.lock().unwrap().drain(..).collect();
    if updates.is_empty() {
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    Json(json!({ "ok": true, "result": updates }))
}

async fn send_message(State(api): State<FakeBotApi>, Json(body): Json<Value>) -> Json<Value> {
    let chat_id = body["chat_id"].clone();
    api.sent.lock().unwrap().push(body);
    api.delivered.notify_one();
    Json(json!({
        "ok": true,
        "result": { "message_id": 1, "chat": { "id": chat_id }, "text": "sent" }
    }))
}

async fn rejecting() -> (axum::http::StatusCode, Json<Value>) {
    (
        axum::http::StatusCode::UNAUTHORIZED,
        Json(json!({ "ok": false, "error_code": 401, "description": "Unauthorized" })),
    )
}

// Serves the fake Bot API and returns its base url
async fn fake_bot_api(api: FakeBotApi) -> String {
    let app = Router::new()
        .route("/botTEST/getMe", post(get_me))
        .route("/botTEST/getUpdates", post(get_updates))
        .route("/botTEST/sendMessage", post(send_message))
        .route("/botBAD/getMe", post(rejecting))
        .with_state(api);
    common::spawn(app).await
}

fn client(base: &str, token: &str) -> TelegramClient {
    TelegramClient::new(Client::new(), base, token)
}

#[tokio::test]
async fn test_bot_replies_once_per_text_message() {
    let api = FakeBotApi::default();
    api.pending.lock().unwrap().extend([
        json!({ "update_id": 7, "message": { "message_id": 1, "chat": { "id": 99 } } }),
        json!({ "update_id": 8 }),
        json!({ "update_id": 9, "message": { "message_id": 2, "chat": { "id": 99 }, "text": "/artist Coldplay" } }),
    ]);
    let telegram = client(&fake_bot_api(api.clone()).await, "TEST");
    let stub = Arc::new(StubSearch::returning(&["Yellow - Coldplay"]));
    let router = CommandRouter::new(stub.clone());

    let delivered = Arc::clone(&api.delivered);
    let shutdown = async move { delivered.notified().await };
    tokio::time::timeout(
        Duration::from_secs(5),
        bot::run_until(&telegram, &router, 0, shutdown),
    )
    .await
    .expect("bot stops after the reply")
    .unwrap();

    let sent = api.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0]["chat_id"], 99);
    assert!(sent[0]["text"].as_str().unwrap().contains("Yellow - Coldplay"));
    assert!(sent[0].get("reply_markup").is_none());
    assert_eq!(stub.calls(), 1);

    let offsets = api.offsets.lock().unwrap();
    assert_eq!(offsets[0], Value::Null);
}

#[tokio::test]
async fn test_start_reply_carries_keyboard() {
    let telegram = client(&fake_bot_api(FakeBotApi::default()).await, "TEST");
    let keyboard = trackrelay::types::ReplyKeyboardMarkup::single_row(&["/artist", "/genre"]);

    let message = telegram
        .send_message(5, "hello", Some(&keyboard))
        .await
        .unwrap();

    assert_eq!(message.chat.id, 5);
}

#[tokio::test]
async fn test_offset_advances_past_handled_updates() {
    let api = FakeBotApi::default();
    api.pending.lock().unwrap().push(
        json!({ "update_id": 41, "message": { "message_id": 3, "chat": { "id": 1 }, "text": "/start" } }),
    );
    let telegram = client(&fake_bot_api(api.clone()).await, "TEST");
    let router = CommandRouter::new(Arc::new(StubSearch::returning(&[])));

    let offsets = Arc::clone(&api.offsets);
    let shutdown = async move {
        loop {
            if offsets.lock().unwrap().len() >= 2 {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    };
    tokio::time::timeout(
        Duration::from_secs(5),
        bot::run_until(&telegram, &router, 0, shutdown),
    )
    .await
    .expect("bot polls twice")
    .unwrap();

    let offsets = api.offsets.lock().unwrap();
    assert_eq!(offsets[1], 42);
    let sent = api.sent.lock().unwrap();
    assert_eq!(sent[0]["reply_markup"]["keyboard"][0][0]["text"], "/artist");
}

#[tokio::test]
async fn test_rejected_call_is_a_telegram_error() {
    let bad = client(&fake_bot_api(FakeBotApi::default()).await, "BAD");

    let err = bad.get_me().await.unwrap_err();
    match err {
        RelayError::Telegram(msg) => assert!(msg.contains("Unauthorized")),
        other => panic!("expected telegram error, got {:?}", other),
    }
}
