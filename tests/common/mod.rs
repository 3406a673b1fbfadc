//! A stand-in backend that speaks just enough of the real API.

#![allow(dead_code)]

use std::{net::SocketAddr, path::Path, sync::Arc};

use axum::{
    extract::{Multipart, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use axum_macros::debug_handler;
use serde_json::{json, Value};
use tokio::sync::Mutex;

use nutrilens::{config::Config, App};

pub const PHONE: &str = "5550100";
pub const PASSWORD: &str = "hunter2";
pub const TOKEN: &str = "server-token";
/// Logging in with this number succeeds but hands back no token.
pub const TOKENLESS_PHONE: &str = "5550199";
/// Chat messages with this text make the bot fail.
pub const BREAK_BOT: &str = "boom";

#[derive(Clone, Debug)]
pub struct Upload {
    pub user_id: String,
    pub bearer: String,
    pub file_name: String,
    pub size: usize,
}

#[derive(Default)]
pub struct Recorded {
    pub uploads: Vec<Upload>,
    pub preferences: Vec<Value>,
    pub chat_messages: Vec<String>,
}

#[derive(Clone, Default)]
pub struct Backend {
    pub recorded: Arc<Mutex<Recorded>>,
}

/// Start the fake backend on a free port and return its base url.
pub async fn spawn() -> (String, Backend) {
    let backend = Backend::default();

    let app = Router::new()
        .route("/login", post(login))
        .route("/send-message", post(send_message))
        .route("/api/analyze-product", post(analyze))
        .route("/preferences", post(preferences))
        .with_state(backend.clone());

    let server = axum::Server::bind(&SocketAddr::from(([127, 0, 0, 1], 0)))
        .serve(app.into_make_service());
    let addr = server.local_addr();
    tokio::spawn(server);

    (format!("http://{addr}"), backend)
}

pub fn start_app(base_url: &str, store_dir: &Path) -> App {
    let config = Config::with_base_url(base_url, store_dir.join("store.sqlite3"));
    App::start(config).unwrap()
}

fn bearer(headers: &HeaderMap) -> String {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.trim_start_matches("Bearer").trim().to_owned())
        .unwrap_or_default()
}

#[derive(serde::Deserialize)]
struct LoginBody {
    phone_number: String,
    password: String,
}

#[debug_handler]
async fn login(Json(body): Json<LoginBody>) -> (StatusCode, Json<Value>) {
    if body.phone_number == TOKENLESS_PHONE {
        return (
            StatusCode::OK,
            Json(json!({ "id": 7, "name": "Ghost", "phone_number": TOKENLESS_PHONE })),
        );
    }

    if body.phone_number == PHONE && body.password == PASSWORD {
        (
            StatusCode::OK,
            Json(json!({
                "id": 42,
                "name": "Aarohi",
                "phone_number": PHONE,
                "token": TOKEN,
            })),
        )
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Wrong password" })),
        )
    }
}

#[derive(serde::Deserialize)]
struct ChatBody {
    message: String,
}

#[debug_handler]
async fn send_message(
    State(backend): State<Backend>,
    Json(body): Json<ChatBody>,
) -> (StatusCode, Json<Value>) {
    backend
        .recorded
        .lock()
        .await
        .chat_messages
        .push(body.message.clone());

    if body.message == BREAK_BOT {
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({})));
    }

    (
        StatusCode::OK,
        Json(json!({ "botReply": format!("You said: {}", body.message) })),
    )
}

#[debug_handler]
async fn analyze(
    State(backend): State<Backend>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> (StatusCode, Json<Value>) {
    let mut upload = Upload {
        user_id: String::new(),
        bearer: bearer(&headers),
        file_name: String::new(),
        size: 0,
    };

    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_owned();
        match name.as_str() {
            "image" => {
                upload.file_name = field.file_name().unwrap_or_default().to_owned();
                upload.size = field.bytes().await.map(|bytes| bytes.len()).unwrap_or(0);
            }
            "userId" => upload.user_id = field.text().await.unwrap_or_default(),
            _ => {}
        }
    }

    let authorized = upload.bearer == TOKEN;
    backend.recorded.lock().await.uploads.push(upload);

    if !authorized {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Invalid token" })),
        );
    }

    (
        StatusCode::OK,
        Json(json!({
            "imageUrl": "https://img.example/oat-bar.jpg",
            "analysis": {
                "productName": "Oat Bar",
                "introduction": "A chewy oat snack.",
                "ingredients": [
                    { "name": "Oats", "healthRating": "Good" },
                    { "name": "Glucose syrup", "healthRating": "Poor", "alternatives": ["Honey"] }
                ]
            },
            "videoResults": { "videos": [{ "title": "Oats 101", "url": "https://video.example/oats" }] },
            "shoppingResults": {
                "shopping": [{
                    "name": "Rolled oats 1kg",
                    "url": "https://shop.example/oats",
                    "price": "$3.49",
                    "store": "Corner Grocer"
                }]
            }
        })),
    )
}

#[debug_handler]
async fn preferences(
    State(backend): State<Backend>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if bearer(&headers) != TOKEN {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Unauthorized" })),
        );
    }

    backend.recorded.lock().await.preferences.push(body);
    (StatusCode::OK, Json(json!({ "ok": true })))
}
