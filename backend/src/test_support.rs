use std::path::Path;
use std::sync::{Arc, Mutex};

use axum::{
    body::Body,
    extract::Path as UrlPath,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use futures::future::BoxFuture;
use stone_eng_frontend::models::SiteOptions;
use tokio::net::TcpListener;

use crate::content::client::ContentClient;
use crate::mail::mailer::{MailError, Mailer, OutgoingMail};
use crate::AppState;

pub const TEST_API_KEY: &str = "test-key";
pub const OWNER_ADDRESS: &str = "owner@stone-eng.example";

/// Three entries; the last one has neither title nor link.
pub const GALLERY_JSON: &str = r#"{
    "contents": [
        {
            "id": "chair",
            "title": "Chair",
            "link": "chair",
            "image": { "url": "https://images.example/chair.jpg", "width": 1200, "height": 1200 },
            "createdAt": "2022-05-10T03:00:00.000Z"
        },
        {
            "id": "lamp",
            "title": "Lamp",
            "link": "lamp",
            "image": { "url": "https://images.example/lamp.jpg", "width": 800, "height": 1200 },
            "createdAt": "2022-03-01T03:00:00.000Z"
        },
        {
            "id": "shelf",
            "image": { "url": "https://images.example/shelf.jpg", "width": 1600, "height": 900 },
            "createdAt": "2022-06-21T03:00:00.000Z"
        }
    ],
    "totalCount": 3,
    "offset": 0,
    "limit": 10
}"#;

/// Serves `body` with `status` for the gallery endpoint and returns the API base url.
pub async fn stub_cms(status: StatusCode, body: &'static str) -> String {
    let router = Router::new().route(
        "/api/v1/{endpoint}",
        get(move |UrlPath(endpoint): UrlPath<String>, headers: HeaderMap| async move {
            let key = headers.get("x-microcms-api-key").and_then(|v| v.to_str().ok());
            if key != Some(TEST_API_KEY) {
                return (StatusCode::UNAUTHORIZED, "{}").into_response();
            }
            if endpoint != "gallery" {
                return StatusCode::NOT_FOUND.into_response();
            }
            (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router.into_make_service()).await.unwrap();
    });
    format!("http://{}/api/v1", addr)
}

pub fn content_client(base_url: &str) -> &'static ContentClient {
    Box::leak(Box::new(ContentClient::with_base_url(base_url, TEST_API_KEY)))
}

#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<OutgoingMail>>,
    fail: bool,
}

impl RecordingMailer {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<OutgoingMail> {
        self.sent.lock().unwrap().clone()
    }
}

impl Mailer for RecordingMailer {
    fn send(&self, mail: OutgoingMail) -> BoxFuture<'_, Result<(), MailError>> {
        Box::pin(async move {
            if self.fail {
                return Err(MailError::Provider("422 invalid `to` field".to_string()));
            }
            self.sent.lock().unwrap().push(mail);
            Ok(())
        })
    }
}

pub fn state(content: &'static ContentClient, mailer: Arc<RecordingMailer>) -> Arc<AppState> {
    Arc::new(AppState {
        content,
        mailer,
        mail_owner: OWNER_ADDRESS.to_string(),
        site: SiteOptions::default(),
    })
}

pub fn app(state: Arc<AppState>) -> Router {
    crate::router(state, Path::new("missing/public"), Path::new("missing/pkg"))
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
