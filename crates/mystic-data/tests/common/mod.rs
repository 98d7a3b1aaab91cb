//! Mock product backend for exercising the HTTP source.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: Arc<String>,
    hits: Arc<AtomicUsize>,
}

/// A backend serving one canned answer on `/api/products`.
pub struct MockBackend {
    pub addr: SocketAddr,
    hits: Arc<AtomicUsize>,
    handle: JoinHandle<()>,
}

impl MockBackend {
    /// Serve `body` with `status` until dropped.
    pub async fn start(status: u16, body: impl Into<String>) -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let state = MockState {
            status: StatusCode::from_u16(status).expect("valid status"),
            body: Arc::new(body.into()),
            hits: hits.clone(),
        };

        let app = Router::new()
            .route("/api/products", get(products))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind mock backend");
        let addr = listener.local_addr().expect("local addr");
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock backend");
        });

        Self { addr, hits, handle }
    }

    /// Serve a JSON array of products with 200.
    pub async fn with_products(body: &str) -> Self {
        Self::start(200, body).await
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Requests received on the listing endpoint.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn products(State(state): State<MockState>) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);
    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body.as_str().to_owned(),
    )
        .into_response()
}

/// An address nothing listens on.
pub async fn closed_address() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    addr
}

pub const SAMPLE_PRODUCTS: &str = r#"[
  {
    "id": "5f0c",
    "name": "Amethyst Crystal Cluster",
    "description": "Beautiful purple amethyst cluster known for its calming and spiritual properties.",
    "price": 45.99,
    "category": "crystals",
    "image_url": "https://images.example.com/amethyst.jpg",
    "spiritual_benefits": ["Stress relief", "Enhanced intuition"],
    "materials": ["Natural Amethyst"],
    "origin": "Brazil",
    "featured": true,
    "in_stock": true,
    "created_at": "2025-08-04T07:12:27.000000"
  },
  {
    "id": "9a21",
    "name": "Spiritual Protection Necklace",
    "description": "Elegant spiritual jewelry featuring protective stones and sacred symbols.",
    "price": 67.99,
    "category": "spiritual_jewelry",
    "image_url": "https://images.example.com/necklace.jpg",
    "spiritual_benefits": ["Protection from negativity"],
    "materials": ["Black Tourmaline", "Sterling Silver"],
    "origin": "Artisan crafted",
    "featured": false
  }
]"#;
