//! A listing backend that counts its requests.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub struct CountingBackend {
    addr: SocketAddr,
    hits: Arc<AtomicUsize>,
    handle: JoinHandle<()>,
}

impl CountingBackend {
    /// Serve `body` as the product listing until dropped.
    pub async fn start(body: &'static str) -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let app = Router::new()
            .route("/api/products", get(listing))
            .with_state((hits.clone(), body));

        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind backend");
        let addr = listener.local_addr().expect("local addr");
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("backend");
        });

        Self { addr, hits, handle }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

impl Drop for CountingBackend {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn listing(State((hits, body)): State<(Arc<AtomicUsize>, &'static str)>) -> impl IntoResponse {
    hits.fetch_add(1, Ordering::SeqCst);
    ([(header::CONTENT_TYPE, "application/json")], body)
}

pub const LISTING: &str = r#"[
  {
    "id": "c1",
    "name": "Amethyst Crystal Cluster",
    "description": "Purple amethyst cluster for calm and clarity.",
    "price": 45.99,
    "category": "crystals",
    "image_url": "https://images.example.com/amethyst.jpg",
    "spiritual_benefits": ["Stress relief"],
    "featured": true
  },
  {
    "id": "j1",
    "name": "Silver Moon Ring",
    "description": "Sterling band set with a moonstone.",
    "price": 39.5,
    "category": "spiritual_jewelry",
    "image_url": "https://images.example.com/ring.jpg",
    "spiritual_benefits": ["Intuition", "Balance"],
    "materials": ["Sterling Silver", "Moonstone"],
    "origin": "India"
  }
]"#;
