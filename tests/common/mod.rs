//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

use notes_api::config::NotesConfig;
use notes_api::{HttpServer, NoteStore, Shutdown};

/// A notes server running on an ephemeral port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub store: Arc<NoteStore>,
    pub shutdown: Shutdown,
}

#[allow(dead_code)]
impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn notes_url(&self) -> String {
        self.url("/api/v1/notes")
    }

    pub fn note_url(&self, id: &str) -> String {
        format!("{}/{}", self.notes_url(), id)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start a server with default settings on 127.0.0.1:0.
pub async fn start_server() -> TestServer {
    start_server_with(NotesConfig::default()).await
}

/// Start a server with `config` on 127.0.0.1:0.
pub async fn start_server_with(config: NotesConfig) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(config);
    let store = server.store();
    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    TestServer {
        addr,
        store,
        shutdown,
    }
}

/// HTTP client that never goes through a system proxy.
#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
