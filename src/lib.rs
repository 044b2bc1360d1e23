//! In-memory notes service library.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod notes;
pub mod observability;

pub use config::NotesConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use notes::{Note, NoteStore};
