//! Note storage subsystem.
//!
//! # Data Flow
//! ```text
//! HTTP handler
//!     → model.rs (payload → validated NoteDraft)
//!     → store.rs (locked Vec<Note>, insertion ordered)
//!     → ids.rs (fresh URL-safe id on create)
//!     → error.rs (NotFound / InvalidInput)
//! ```
//!
//! # Design Decisions
//! - One `NoteStore` per process, shared through `Arc` in router state
//! - Every operation holds the store lock for its whole read-modify-write
//! - Lookups are linear scans with exact id equality

pub mod error;
pub mod ids;
pub mod model;
pub mod store;

pub use error::{NoteError, NoteResult};
pub use ids::{IdGenerator, ShortIdGenerator};
pub use model::{CreateNote, Note, NoteDraft, Payload, ReplaceNote};
pub use store::NoteStore;
