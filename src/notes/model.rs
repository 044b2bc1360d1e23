//! Note record and request payloads.
//!
//! Create and replace carry the same content under different keys on the
//! wire: `list` for POST, `notes` for PUT. [`Payload`] keeps that mapping in
//! one place.

use serde::{Deserialize, Serialize};

use crate::notes::error::{NoteError, NoteResult};

/// A stored note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Generated at creation, never changed afterwards.
    pub id: String,
    pub title: String,
    /// The note's items, in order.
    pub list: Vec<String>,
}

/// Body of `POST /api/v1/notes`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateNote {
    pub title: Option<String>,
    pub list: Option<Vec<String>>,
}

/// Body of `PUT /api/v1/notes/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReplaceNote {
    pub title: Option<String>,
    pub notes: Option<Vec<String>>,
}

/// Which request shape a draft came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payload {
    Create,
    Replace,
}

impl Payload {
    /// Wire name of the item list field.
    pub fn list_field(self) -> &'static str {
        match self {
            Payload::Create => "list",
            Payload::Replace => "notes",
        }
    }

    /// Message returned to clients when validation fails.
    pub fn expected_format(self) -> &'static str {
        match self {
            Payload::Create => "Expected format: { title: <String>, list: <StringArray> }",
            Payload::Replace => "Expected format: { title: <String>, notes: <Stringarray> }",
        }
    }
}

/// Validated title and items, ready to be written to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub list: Vec<String>,
}

impl NoteDraft {
    /// Validate raw fields. Empty strings and empty lists count as missing.
    pub fn from_parts(
        payload: Payload,
        title: Option<String>,
        list: Option<Vec<String>>,
    ) -> NoteResult<Self> {
        let title = title.filter(|t| !t.is_empty());
        let list = list.filter(|l| !l.is_empty());

        match (title, list) {
            (Some(title), Some(list)) => Ok(Self { title, list }),
            (title, list) => {
                let mut missing = Vec::new();
                if title.is_none() {
                    missing.push("title");
                }
                if list.is_none() {
                    missing.push(payload.list_field());
                }
                Err(NoteError::InvalidInput { payload, missing })
            }
        }
    }
}

impl TryFrom<CreateNote> for NoteDraft {
    type Error = NoteError;

    fn try_from(body: CreateNote) -> NoteResult<Self> {
        Self::from_parts(Payload::Create, body.title, body.list)
    }
}

impl TryFrom<ReplaceNote> for NoteDraft {
    type Error = NoteError;

    fn try_from(body: ReplaceNote) -> NoteResult<Self> {
        Self::from_parts(Payload::Replace, body.title, body.notes)
    }
}
