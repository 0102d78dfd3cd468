//! Data models for Jotter

mod note;
mod user;

pub use note::{NewNote, Note, NoteChanges, NoteId};
pub use user::{SessionUser, UserPatch};
