//! jotter-core - Core library for Jotter
//!
//! This crate contains the models, backend clients, screen controllers and
//! UI state machines shared by the Jotter shells. Rendering lives in the
//! shells; everything a screen decides lives here.

pub mod app;
pub mod auth;
pub mod backend;
pub mod config;
pub mod error;
pub mod models;
pub mod navigation;
pub mod notes;
pub mod scale;
pub mod screens;
pub mod session;
pub mod sheet;
pub mod util;
pub mod validation;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{Error, Result};
pub use models::{Note, NoteId};
