//! studynest-core - Core library for StudyNest
//!
//! This crate contains the models, note filtering, and data-source contracts
//! used by the StudyNest dashboard. Nothing in here touches the UI toolkit.

pub mod config;
pub mod error;
pub mod filter;
pub mod format;
pub mod interaction;
pub mod mock;
pub mod models;
pub mod source;
pub mod stats;
pub mod util;

pub use error::{Error, Result};
pub use models::{ColorTheme, Note, NoteId, Section, User, ViewMode, ViewState};
