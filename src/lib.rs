pub mod analyzer;
pub mod assembler;
pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod github;
pub mod ui;

pub use error::{ReleaseNotesError, Result};
