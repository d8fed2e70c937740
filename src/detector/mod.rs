//! Detector module for source languages

pub mod language;

pub use language::{is_code_file, Language, STRUCTURED_LOGGING_MARKER};
