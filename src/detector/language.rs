//! Source language detection by file extension.
//!
//! The extension table is the single place that decides which language a file
//! belongs to. Rules, suggestions and scoring ask it for per-language idiom
//! markers instead of checking suffixes themselves.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Marker for structured logging usage; applies to every language.
pub const STRUCTURED_LOGGING_MARKER: &str = "use tracing::";

/// Languages recognized as code files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Rust,
    Python,
    JavaScript,
    TypeScript,
    Java,
    Cpp,
    C,
    Go,
    Php,
}

/// Extension -> language table
const EXTENSIONS: &[(&str, Language)] = &[
    ("rs", Language::Rust),
    ("py", Language::Python),
    ("js", Language::JavaScript),
    ("ts", Language::TypeScript),
    ("java", Language::Java),
    ("cpp", Language::Cpp),
    ("c", Language::C),
    ("go", Language::Go),
    ("php", Language::Php),
];

impl Language {
    /// Look up a language by bare extension (no dot), ignoring ASCII case
    pub fn from_extension(ext: &str) -> Option<Self> {
        EXTENSIONS
            .iter()
            .find(|(e, _)| e.eq_ignore_ascii_case(ext))
            .map(|(_, lang)| *lang)
    }

    /// Detect the language of a file from its path
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Console print idiom that structured logging should replace
    pub fn console_print_marker(self) -> Option<&'static str> {
        match self {
            Language::Rust => Some("println!"),
            _ => None,
        }
    }

    /// Fallible-value unwrap idiom that panics on failure
    pub fn unwrap_marker(self) -> Option<&'static str> {
        match self {
            Language::Rust => Some(".unwrap()"),
            _ => None,
        }
    }

    /// Keyword that opens a function definition lacking mandatory annotations
    pub fn function_definition_marker(self) -> Option<&'static str> {
        match self {
            Language::Python => Some("def "),
            _ => None,
        }
    }

    /// Fallible result type marker
    pub fn result_type_marker(self) -> Option<&'static str> {
        match self {
            Language::Rust => Some("Result<"),
            _ => None,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::Rust => write!(f, "Rust"),
            Language::Python => write!(f, "Python"),
            Language::JavaScript => write!(f, "JavaScript"),
            Language::TypeScript => write!(f, "TypeScript"),
            Language::Java => write!(f, "Java"),
            Language::Cpp => write!(f, "C++"),
            Language::C => write!(f, "C"),
            Language::Go => write!(f, "Go"),
            Language::Php => write!(f, "PHP"),
        }
    }
}

/// True when the path has one of the recognized code-file extensions
pub fn is_code_file(path: &Path) -> bool {
    Language::from_path(path).is_some()
}
