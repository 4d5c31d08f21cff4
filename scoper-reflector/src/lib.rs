//! scoper-reflector - Built-in symbol classification for PHP scoping
//!
//! Answers whether a class, function or constant name belongs to the PHP
//! runtime (and its bundled extensions) rather than to user or vendor code.
//! The scoper prefixes user symbols and must never touch built-ins.
//!
//! Tables are assembled from:
//! - a reference map generated from the PhpStorm stubs (one per edition),
//!   supplied at runtime through `SCOPER_STUBS_MAP` or `ReferenceMap`
//! - hand-maintained corrections for names the stubs are known to miss

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub mod corrections;
pub mod reference;
pub mod reflector;
pub mod symbol_table;

pub use corrections::{corrections, Correction};
pub use reference::{ReferenceMap, STUBS_MAP_ENV};
pub use reflector::Reflector;
pub use symbol_table::{CaseFolding, SymbolTable};

/// The three symbol namespaces PHP keeps apart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    /// Classes, interfaces, traits and enums
    Class,
    Function,
    Constant,
}

impl SymbolKind {
    pub const ALL: [SymbolKind; 3] = [
        SymbolKind::Class,
        SymbolKind::Function,
        SymbolKind::Constant,
    ];

    /// How names of this kind are compared.
    ///
    /// PHP resolves function names case-insensitively; class lookups are
    /// kept exact because the stubs map is keyed by declared spelling.
    pub fn folding(self) -> CaseFolding {
        match self {
            SymbolKind::Function => CaseFolding::AsciiLowercase,
            SymbolKind::Class | SymbolKind::Constant => CaseFolding::Exact,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SymbolKind::Class => "class",
            SymbolKind::Function => "function",
            SymbolKind::Constant => "constant",
        }
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SymbolKind {
    type Err = ReflectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "class" => Ok(SymbolKind::Class),
            "function" => Ok(SymbolKind::Function),
            "constant" => Ok(SymbolKind::Constant),
            other => Err(ReflectorError::UnknownKind(other.to_string())),
        }
    }
}

/// Failures while loading reference data.
///
/// Cloneable so the outcome of the process-wide initialization can be
/// handed to every `Reflector::new` caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReflectorError {
    #[error("Failed to read reference map {path}: {message}")]
    Io { path: String, message: String },

    #[error("Malformed reference map {origin}: {message}")]
    Malformed { origin: String, message: String },

    #[error("Reference map {origin} has no {kind} entries")]
    EmptySection { origin: String, kind: SymbolKind },

    #[error("Reference map {origin} contains an empty {kind} name")]
    EmptyName { origin: String, kind: SymbolKind },

    #[error("No reference map configured: set {0} to a generated phpstorm-stubs-map.json")]
    NotConfigured(&'static str),

    #[error("Unknown symbol kind: {0} (expected class, function or constant)")]
    UnknownKind(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trips_through_display() {
        for kind in SymbolKind::ALL {
            assert_eq!(kind.to_string().parse::<SymbolKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        assert_eq!(
            "trait".parse::<SymbolKind>(),
            Err(ReflectorError::UnknownKind("trait".to_string()))
        );
        // Kind names are lowercase only
        assert!("Class".parse::<SymbolKind>().is_err());
    }

    #[test]
    fn test_only_functions_fold_case() {
        assert_eq!(SymbolKind::Function.folding(), CaseFolding::AsciiLowercase);
        assert_eq!(SymbolKind::Class.folding(), CaseFolding::Exact);
        assert_eq!(SymbolKind::Constant.folding(), CaseFolding::Exact);
    }
}
