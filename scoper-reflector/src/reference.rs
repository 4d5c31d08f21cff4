// Reference map loader - phpstorm-stubs-map.json
//
// The map is generated from the PhpStorm stubs for one PHP edition. Only the
// keys matter here; values are whatever the generator recorded (usually the
// stub file declaring the symbol).

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::{ReflectorError, SymbolKind};

/// Path of the generated map used by the process-wide tables
pub const STUBS_MAP_ENV: &str = "SCOPER_STUBS_MAP";

/// On-disk layout. All three sections are required.
#[derive(Deserialize)]
struct RawReferenceMap {
    classes: HashMap<String, Value>,
    functions: HashMap<String, Value>,
    constants: HashMap<String, Value>,
}

/// Validated built-in names for one runtime edition
#[derive(Debug, Clone)]
pub struct ReferenceMap {
    origin: String,
    classes: HashMap<String, Value>,
    functions: HashMap<String, Value>,
    constants: HashMap<String, Value>,
}

impl ReferenceMap {
    /// Load the map named by `SCOPER_STUBS_MAP`.
    ///
    /// An unset or empty variable is an error: without the generated map
    /// every built-in would be classified as user code.
    pub fn from_env() -> Result<Self, ReflectorError> {
        match std::env::var_os(STUBS_MAP_ENV) {
            Some(path) if !path.is_empty() => Self::from_file(Path::new(&path)),
            _ => Err(ReflectorError::NotConfigured(STUBS_MAP_ENV)),
        }
    }

    /// Load a regenerated map from disk
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ReflectorError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ReflectorError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        Self::parse(&content, &path.display().to_string())
    }

    fn parse(content: &str, origin: &str) -> Result<Self, ReflectorError> {
        let raw: RawReferenceMap =
            serde_json::from_str(content).map_err(|e| ReflectorError::Malformed {
                origin: origin.to_string(),
                message: e.to_string(),
            })?;

        let map = Self {
            origin: origin.to_string(),
            classes: raw.classes,
            functions: raw.functions,
            constants: raw.constants,
        };

        map.validate()?;
        Ok(map)
    }

    /// An empty section would make every built-in of that kind look like
    /// user code, so it is rejected rather than tolerated.
    fn validate(&self) -> Result<(), ReflectorError> {
        for kind in SymbolKind::ALL {
            let section = self.section(kind);

            if section.is_empty() {
                return Err(ReflectorError::EmptySection {
                    origin: self.origin.clone(),
                    kind,
                });
            }

            if section.contains_key("") {
                return Err(ReflectorError::EmptyName {
                    origin: self.origin.clone(),
                    kind,
                });
            }
        }

        Ok(())
    }

    fn section(&self, kind: SymbolKind) -> &HashMap<String, Value> {
        match kind {
            SymbolKind::Class => &self.classes,
            SymbolKind::Function => &self.functions,
            SymbolKind::Constant => &self.constants,
        }
    }

    /// Keys of one section, in no particular order
    pub fn names(&self, kind: SymbolKind) -> impl Iterator<Item = &str> {
        self.section(kind).keys().map(String::as_str)
    }

    /// Metadata recorded for a name, if present
    pub fn metadata(&self, kind: SymbolKind, name: &str) -> Option<&Value> {
        self.section(kind).get(name)
    }

    pub fn len(&self, kind: SymbolKind) -> usize {
        self.section(kind).len()
    }

    /// Where the map was loaded from, for diagnostics
    pub fn origin(&self) -> &str {
        &self.origin
    }
}

impl FromStr for ReferenceMap {
    type Err = ReflectorError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        Self::parse(content, "<string>")
    }
}
