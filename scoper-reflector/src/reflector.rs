// Reflector - answers "is this symbol a PHP built-in?"
//
// The process-wide tables are built once from the map named by
// SCOPER_STUBS_MAP and shared by every Reflector::new() handle.
// Reflector::from_reference() builds a separate set for callers that inject
// their own edition.

use std::sync::{Arc, OnceLock};

use crate::corrections::corrections;
use crate::reference::ReferenceMap;
use crate::symbol_table::SymbolTable;
use crate::{ReflectorError, SymbolKind};

static SHARED_TABLES: OnceLock<Result<Arc<SymbolTables>, ReflectorError>> = OnceLock::new();

#[derive(Debug)]
struct SymbolTables {
    classes: SymbolTable,
    functions: SymbolTable,
    constants: SymbolTable,
}

impl SymbolTables {
    fn build(reference: &ReferenceMap) -> Self {
        let table = |kind: SymbolKind| {
            let table =
                SymbolTable::build(kind.folding(), reference.names(kind), corrections(kind));
            log::debug!(
                "Built {} table from {}: {} names ({} reference, {} corrections)",
                kind,
                reference.origin(),
                table.len(),
                reference.len(kind),
                corrections(kind).len()
            );
            table
        };

        Self {
            classes: table(SymbolKind::Class),
            functions: table(SymbolKind::Function),
            constants: table(SymbolKind::Constant),
        }
    }

    fn get(&self, kind: SymbolKind) -> &SymbolTable {
        match kind {
            SymbolKind::Class => &self.classes,
            SymbolKind::Function => &self.functions,
            SymbolKind::Constant => &self.constants,
        }
    }
}

/// Classifies class, function and constant names as built-in or not.
///
/// Cloning is cheap; clones share the same frozen tables.
#[derive(Debug, Clone)]
pub struct Reflector {
    tables: Arc<SymbolTables>,
}

impl Reflector {
    /// Handle onto the process-wide tables built from `SCOPER_STUBS_MAP`.
    ///
    /// The first call loads the map and builds the tables; concurrent first
    /// callers block until the build finishes. A missing, unreadable or
    /// malformed map fails every call with the same error.
    pub fn new() -> Result<Self, ReflectorError> {
        let tables = SHARED_TABLES.get_or_init(|| {
            let reference = ReferenceMap::from_env()?;
            Ok(Arc::new(SymbolTables::build(&reference)))
        });

        match tables {
            Ok(tables) => Ok(Self {
                tables: Arc::clone(tables),
            }),
            Err(e) => Err(e.clone()),
        }
    }

    /// Build private tables from an explicitly supplied edition
    pub fn from_reference(reference: &ReferenceMap) -> Self {
        log::info!("Using reference map {}", reference.origin());

        Self {
            tables: Arc::new(SymbolTables::build(reference)),
        }
    }

    /// Exact, case-sensitive match on the (possibly namespaced) class name.
    ///
    /// PHP itself resolves class names case-insensitively. The stubs map is
    /// keyed by declared spelling, so `exception` is reported as user code.
    pub fn is_class_internal(&self, name: &str) -> bool {
        self.tables.classes.contains(name)
    }

    /// Case-insensitive match, as PHP resolves functions
    pub fn is_function_internal(&self, name: &str) -> bool {
        self.tables.functions.contains(name)
    }

    /// Exact, case-sensitive match
    pub fn is_constant_internal(&self, name: &str) -> bool {
        self.tables.constants.contains(name)
    }

    pub fn is_internal(&self, kind: SymbolKind, name: &str) -> bool {
        match kind {
            SymbolKind::Class => self.is_class_internal(name),
            SymbolKind::Function => self.is_function_internal(name),
            SymbolKind::Constant => self.is_constant_internal(name),
        }
    }

    /// Number of distinct names known for a kind
    pub fn len(&self, kind: SymbolKind) -> usize {
        self.tables.get(kind).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::STUBS_MAP_ENV;
    use std::sync::Once;

    const SAMPLE_PATH: &str = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/phpstorm-stubs-sample.json"
    );

    fn shared() -> Reflector {
        static CONFIGURE: Once = Once::new();
        CONFIGURE.call_once(|| std::env::set_var(STUBS_MAP_ENV, SAMPLE_PATH));
        Reflector::new().unwrap()
    }

    fn sample() -> ReferenceMap {
        ReferenceMap::from_file(SAMPLE_PATH).unwrap()
    }

    #[test]
    fn test_handles_share_tables() {
        let first = shared();
        let second = shared();

        assert!(Arc::ptr_eq(&first.tables, &second.tables));
    }

    #[test]
    fn test_injected_tables_are_private() {
        let injected = Reflector::from_reference(&sample());
        let shared = shared();

        assert!(!Arc::ptr_eq(&injected.tables, &shared.tables));
        for kind in SymbolKind::ALL {
            assert_eq!(injected.len(kind), shared.len(kind));
        }
    }

    #[test]
    fn test_table_sizes_cover_both_sources() {
        let reference = sample();
        let reflector = Reflector::from_reference(&reference);

        // The sample map and the corrections are disjoint
        for kind in SymbolKind::ALL {
            assert_eq!(
                reflector.len(kind),
                reference.len(kind) + corrections(kind).len()
            );
        }
    }
}
