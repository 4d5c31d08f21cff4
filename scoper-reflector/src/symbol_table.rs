// Symbol table for O(1) built-in lookups
// One table per symbol kind, frozen once built

use std::borrow::Cow;
use std::collections::HashSet;

use crate::corrections::Correction;

/// How a table compares names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseFolding {
    /// Byte-for-byte comparison
    Exact,
    /// ASCII letters are lowered on both sides, matching PHP's own
    /// function-name resolution
    AsciiLowercase,
}

impl CaseFolding {
    fn apply<'a>(self, name: &'a str) -> Cow<'a, str> {
        match self {
            CaseFolding::AsciiLowercase if name.bytes().any(|b| b.is_ascii_uppercase()) => {
                Cow::Owned(name.to_ascii_lowercase())
            }
            _ => Cow::Borrowed(name),
        }
    }
}

/// Immutable set of built-in names for one symbol kind.
///
/// Namespaced names such as `Crypto\Cipher` are opaque keys: no splitting
/// on `\` and no leading-separator stripping.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    names: HashSet<String>,
    folding: CaseFolding,
}

impl SymbolTable {
    /// Union of reference-map names and corrections.
    ///
    /// Duplicates between the two sources collapse; insertion order is not
    /// observable.
    pub fn build<'a, I>(folding: CaseFolding, reference: I, corrections: &[Correction]) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let names = reference
            .into_iter()
            .chain(corrections.iter().map(|c| c.name))
            .map(|name| folding.apply(name).into_owned())
            .collect();

        Self { names, folding }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&*self.folding.apply(name))
    }

    /// Distinct names after folding
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn folding(&self) -> CaseFolding {
        self.folding
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXTRA: &[Correction] = &[Correction {
        name: "uv_run",
        issue: Some("https://github.com/JetBrains/phpstorm-stubs/pull/600"),
    }];

    #[test]
    fn test_exact_table_is_case_sensitive() {
        let table = SymbolTable::build(CaseFolding::Exact, ["STDOUT", "Crypto\\Cipher"], &[]);

        assert!(table.contains("STDOUT"));
        assert!(!table.contains("stdout"));
        assert!(table.contains("Crypto\\Cipher"));
        assert!(!table.contains("crypto\\cipher"));
    }

    #[test]
    fn test_folded_table_ignores_case_on_both_sides() {
        // Keys are not guaranteed to be pre-lowered in the reference data
        let table = SymbolTable::build(CaseFolding::AsciiLowercase, ["StrLen"], EXTRA);

        assert!(table.contains("strlen"));
        assert!(table.contains("STRLEN"));
        assert!(table.contains("StrLen"));
        assert!(table.contains("uv_run"));
        assert!(table.contains("UV_Run"));
        assert!(!table.contains("strlen2"));
    }

    #[test]
    fn test_folding_leaves_non_ascii_alone() {
        let table = SymbolTable::build(CaseFolding::AsciiLowercase, ["émoji_len"], &[]);
        assert!(!table.contains("ÉMOJI_LEN"));
        assert!(table.contains("émoji_LEN"));
    }

    #[test]
    fn test_duplicates_collapse() {
        let table = SymbolTable::build(
            CaseFolding::AsciiLowercase,
            ["uv_run", "UV_RUN", "strlen"],
            EXTRA,
        );
        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_namespaced_names_are_opaque() {
        let table = SymbolTable::build(CaseFolding::Exact, ["pcov\\all"], &[]);

        assert!(table.contains("pcov\\all"));
        assert!(!table.contains("\\pcov\\all"));
        assert!(!table.contains("all"));
    }
}
