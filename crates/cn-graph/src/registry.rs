//! Vertex registry: stable, dense indices for named characters.
//!
//! Names are normalized by trimming surrounding whitespace. Case is
//! significant. Indices are handed out in first-seen order and never
//! reassigned, so `VertexId::slot()` doubles as a row/column in the
//! adjacency matrix.

use std::collections::HashMap;

use cn_core::{CnError, CnResult, VertexId};

/// Trim a raw name and reject it if nothing is left.
pub fn normalize(name: &str) -> CnResult<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CnError::blank_name());
    }
    Ok(trimmed)
}

/// Bidirectional name <-> index mapping.
#[derive(Debug, Clone, Default)]
pub struct VertexRegistry {
    /// Index -> name.
    names: Vec<String>,
    /// Name -> id.
    index: HashMap<String, VertexId>,
}

impl VertexRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id for `name`, registering it if unseen.
    pub fn resolve(&mut self, name: &str) -> CnResult<VertexId> {
        let name = normalize(name)?;
        if let Some(&id) = self.index.get(name) {
            return Ok(id);
        }

        let id = u32::try_from(self.names.len())
            .ok()
            .and_then(VertexId::from_index)
            .ok_or(CnError::InvalidArgument {
                what: "vertex id space exhausted",
            })?;
        self.names.push(name.to_owned());
        self.index.insert(name.to_owned(), id);
        Ok(id)
    }

    /// Look up an existing name without registering it.
    ///
    /// Blank names are never registered, so they simply miss.
    pub fn lookup(&self, name: &str) -> Option<VertexId> {
        self.index.get(name.trim()).copied()
    }

    /// Name registered under `id`.
    pub fn name(&self, id: VertexId) -> Option<&str> {
        self.names.get(id.slot()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Registered names in index order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_seen_order() {
        let mut reg = VertexRegistry::new();
        let jon = reg.resolve("Jon").unwrap();
        let arya = reg.resolve("Arya").unwrap();
        assert_eq!(jon.index(), 0);
        assert_eq!(arya.index(), 1);
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn resolve_is_idempotent() {
        let mut reg = VertexRegistry::new();
        let a = reg.resolve("Tyrion").unwrap();
        let b = reg.resolve("Tyrion").unwrap();
        assert_eq!(a, b);
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn whitespace_is_trimmed() {
        let mut reg = VertexRegistry::new();
        let a = reg.resolve("  Sansa ").unwrap();
        let b = reg.resolve("Sansa").unwrap();
        assert_eq!(a, b);
        assert_eq!(reg.name(a), Some("Sansa"));
        assert_eq!(reg.lookup("\tSansa"), Some(a));
    }

    #[test]
    fn case_is_significant() {
        let mut reg = VertexRegistry::new();
        let a = reg.resolve("Bran").unwrap();
        let b = reg.resolve("bran").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn blank_names_are_rejected() {
        let mut reg = VertexRegistry::new();
        assert!(matches!(
            reg.resolve("   "),
            Err(CnError::InvalidArgument { .. })
        ));
        assert!(reg.resolve("").is_err());
        assert!(reg.is_empty());
        assert_eq!(reg.lookup(""), None);
    }

    #[test]
    fn lookup_does_not_register() {
        let reg = VertexRegistry::new();
        assert_eq!(reg.lookup("Hodor"), None);
        assert!(reg.is_empty());
    }

    #[test]
    fn names_in_index_order() {
        let mut reg = VertexRegistry::new();
        for n in ["Ned", "Cat", "Robb", "Ned"] {
            reg.resolve(n).unwrap();
        }
        let names: Vec<&str> = reg.names().collect();
        assert_eq!(names, ["Ned", "Cat", "Robb"]);
    }
}
