//! Insertion-ordered record collection with one unique key.

use parking_lot::RwLock;

use franchise_core::error::DomainError;
use franchise_core::repositories::{BranchDocument, FranchiseDocument, ProductDocument};
use franchise_shared::{new_id, EntityId};

/// A stored record as the collection sees it.
pub(crate) trait Record: Clone + Send + Sync {
    fn id(&self) -> Option<&str>;

    fn with_id(self, id: EntityId) -> Self;

    /// Scope and name covered by the collection's unique index.
    fn unique_key(&self) -> (&str, &str);
}

impl Record for FranchiseDocument {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn with_id(self, id: EntityId) -> Self {
        Self { id: Some(id), ..self }
    }

    fn unique_key(&self) -> (&str, &str) {
        ("", &self.name)
    }
}

impl Record for BranchDocument {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn with_id(self, id: EntityId) -> Self {
        Self { id: Some(id), ..self }
    }

    fn unique_key(&self) -> (&str, &str) {
        (&self.franchise_id, &self.name)
    }
}

impl Record for ProductDocument {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn with_id(self, id: EntityId) -> Self {
        Self { id: Some(id), ..self }
    }

    fn unique_key(&self) -> (&str, &str) {
        (&self.branch_id, &self.name)
    }
}

pub(crate) struct Collection<D> {
    records: RwLock<Vec<D>>,
    /// Conflict message when the unique key is already held by another record.
    taken: &'static str,
}

impl<D: Record> Collection<D> {
    pub fn new(taken: &'static str) -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            taken,
        }
    }

    pub fn find(&self, predicate: impl Fn(&D) -> bool) -> Option<D> {
        self.records.read().iter().find(|&r| predicate(r)).cloned()
    }

    pub fn find_by_id(&self, id: &str) -> Option<D> {
        self.find(|r| r.id() == Some(id))
    }

    pub fn any(&self, predicate: impl Fn(&D) -> bool) -> bool {
        self.records.read().iter().any(predicate)
    }

    /// Matching records in insertion order.
    pub fn filter(&self, predicate: impl Fn(&D) -> bool) -> Vec<D> {
        self.records.read().iter().filter(|&r| predicate(r)).cloned().collect()
    }

    /// Inserts a record without id under a fresh one, or replaces the record with the same id.
    pub fn upsert(&self, record: &D) -> Result<D, DomainError> {
        let id = record.id().map(str::to_string).unwrap_or_else(new_id);
        let saved = record.clone().with_id(id.clone());

        let mut records = self.records.write();

        let clash = records
            .iter()
            .any(|r| r.id() != Some(id.as_str()) && r.unique_key() == saved.unique_key());
        if clash {
            return Err(DomainError::conflict(self.taken));
        }

        match records.iter().position(|r| r.id() == Some(id.as_str())) {
            Some(index) => records[index] = saved.clone(),
            None => records.push(saved.clone()),
        }

        Ok(saved)
    }

    pub fn remove(&self, id: &str) {
        self.records.write().retain(|r| r.id() != Some(id));
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn products() -> Collection<ProductDocument> {
        Collection::new("Product name already exists for this branch")
    }

    #[test]
    fn test_upsert_assigns_id_and_keeps_order() {
        let collection = products();
        let now = Utc::now();

        let a = collection.upsert(&ProductDocument::new("br-1", "A", 1, now)).unwrap();
        let b = collection.upsert(&ProductDocument::new("br-1", "B", 2, now)).unwrap();

        assert!(a.id.is_some());
        assert_ne!(a.id, b.id);

        let names: Vec<String> = collection.filter(|p| p.branch_id == "br-1").into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let collection = products();
        let now = Utc::now();

        let a = collection.upsert(&ProductDocument::new("br-1", "A", 1, now)).unwrap();
        collection.upsert(&ProductDocument::new("br-1", "B", 2, now)).unwrap();
        collection.upsert(&a.with_stock(9, Utc::now())).unwrap();

        assert_eq!(collection.len(), 2);
        let first = collection.filter(|_| true).remove(0);
        assert_eq!(first.name, "A");
        assert_eq!(first.stock, 9);
    }

    #[test]
    fn test_unique_key_is_scoped() {
        let collection = products();
        let now = Utc::now();

        collection.upsert(&ProductDocument::new("br-1", "A", 1, now)).unwrap();
        assert!(collection.upsert(&ProductDocument::new("br-2", "A", 1, now)).is_ok());

        let err = collection.upsert(&ProductDocument::new("br-1", "A", 5, now)).unwrap_err();
        assert_eq!(err, DomainError::Conflict("Product name already exists for this branch".to_string()));
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn test_remove() {
        let collection = products();
        let a = collection.upsert(&ProductDocument::new("br-1", "A", 1, Utc::now())).unwrap();
        let id = a.id.unwrap();

        collection.remove(&id);
        assert!(collection.find_by_id(&id).is_none());
        collection.remove("missing");
        assert_eq!(collection.len(), 0);
    }
}
