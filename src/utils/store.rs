//! Record storage used by the resource repositories.
//!
//! Repositories only talk to the [`Store`] trait, so the in-memory backend
//! can be swapped for a persistent one without touching the route services.

use async_trait::async_trait;
use std::fmt;
use std::sync::RwLock;

/// A record that can be kept in a [`Store`], addressed by its string id.
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    LockPoisoned,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LockPoisoned => write!(f, "store lock poisoned"),
        }
    }
}

impl std::error::Error for Error {}

#[async_trait]
pub trait Store<T: Record>: Send + Sync {
    /// All records, in insertion order.
    async fn list(&self) -> Result<Vec<T>, Error>;

    async fn get(&self, id: &str) -> Result<Option<T>, Error>;

    /// Replaces the record with the same id in place, or appends it.
    async fn put(&self, record: T) -> Result<T, Error>;

    /// Removes the record and returns it, if it existed.
    async fn delete(&self, id: &str) -> Result<Option<T>, Error>;
}

/// Ordered in-memory store guarded by a single reader/writer lock.
pub struct InMemoryStore<T> {
    records: RwLock<Vec<T>>,
}

impl<T: Record> InMemoryStore<T> {
    pub fn new() -> Self {
        Self::with_records(vec![])
    }

    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

impl<T: Record> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> Store<T> for InMemoryStore<T> {
    async fn list(&self) -> Result<Vec<T>, Error> {
        let records = self.records.read().map_err(|_| Error::LockPoisoned)?;

        Ok(records.clone())
    }

    async fn get(&self, id: &str) -> Result<Option<T>, Error> {
        let records = self.records.read().map_err(|_| Error::LockPoisoned)?;

        Ok(records.iter().find(|record| record.id() == id).cloned())
    }

    async fn put(&self, record: T) -> Result<T, Error> {
        let mut records = self.records.write().map_err(|_| Error::LockPoisoned)?;

        match records.iter_mut().find(|existing| existing.id() == record.id()) {
            Some(existing) => *existing = record.clone(),
            None => records.push(record.clone()),
        }

        Ok(record)
    }

    async fn delete(&self, id: &str) -> Result<Option<T>, Error> {
        let mut records = self.records.write().map_err(|_| Error::LockPoisoned)?;

        Ok(records
            .iter()
            .position(|record| record.id() == id)
            .map(|index| records.remove(index)))
    }
}
