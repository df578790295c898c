pub mod file;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::job::{Job, NewJob};

/// Repository boundary for the job collection. Handlers only see this trait;
/// the backing document format stays an implementation detail of the store.
#[async_trait]
pub trait JobStore: Send + Sync {
    /// Full collection in insertion order. Unreadable or corrupt storage
    /// degrades to an empty collection rather than an error.
    async fn list(&self) -> Vec<Job>;

    /// Assigns an id and creation timestamp, appends the job, persists the
    /// collection, and returns the stored record.
    async fn create(&self, new: NewJob) -> Result<Job>;

    /// Removes the job with the given id, if any. Returns whether a record
    /// was removed; deleting an unknown id is a no-op, not an error.
    async fn delete(&self, id: &str) -> Result<bool>;
}
