use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use tempfile::NamedTempFile;
use tokio::sync::Mutex;
use tracing::warn;
use uuid::Uuid;

use crate::models::job::{Job, NewJob};
use crate::store::JobStore;

/// File-backed job store: one pretty-printed JSON array on disk.
///
/// Mutations hold an async mutex across the whole read-modify-write, so
/// concurrent creates and deletes cannot drop each other's changes. The
/// document is replaced by writing a temp file in the same directory and
/// renaming it over the old one; readers always see a complete document.
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        }
    }

    /// Reads the whole collection. Missing documents are initialized empty;
    /// unreadable or unparseable ones degrade to an empty collection with a
    /// warning, never an error.
    async fn load(&self) -> Vec<Job> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                if let Err(e) = self.save(&[]).await {
                    warn!(
                        "could not initialize jobs document at {}: {e:#}",
                        self.path.display()
                    );
                }
                return Vec::new();
            }
            Err(e) => {
                warn!(
                    "jobs document at {} is unreadable, serving empty collection: {e}",
                    self.path.display()
                );
                return Vec::new();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(jobs) => jobs,
            Err(e) => {
                warn!(
                    "jobs document at {} is not valid JSON, serving empty collection: {e}",
                    self.path.display()
                );
                Vec::new()
            }
        }
    }

    /// Replaces the document atomically: temp file in the same directory,
    /// flushed, then renamed over the target.
    async fn save(&self, jobs: &[Job]) -> Result<()> {
        let dir = self.parent_dir().to_path_buf();
        tokio::fs::create_dir_all(&dir)
            .await
            .with_context(|| format!("creating data directory {}", dir.display()))?;

        let bytes = serde_json::to_vec_pretty(jobs).context("serializing jobs collection")?;
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || -> Result<()> {
            let mut tmp = NamedTempFile::new_in(&dir)
                .with_context(|| format!("creating temp file in {}", dir.display()))?;
            tmp.write_all(&bytes)?;
            tmp.as_file().sync_all()?;
            tmp.persist(&path)
                .with_context(|| format!("replacing jobs document {}", path.display()))?;
            Ok(())
        })
        .await??;

        Ok(())
    }
}

#[async_trait]
impl JobStore for FileStore {
    async fn list(&self) -> Vec<Job> {
        self.load().await
    }

    async fn create(&self, new: NewJob) -> Result<Job> {
        let _guard = self.write_lock.lock().await;

        let mut jobs = self.load().await;
        let job = Job {
            id: Uuid::new_v4().to_string(),
            title: new.title,
            location: new.location,
            job_type: new.job_type,
            description: new.description,
            apply_link: new.apply_link,
            created_at: Utc::now(),
        };
        jobs.push(job.clone());
        self.save(&jobs).await?;

        Ok(job)
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let _guard = self.write_lock.lock().await;

        let mut jobs = self.load().await;
        let before = jobs.len();
        jobs.retain(|job| job.id != id);
        let removed = jobs.len() != before;
        self.save(&jobs).await?;

        Ok(removed)
    }
}
