//! Upload of the generated site.
//!
//! Stage 3 of the build, run only when a bucket is given. Every regular file
//! under the output directory becomes one object, keyed by its path relative
//! to the output root (`/`-separated, so `dist/img/a.png` → `img/a.png`).
//!
//! ## Worker Pool
//!
//! ```text
//!   walkdir producer ──► unbounded channel ──► worker 1 ─┐
//!   (blocking task)                       ├──► worker 2 ─┼──► ObjectSink
//!                                         └──► worker N ─┘
//! ```
//!
//! The producer closes the channel when the walk ends; each worker exits once
//! the channel is drained. Workers share the receiver behind an async mutex
//! held only while taking the next file.
//!
//! ## Failures
//!
//! A file that cannot be read or stored is logged, recorded in the
//! [`PublishReport`], and skipped. Uploads are not retried. A failure to walk
//! the output directory is returned as an error after the workers have
//! finished whatever was already queued.

pub mod headers;
pub mod sink;

pub use headers::{ObjectHeaders, headers_for};
pub use sink::{ObjectSink, SinkError, StoreSink};

use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinSet;
use walkdir::WalkDir;

/// Default number of concurrent upload workers.
pub const DEFAULT_WORKERS: usize = 5;

#[derive(Error, Debug)]
pub enum PublishError {
    #[error("cannot walk {path}: {source}")]
    Walk {
        path: PathBuf,
        source: walkdir::Error,
    },
    #[error("cannot connect to object store: {0}")]
    Store(#[from] object_store::Error),
    #[error("upload task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

#[derive(Error, Debug)]
enum UploadError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// One upload that did not make it.
#[derive(Debug, Clone, PartialEq)]
pub struct FailedUpload {
    pub key: String,
    pub error: String,
}

/// Outcome of a publish run, keys sorted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PublishReport {
    pub uploaded: Vec<String>,
    pub failed: Vec<FailedUpload>,
}

impl PublishReport {
    pub fn total(&self) -> usize {
        self.uploaded.len() + self.failed.len()
    }

    fn absorb(&mut self, other: PublishReport) {
        self.uploaded.extend(other.uploaded);
        self.failed.extend(other.failed);
    }

    fn sort(&mut self) {
        self.uploaded.sort();
        self.failed.sort_by(|a, b| a.key.cmp(&b.key));
    }
}

/// A file queued for upload.
#[derive(Debug)]
struct Upload {
    key: String,
    path: PathBuf,
}

type Queue = Arc<Mutex<mpsc::UnboundedReceiver<Upload>>>;

/// Upload every file under `output_dir` to `sink` with `workers` concurrent
/// uploads. A `workers` of 0 is treated as 1.
pub async fn publish(
    output_dir: &Path,
    sink: Arc<dyn ObjectSink>,
    workers: usize,
) -> Result<PublishReport, PublishError> {
    let (tx, rx) = mpsc::unbounded_channel();
    let queue: Queue = Arc::new(Mutex::new(rx));

    let mut pool = JoinSet::new();
    for _ in 0..workers.max(1) {
        pool.spawn(upload_worker(queue.clone(), sink.clone()));
    }

    let root = output_dir.to_path_buf();
    let producer = tokio::task::spawn_blocking(move || enqueue_files(&root, tx));

    let mut report = PublishReport::default();
    while let Some(joined) = pool.join_next().await {
        report.absorb(joined?);
    }
    producer.await??;

    report.sort();
    Ok(report)
}

/// Walk `root` and queue every regular file. Dropping `tx` on return closes
/// the channel.
fn enqueue_files(root: &Path, tx: mpsc::UnboundedSender<Upload>) -> Result<(), PublishError> {
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|source| PublishError::Walk {
            path: root.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(key) = object_key(root, entry.path()) else {
            continue;
        };
        let upload = Upload {
            key,
            path: entry.into_path(),
        };
        // Send only fails once every worker is gone; nothing left to do then.
        if tx.send(upload).is_err() {
            break;
        }
    }
    Ok(())
}

/// Object key for `path`: relative to `root`, components joined with `/`.
pub fn object_key(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if parts.is_empty() {
        return None;
    }
    Some(parts.join("/"))
}

async fn upload_worker(queue: Queue, sink: Arc<dyn ObjectSink>) -> PublishReport {
    let mut report = PublishReport::default();
    loop {
        let next = queue.lock().await.recv().await;
        let Some(upload) = next else {
            break;
        };
        match upload_file(sink.as_ref(), &upload).await {
            Ok(()) => {
                tracing::debug!("uploaded {}", upload.key);
                report.uploaded.push(upload.key);
            }
            Err(e) => {
                tracing::error!("upload of {} failed: {e}", upload.key);
                report.failed.push(FailedUpload {
                    key: upload.key,
                    error: e.to_string(),
                });
            }
        }
    }
    report
}

async fn upload_file(sink: &dyn ObjectSink, upload: &Upload) -> Result<(), UploadError> {
    let body = tokio::fs::read(&upload.path)
        .await
        .map_err(|source| UploadError::Read {
            path: upload.path.clone(),
            source,
        })?;
    sink.put(&upload.key, body, headers_for(&upload.path)).await?;
    Ok(())
}
