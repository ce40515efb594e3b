use anyhow::Result;
use directories::ProjectDirs;
use fs2::FileExt;
use std::cell::RefCell;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::rc::Rc;

pub const TASKS_FILE: &str = "tasks.json";

/// Key-value blob boundary the task store writes through.
///
/// Read returns the previously written blob or absence; write replaces it
/// wholesale. Swapping the backend (in-memory for tests, a file in
/// production) never touches the store logic.
pub trait BlobStore {
    fn read(&self) -> Result<Option<Vec<u8>>>;
    fn write(&self, bytes: &[u8]) -> Result<()>;
}

/// File-backed blob store. One file holds the whole task list.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Default location under the platform data dir, e.g.
    /// `~/.local/share/feito/tasks.json` on Linux.
    pub fn default_path() -> Option<PathBuf> {
        if let Some(proj) = ProjectDirs::from("com", "feito", "feito") {
            let data_dir = proj.data_dir();
            if !data_dir.exists() {
                let _ = fs::create_dir_all(data_dir);
            }
            return Some(data_dir.join(TASKS_FILE));
        }
        None
    }

    /// Atomic write: Write to .tmp file then rename
    pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<()> {
        let path = path.as_ref();
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, contents)?;
        fs::rename(tmp_path, path)?;
        Ok(())
    }

    /// Run `f` while holding an exclusive advisory lock next to `path`.
    /// Guards against a second running instance, not against threads.
    pub fn with_lock<T, F>(path: &Path, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }
        let lock_path = path.with_extension("lock");
        let lock_file = fs::OpenOptions::new()
            .create(true)
            .write(true)
            .open(&lock_path)?;
        lock_file.lock_exclusive()?;
        let result = f();
        let _ = FileExt::unlock(&lock_file);
        result
    }
}

impl BlobStore for FileStore {
    fn read(&self) -> Result<Option<Vec<u8>>> {
        if !self.path.exists() {
            return Ok(None);
        }
        Self::with_lock(&self.path, || match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            // Deleted between the exists check and the lock: treat as absent.
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        })
    }

    fn write(&self, bytes: &[u8]) -> Result<()> {
        Self::with_lock(&self.path, || Self::atomic_write(&self.path, bytes))
    }
}

/// Volatile backend for tests, and for sessions where no data directory can
/// be resolved. Clones share the same blob.
#[derive(Clone, Default)]
pub struct MemoryStore {
    blob: Rc<RefCell<Option<Vec<u8>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryStore {
    fn read(&self) -> Result<Option<Vec<u8>>> {
        Ok(self.blob.borrow().clone())
    }

    fn write(&self, bytes: &[u8]) -> Result<()> {
        *self.blob.borrow_mut() = Some(bytes.to_vec());
        Ok(())
    }
}
