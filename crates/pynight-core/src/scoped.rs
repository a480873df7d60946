//! Scoped resource acquisition
//!
//! [`ScopedResource`] owns a reader and releases it when dropped, so every
//! exit path out of [`read_file`] (including `?` on a failed read) closes the
//! file handle.

use crate::error::{DemoError, DemoResult};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

type ReleaseHook = Box<dyn FnOnce(&Path)>;

/// A reader that is released exactly once, when the guard goes out of scope
pub struct ScopedResource<R> {
    path: PathBuf,
    inner: Option<R>,
    on_release: Option<ReleaseHook>,
}

impl ScopedResource<File> {
    /// Open `path` for reading
    ///
    /// # Errors
    /// [`DemoError::NotFound`] if the file does not exist, [`DemoError::Io`]
    /// for any other failure to open it.
    pub fn open(path: impl AsRef<Path>) -> DemoResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| DemoError::from_io(path, e))?;
        tracing::debug!(path = %path.display(), "acquired file handle");
        Ok(Self::new(path, file))
    }
}

impl<R: Read> ScopedResource<R> {
    /// Guard an already-acquired reader; `path` is used for errors and logs
    pub fn new(path: impl Into<PathBuf>, reader: R) -> Self {
        Self {
            path: path.into(),
            inner: Some(reader),
            on_release: None,
        }
    }

    /// Run `hook` after the reader has been dropped
    #[must_use]
    pub fn on_release(mut self, hook: impl FnOnce(&Path) + 'static) -> Self {
        self.on_release = Some(Box::new(hook));
        self
    }

    /// Path this resource was opened from
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read everything that is left into a `String`
    ///
    /// # Errors
    /// [`DemoError::Io`] if the read fails or the contents are not UTF-8.
    pub fn read_to_string(&mut self) -> DemoResult<String> {
        let mut contents = String::new();
        if let Some(reader) = self.inner.as_mut() {
            reader
                .read_to_string(&mut contents)
                .map_err(|e| DemoError::from_io(&self.path, e))?;
        }
        Ok(contents)
    }
}

impl<R> Drop for ScopedResource<R> {
    fn drop(&mut self) {
        if self.inner.take().is_some() {
            tracing::debug!(path = %self.path.display(), "released file handle");
            if let Some(hook) = self.on_release.take() {
                hook(&self.path);
            }
        }
    }
}

impl<R> fmt::Debug for ScopedResource<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopedResource")
            .field("path", &self.path)
            .field("held", &self.inner.is_some())
            .finish_non_exhaustive()
    }
}

/// Read an entire file, releasing the handle before returning
///
/// # Errors
/// [`DemoError::NotFound`] for a missing file, [`DemoError::Io`] otherwise.
/// Errors are not handled here.
pub fn read_file(path: impl AsRef<Path>) -> DemoResult<String> {
    let mut resource = ScopedResource::open(path)?;
    read_scoped(&mut resource)
}

/// Read everything from a guarded reader
///
/// # Errors
/// Propagates the read failure, logging it first.
pub fn read_scoped<R: Read>(resource: &mut ScopedResource<R>) -> DemoResult<String> {
    resource.read_to_string().inspect_err(|e| {
        tracing::warn!(path = %resource.path().display(), error = %e, "scoped read failed");
    })
}
