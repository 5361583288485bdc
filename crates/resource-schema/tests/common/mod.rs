//! Test doubles for asset providers

#![allow(dead_code)]

use resource_schema::{AssetProvider, AssetStream, LoaderError, LoaderResult, ResourceName};
use std::collections::BTreeMap;
use std::io::{self, Cursor, Read};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// In-memory bundle with open/release bookkeeping
#[derive(Debug, Default, Clone)]
pub struct MemoryAssets {
    assets: BTreeMap<String, Vec<u8>>,
    opened: Arc<AtomicUsize>,
    released: Arc<AtomicUsize>,
}

impl MemoryAssets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_asset(mut self, name: &str, content: impl Into<Vec<u8>>) -> Self {
        self.assets.insert(name.to_string(), content.into());
        self
    }

    pub fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    pub fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }
}

impl AssetProvider for MemoryAssets {
    fn open(&self, name: &ResourceName) -> LoaderResult<AssetStream> {
        let content = self
            .assets
            .get(name.as_str())
            .ok_or_else(|| LoaderError::not_found(name.as_str()))?;

        self.opened.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(TrackedStream {
            inner: Cursor::new(content.clone()),
            released: Arc::clone(&self.released),
        }))
    }

    fn names(&self) -> LoaderResult<Vec<String>> {
        Ok(self.assets.keys().cloned().collect())
    }
}

struct TrackedStream {
    inner: Cursor<Vec<u8>>,
    released: Arc<AtomicUsize>,
}

impl Read for TrackedStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl Drop for TrackedStream {
    fn drop(&mut self) {
        self.released.fetch_add(1, Ordering::SeqCst);
    }
}

/// Bundle whose assets exist but fail the way a corrupted package would
#[derive(Debug, Clone, Copy)]
pub enum CorruptAssets {
    /// Opening the asset fails
    OnOpen,
    /// Opening succeeds, reading fails part-way through
    OnRead,
}

impl AssetProvider for CorruptAssets {
    fn open(&self, name: &ResourceName) -> LoaderResult<AssetStream> {
        match self {
            Self::OnOpen => Err(LoaderError::unreadable(
                name.as_str(),
                io::Error::new(io::ErrorKind::InvalidData, "corrupt archive entry"),
            )),
            Self::OnRead => Ok(Box::new(FailingReader { served: false })),
        }
    }

    fn names(&self) -> LoaderResult<Vec<String>> {
        Ok(Vec::new())
    }
}

struct FailingReader {
    served: bool,
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.served {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "truncated entry"));
        }
        self.served = true;
        let chunk = b"{\"typeName\":";
        let n = chunk.len().min(buf.len());
        buf[..n].copy_from_slice(&chunk[..n]);
        Ok(n)
    }
}
