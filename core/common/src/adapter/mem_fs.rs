//! テスト用メモリファイルシステム
//!
//! ディスクに触れずに「ディレクトリが作られたか」「何が追記されたか」を
//! 観察するための FileSystem 実装。`failing` で I/O 失敗も注入できる。

use crate::error::Error;
use crate::ports::outbound::FileSystem;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct Inner {
    files: HashMap<PathBuf, Vec<u8>>,
    dirs: HashSet<PathBuf>,
}

/// メモリ上で完結する FileSystem 実装（テスト用）
#[derive(Debug, Clone, Default)]
pub struct MemFileSystem {
    inner: Arc<Mutex<Inner>>,
    fail_with: Option<String>,
}

impl MemFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// すべての操作が同じメッセージで失敗する FS を作る（失敗経路のテスト用）
    pub fn failing(msg: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner::default())),
            fail_with: Some(msg.into()),
        }
    }

    /// 追記済みの内容を UTF-8 として返す（未作成なら None）
    pub fn contents(&self, path: &Path) -> Option<String> {
        let inner = self.inner.lock().unwrap();
        inner
            .files
            .get(path)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    /// create_dir_all 済みかどうか
    pub fn dir_exists(&self, path: &Path) -> bool {
        let inner = self.inner.lock().unwrap();
        inner.dirs.contains(path)
    }
}

/// open_append が返す Writer。write のたびに対応エントリへ追記する。
struct MemWriter {
    inner: Arc<Mutex<Inner>>,
    path: PathBuf,
}

impl std::io::Write for MemWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let mut inner = self.inner.lock().unwrap();
        inner
            .files
            .entry(self.path.clone())
            .or_default()
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl FileSystem for MemFileSystem {
    fn create_dir_all(&self, path: &Path) -> Result<(), Error> {
        if let Some(msg) = &self.fail_with {
            return Err(Error::io_msg(msg.clone()));
        }
        let mut inner = self.inner.lock().unwrap();
        let mut current = PathBuf::new();
        for part in path.components() {
            current.push(part);
            inner.dirs.insert(current.clone());
        }
        Ok(())
    }

    fn open_append(&self, path: &Path) -> Result<Box<dyn std::io::Write + Send>, Error> {
        if let Some(msg) = &self.fail_with {
            return Err(Error::io_msg(msg.clone()));
        }
        let mut inner = self.inner.lock().unwrap();
        inner.files.entry(path.to_path_buf()).or_default();
        Ok(Box::new(MemWriter {
            inner: Arc::clone(&self.inner),
            path: path.to_path_buf(),
        }))
    }
}
