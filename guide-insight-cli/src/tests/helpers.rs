//! Test helpers for writing guide exports into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use guide_insight_core::test_support::sample_population;
use std::fs;
use tempfile::TempDir;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write test file");
}

/// Temporary directory holding a guide export.
pub(super) struct ExportWorkspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl ExportWorkspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn export_path(&self) -> Utf8PathBuf {
        self.root.join("guides.json")
    }

    /// Write the shared six-guide sample population and return its path.
    pub(super) fn write_sample_export(&self) -> Utf8PathBuf {
        let payload = serde_json::to_vec(&sample_population()).expect("serialise sample guides");
        let path = self.export_path();
        write_utf8(&path, &payload);
        path
    }
}
