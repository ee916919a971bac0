//! Capability-based file access for guide exports and analysis reports.

use std::io;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};

/// Kind of filesystem entry found at an input path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EntryKind {
    File,
    Other,
}

/// Open a guide export for reading.
pub(crate) fn open_export(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Report what kind of entry lives at `path`.
///
/// A missing entry surfaces as an [`io::ErrorKind::NotFound`] error.
pub(crate) fn entry_kind(path: &Utf8Path) -> io::Result<EntryKind> {
    let (dir, name) = open_parent(path)?;
    let metadata = dir.metadata(name)?;
    Ok(if metadata.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    })
}

/// Create (or truncate) a report file, creating missing parent directories.
pub(crate) fn create_report(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    let parent = parent_or_current(path);
    fs_utf8::Dir::create_ambient_dir_all(parent, ambient_authority())?;
    let (dir, name) = open_parent(path)?;
    dir.create(name)
}

fn open_parent(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, &str)> {
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other(format!("{path} does not name a file")))?;
    let dir = fs_utf8::Dir::open_ambient_dir(parent_or_current(path), ambient_authority())?;
    Ok((dir, name))
}

fn parent_or_current(path: &Utf8Path) -> &Utf8Path {
    match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use rstest::rstest;
    use std::io::{Read, Write};
    use tempfile::TempDir;

    fn workspace() -> (TempDir, Utf8PathBuf) {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        (tmp, root)
    }

    #[rstest]
    fn entry_kind_distinguishes_files_and_directories() {
        let (_tmp, root) = workspace();
        let file = root.join("guides.json");
        std::fs::write(&file, b"[]").expect("write export");

        assert_eq!(entry_kind(&file).expect("inspect file"), EntryKind::File);
        assert_eq!(entry_kind(&root).expect("inspect dir"), EntryKind::Other);
    }

    #[rstest]
    fn entry_kind_reports_missing_paths() {
        let (_tmp, root) = workspace();
        let err = entry_kind(&root.join("absent.json")).expect_err("missing path");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[rstest]
    fn create_report_builds_missing_parents() {
        let (_tmp, root) = workspace();
        let target = root.join("reports/2026/october.json");

        let mut file = create_report(&target).expect("create report");
        file.write_all(b"{}").expect("write report");
        drop(file);

        let mut contents = String::new();
        open_export(&target)
            .expect("reopen report")
            .read_to_string(&mut contents)
            .expect("read report");
        assert_eq!(contents, "{}");
    }
}
