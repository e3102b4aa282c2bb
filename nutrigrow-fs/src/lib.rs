//! Capability-based file access for dataset, request and context files.
#![forbid(unsafe_code)]

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use std::io;

/// Open a UTF-8 file path using ambient authority.
///
/// # Errors
/// Propagates the underlying I/O error when the file cannot be opened.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Open the parent directory of `path` and return it with the file name.
///
/// # Errors
/// Fails when `path` has no file name or its parent cannot be opened.
pub fn open_dir_and_file(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other("path should include a file name"))?
        .to_owned();
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, file_name))
}

/// Return whether `path` is a regular file.
///
/// # Errors
/// Propagates I/O errors, including [`io::ErrorKind::NotFound`] when
/// nothing exists at `path`.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = open_dir_and_file(path)?;
    dir.metadata(name.as_str()).map(|meta| meta.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use rstest::rstest;
    use std::io::{Read, Write};

    fn utf8_dir(dir: &tempfile::TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 temp dir")
    }

    #[rstest]
    fn reads_written_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = utf8_dir(&dir).join("request.json");
        let mut file = std::fs::File::create(&path).expect("create file");
        file.write_all(b"{\"age\": 30}").expect("write file");

        assert!(file_is_file(&path).expect("stat file"));
        let mut contents = String::new();
        open_utf8_file(&path)
            .expect("open file")
            .read_to_string(&mut contents)
            .expect("read file");
        assert_eq!(contents, "{\"age\": 30}");
    }

    #[rstest]
    fn missing_file_reports_not_found() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = utf8_dir(&dir).join("absent.csv");
        let err = file_is_file(&path).expect_err("nothing at path");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(open_utf8_file(&path).is_err());
    }

    #[rstest]
    fn directory_is_not_a_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let root = utf8_dir(&dir);
        std::fs::create_dir(root.join("data")).expect("create dir");
        assert!(!file_is_file(&root.join("data")).expect("stat dir"));
    }
}
