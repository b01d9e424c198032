//! File discovery
//!
//! Flat directory listings only: no recursion into subdirectories.
//! Symlinks are followed, so a linked trial file or condition directory
//! counts like a real one; dangling links are skipped.

use crate::Result;
use std::fs;
use std::path::Path;

/// List regular files directly in `dir` whose name ends with `ext`.
///
/// Returns bare file names, sorted so repeated runs see the same order.
/// An empty directory yields an empty list.
///
/// # Errors
/// Returns [`crate::Error::Io`] if `dir` does not exist or cannot be read
pub fn list_data_files<P: AsRef<Path>>(dir: P, ext: &str) -> Result<Vec<String>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir.as_ref())? {
        let entry = entry?;
        if !entry.path().is_file() {
            continue;
        }
        // Non-UTF-8 names cannot match a UTF-8 suffix
        if let Some(name) = entry.file_name().to_str() {
            if name.ends_with(ext) {
                files.push(name.to_string());
            }
        }
    }
    files.sort();
    Ok(files)
}

/// List the immediate subdirectories of `dir` by name.
///
/// # Errors
/// Returns [`crate::Error::Io`] if `dir` does not exist or cannot be read
pub fn list_subdirs<P: AsRef<Path>>(dir: P) -> Result<Vec<String>> {
    let mut subdirs = Vec::new();
    for entry in fs::read_dir(dir.as_ref())? {
        let entry = entry?;
        if entry.path().is_dir() {
            subdirs.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    subdirs.sort();
    Ok(subdirs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_filter_is_suffix_match() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("t1.txt"), "").unwrap();
        fs::write(dir.path().join("t2.txt"), "").unwrap();
        fs::write(dir.path().join("notes.csv"), "").unwrap();
        fs::create_dir(dir.path().join("nested.txt")).unwrap();

        let files = list_data_files(dir.path(), "txt").unwrap();
        assert_eq!(files, vec!["t1.txt".to_string(), "t2.txt".to_string()]);
    }

    #[test]
    fn test_subdirs_skip_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("a1")).unwrap();
        fs::write(dir.path().join("readme.txt"), "").unwrap();

        assert_eq!(list_subdirs(dir.path()).unwrap(), vec!["a1".to_string()]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_are_followed() {
        use std::os::unix::fs::symlink;

        let store = tempfile::tempdir().unwrap();
        fs::create_dir(store.path().join("b1_real")).unwrap();
        fs::write(store.path().join("t1_real.dat"), "").unwrap();

        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("a1")).unwrap();
        symlink(store.path().join("b1_real"), dir.path().join("b1")).unwrap();
        symlink(store.path().join("t1_real.dat"), dir.path().join("t1.txt")).unwrap();
        symlink(store.path().join("gone.txt"), dir.path().join("dangling.txt")).unwrap();

        assert_eq!(
            list_subdirs(dir.path()).unwrap(),
            vec!["a1".to_string(), "b1".to_string()]
        );
        assert_eq!(list_data_files(dir.path(), "txt").unwrap(), vec!["t1.txt".to_string()]);
    }
}
