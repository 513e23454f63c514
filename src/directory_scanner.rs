// SPDX-License-Identifier: MPL-2.0
//! Directory scanner module for finding the gallery's images.
//!
//! This module scans a directory for supported image formats, filters them,
//! and sorts them by file name.

use crate::error::{Error, Result};
use crate::media;
use std::path::{Path, PathBuf};

/// Represents the images found in a directory, in display order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageList {
    image_files: Vec<PathBuf>,
}

impl ImageList {
    /// Scans a directory for supported image files and sorts them by name.
    ///
    /// Returns an error if the path is not a readable directory.
    pub fn scan_directory(directory: &Path) -> Result<Self> {
        if !directory.is_dir() {
            return Err(Error::Io(format!(
                "{} is not a directory",
                directory.display()
            )));
        }

        let mut image_files = Vec::new();

        for entry in std::fs::read_dir(directory)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && media::is_supported_image(&path) {
                image_files.push(path);
            }
        }

        image_files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        tracing::info!(
            directory = %directory.display(),
            count = image_files.len(),
            "scanned gallery directory"
        );

        Ok(Self { image_files })
    }

    /// Returns the image paths in display order.
    #[must_use]
    pub fn paths(&self) -> &[PathBuf] {
        &self.image_files
    }

    /// Returns true if the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.image_files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::tempdir;

    fn create_test_file(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).expect("failed to create test file");
        file.write_all(b"fake image data")
            .expect("failed to write test file");
        path
    }

    #[test]
    fn scan_directory_finds_only_images() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_file(temp_dir.path(), "a.jpg");
        create_test_file(temp_dir.path(), "b.png");
        create_test_file(temp_dir.path(), "notes.txt");
        create_test_file(temp_dir.path(), "clip.mp4");

        let list = ImageList::scan_directory(temp_dir.path()).expect("scan should succeed");
        assert_eq!(list.paths().len(), 2);
    }

    #[test]
    fn scan_directory_sorts_alphabetically() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let c = create_test_file(temp_dir.path(), "c.png");
        let a = create_test_file(temp_dir.path(), "a.png");
        let b = create_test_file(temp_dir.path(), "b.png");

        let list = ImageList::scan_directory(temp_dir.path()).expect("scan should succeed");
        assert_eq!(list.paths(), &[a, b, c]);
    }

    #[test]
    fn scan_directory_skips_subdirectories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::create_dir(temp_dir.path().join("nested.png")).expect("failed to create dir");

        let list = ImageList::scan_directory(temp_dir.path()).expect("scan should succeed");
        assert!(list.is_empty());
    }

    #[test]
    fn scan_non_directory_is_an_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let file = create_test_file(temp_dir.path(), "a.png");

        assert!(matches!(
            ImageList::scan_directory(&file),
            Err(Error::Io(_))
        ));
    }
}
