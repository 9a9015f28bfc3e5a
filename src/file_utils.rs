use crate::config::SUPPORTED_IMAGE_SUFFIXES;
use crate::error::Result;
use log::debug;
use std::fs;
use std::io;
use std::path::Path;

/// Filesystem queries the session depends on.
pub trait FileSystem {
    /// Names of the direct children of `dir`, in the order the OS returns them.
    fn list_directory(&self, dir: &Path) -> io::Result<Vec<String>>;

    /// Whether `path` is an existing regular file (symlinks are followed).
    fn is_regular_file(&self, path: &Path) -> bool;
}

/// `FileSystem` backed by `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    fn list_directory(&self, dir: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(dir)? {
            match entry?.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => debug!("Skipping non UTF-8 entry {:?} in {}", raw, dir.display()),
            }
        }
        Ok(names)
    }

    fn is_regular_file(&self, path: &Path) -> bool {
        fs::metadata(path).map(|meta| meta.is_file()).unwrap_or(false)
    }
}

/// Returns true if `name` ends with one of the accepted suffixes, ignoring case.
pub fn is_supported_image(name: &str) -> bool {
    let lower = name.to_lowercase();
    SUPPORTED_IMAGE_SUFFIXES
        .iter()
        .any(|suffix| lower.ends_with(suffix))
}

/// Lists the image files directly inside `dir`, keeping listing order.
pub fn scan_directory(filesystem: &impl FileSystem, dir: &Path) -> Result<Vec<String>> {
    let image_files = filesystem
        .list_directory(dir)?
        .into_iter()
        .filter(|name| is_supported_image(name) && filesystem.is_regular_file(&dir.join(name)))
        .collect();

    Ok(image_files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use std::fs::File;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) {
        File::create(dir.join(name)).expect("failed to create file");
    }

    /// Lists a fixed set of names in a fixed order; everything is a regular file.
    struct FixedFileSystem(&'static [&'static str]);

    impl FileSystem for FixedFileSystem {
        fn list_directory(&self, _dir: &Path) -> io::Result<Vec<String>> {
            Ok(self.0.iter().map(|name| name.to_string()).collect())
        }

        fn is_regular_file(&self, _path: &Path) -> bool {
            true
        }
    }

    #[test]
    fn supported_image_matches_both_suffixes_case_insensitively() {
        assert!(is_supported_image("a.png"));
        assert!(is_supported_image("b.gif"));
        assert!(is_supported_image("C.GIF"));
        assert!(is_supported_image("shot.PnG"));
    }

    #[test]
    fn supported_image_rejects_other_names() {
        assert!(!is_supported_image("notes.txt"));
        assert!(!is_supported_image("photo.jpg"));
        assert!(!is_supported_image("png"));
        assert!(!is_supported_image("archive.png.zip"));
    }

    #[test]
    fn scan_keeps_only_regular_image_files() {
        let dir = tempdir().expect("failed to create temp dir");
        touch(dir.path(), "a.png");
        touch(dir.path(), "b.txt");
        touch(dir.path(), "c.GIF");
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::create_dir(dir.path().join("folder.png")).unwrap();

        let mut files = scan_directory(&LocalFileSystem, dir.path()).unwrap();
        files.sort();

        assert_eq!(files, vec!["a.png".to_string(), "c.GIF".to_string()]);
    }

    #[test]
    fn scan_of_missing_directory_is_a_listing_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let missing = dir.path().join("does-not-exist");

        let result = scan_directory(&LocalFileSystem, &missing);

        assert!(matches!(result, Err(AppError::DirectoryListingFailed(_))));
    }

    #[test]
    fn scan_of_a_file_path_is_a_listing_error() {
        let dir = tempdir().expect("failed to create temp dir");
        touch(dir.path(), "a.png");

        let result = scan_directory(&LocalFileSystem, &dir.path().join("a.png"));

        assert!(matches!(result, Err(AppError::DirectoryListingFailed(_))));
    }

    #[test]
    fn local_is_regular_file_rejects_directories_and_missing_paths() {
        let dir = tempdir().expect("failed to create temp dir");
        touch(dir.path(), "a.png");

        assert!(LocalFileSystem.is_regular_file(&dir.path().join("a.png")));
        assert!(!LocalFileSystem.is_regular_file(dir.path()));
        assert!(!LocalFileSystem.is_regular_file(&dir.path().join("gone.png")));
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_are_followed() {
        let dir = tempdir().expect("failed to create temp dir");
        touch(dir.path(), "real.png");
        fs::create_dir(dir.path().join("sub")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("real.png"), dir.path().join("link.png"))
            .unwrap();
        std::os::unix::fs::symlink(dir.path().join("sub"), dir.path().join("dirlink.gif"))
            .unwrap();

        let mut files = scan_directory(&LocalFileSystem, dir.path()).unwrap();
        files.sort();

        assert_eq!(files, vec!["link.png".to_string(), "real.png".to_string()]);
    }

    #[test]
    fn scan_keeps_listing_order() {
        let filesystem = FixedFileSystem(&["z.png", "b.txt", "a.GIF", "m.png"]);

        let files = scan_directory(&filesystem, Path::new("/fixed")).unwrap();

        assert_eq!(files, vec!["z.png", "a.GIF", "m.png"]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn non_utf8_names_are_skipped() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempdir().expect("failed to create temp dir");
        touch(dir.path(), "ok.png");
        File::create(dir.path().join(OsStr::from_bytes(b"bad\xff.png")))
            .expect("failed to create non UTF-8 file");

        let names = LocalFileSystem.list_directory(dir.path()).unwrap();
        let files = scan_directory(&LocalFileSystem, dir.path()).unwrap();

        assert_eq!(names, vec!["ok.png".to_string()]);
        assert_eq!(files, vec!["ok.png".to_string()]);
    }
}
