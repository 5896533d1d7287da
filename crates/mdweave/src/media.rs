//! Recursive media copying.

use std::fs;
use std::io;
use std::path::Path;

/// Recursively copy a file or directory to `dest`, creating intermediate
/// directories as needed.
pub(crate) fn copy_recursive(src: &Path, dest: &Path) -> io::Result<()> {
    if src.is_dir() {
        fs::create_dir_all(dest)?;
        for entry in fs::read_dir(src)? {
            let entry = entry?;
            copy_recursive(&entry.path(), &dest.join(entry.file_name()))?;
        }
    } else {
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(src, dest)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_copy_file_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("pic.png");
        fs::write(&src, b"data").unwrap();

        let dest = dir.path().join("out/img/pic.png");
        copy_recursive(&src, &dest).unwrap();
        assert_eq!(fs::read(&dest).unwrap(), b"data");
    }

    #[test]
    fn test_copy_directory_tree() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("anim.hyperesources");
        fs::create_dir_all(src.join("images")).unwrap();
        fs::write(src.join("anim.js"), b"js").unwrap();
        fs::write(src.join("images/frame.png"), b"png").unwrap();

        let dest = dir.path().join("out/anim.hyperesources");
        copy_recursive(&src, &dest).unwrap();
        assert_eq!(fs::read(dest.join("anim.js")).unwrap(), b"js");
        assert_eq!(fs::read(dest.join("images/frame.png")).unwrap(), b"png");
    }

    #[test]
    fn test_missing_source_fails() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("absent.png");
        let dest = dir.path().join("out/absent.png");
        assert!(copy_recursive(&src, &dest).is_err());
    }
}
