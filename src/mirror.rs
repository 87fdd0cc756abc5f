//! Delete-and-recopy mirroring of the typechain artifact directory.

use contract_sync_common::SyncError;
use std::fs;
use std::path::Path;

/// Replaces `dest` with an exact recursive copy of `source`.
///
/// Any pre-existing tree at `dest` is removed first, so stale artifacts
/// never survive a sync. There is no atomicity: a failure mid-copy leaves a
/// partial tree behind, and the next successful run repairs it.
pub fn mirror_directory(source: &Path, dest: &Path) -> Result<(), SyncError> {
    if dest.exists() {
        fs::remove_dir_all(dest)?;
    }
    copy_tree(source, dest)
}

fn copy_tree(source: &Path, dest: &Path) -> Result<(), SyncError> {
    fs::create_dir_all(dest)?;
    fs::set_permissions(dest, fs::metadata(source)?.permissions())?;

    for entry in fs::read_dir(source)? {
        let entry = entry?;
        let target = dest.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_tree(&entry.path(), &target)?;
        } else {
            // fs::copy carries permission bits along with the contents.
            fs::copy(entry.path(), &target)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap()
    }

    #[test]
    fn copies_nested_trees_including_empty_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let source = tmp.path().join("typechain-types");
        let dest = tmp.path().join("mirror");

        fs::create_dir_all(source.join("factories").join("empty")).unwrap();
        fs::write(source.join("index.ts"), "export {};\n").unwrap();
        fs::write(source.join("factories").join("Gateway.ts"), "// gateway\n").unwrap();

        mirror_directory(&source, &dest).unwrap();

        assert_eq!(read(&dest.join("index.ts")), "export {};\n");
        assert_eq!(read(&dest.join("factories").join("Gateway.ts")), "// gateway\n");
        assert!(dest.join("factories").join("empty").is_dir());
    }

    #[test]
    fn removes_stale_destination_contents() {
        let tmp = tempfile::tempdir().unwrap();
        let source = tmp.path().join("src");
        let dest = tmp.path().join("dst");

        fs::create_dir_all(&source).unwrap();
        fs::write(source.join("current.ts"), "new").unwrap();
        fs::create_dir_all(&dest).unwrap();
        fs::write(dest.join("stale.ts"), "old").unwrap();

        mirror_directory(&source, &dest).unwrap();

        assert!(!dest.join("stale.ts").exists());
        assert_eq!(read(&dest.join("current.ts")), "new");
    }

    #[test]
    fn resyncing_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let source = tmp.path().join("src");
        let dest = tmp.path().join("dst");

        fs::create_dir_all(source.join("sub")).unwrap();
        fs::write(source.join("a.ts"), "a").unwrap();
        fs::write(source.join("sub").join("b.ts"), "b").unwrap();

        mirror_directory(&source, &dest).unwrap();
        mirror_directory(&source, &dest).unwrap();

        assert_eq!(read(&dest.join("a.ts")), "a");
        assert_eq!(read(&dest.join("sub").join("b.ts")), "b");
    }

    #[cfg(unix)]
    #[test]
    fn preserves_file_permission_bits() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().unwrap();
        let source = tmp.path().join("src");
        let dest = tmp.path().join("dst");

        fs::create_dir_all(&source).unwrap();
        let script = source.join("run.sh");
        fs::write(&script, "#!/bin/sh\n").unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        mirror_directory(&source, &dest).unwrap();

        let mode = fs::metadata(dest.join("run.sh")).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }

    #[test]
    fn missing_source_is_an_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = mirror_directory(&tmp.path().join("absent"), &tmp.path().join("dst"));
        assert!(matches!(err, Err(SyncError::Io(_))));
    }
}
