/*!
 * Metadata extraction for a single directory entry
 */

use std::fs;
use std::io;
use std::os::unix::fs::MetadataExt;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Local};
use nix::unistd::{Gid, Group, Uid, User};
use tracing::debug;

use crate::error::{LslError, Result};
use crate::permissions::format_permissions;
use crate::types::FileRecord;

/// `Mon D HH:MM`, day padded with a space
const TIME_FORMAT: &str = "%b %e %H:%M";

/// Join `containing_dir` and `name`; an empty directory leaves `name` as is
pub fn entry_path(name: &str, containing_dir: &str) -> PathBuf {
    if containing_dir.is_empty() {
        PathBuf::from(name)
    } else {
        PathBuf::from(containing_dir).join(name)
    }
}

/// Build the record for `name` inside `containing_dir`
///
/// Symbolic links are not followed. Owner and group names fall back to the
/// numeric id when no account entry exists.
pub fn extract(name: &str, containing_dir: &str) -> Result<FileRecord> {
    extract_at(name, &entry_path(name, containing_dir))
}

/// Build the record for the entry at `path`, displayed as `name`
pub fn extract_at(name: &str, path: &Path) -> Result<FileRecord> {
    let not_accessible = |source: io::Error| LslError::NotAccessible {
        path: path.to_path_buf(),
        source,
    };
    let meta = fs::symlink_metadata(path).map_err(not_accessible)?;
    let modified = meta.modified().map_err(not_accessible)?;

    Ok(FileRecord::new(
        name.to_string(),
        format_permissions(meta.mode()),
        meta.nlink(),
        owner_name(meta.uid()),
        group_name(meta.gid()),
        meta.size(),
        format_modified(modified),
    ))
}

/// Resolve a user id, falling back to its decimal form
pub fn owner_name(uid: u32) -> String {
    match User::from_uid(Uid::from_raw(uid)) {
        Ok(Some(user)) => user.name,
        Ok(None) => uid.to_string(),
        Err(e) => {
            debug!(uid, error = %e, "user lookup failed");
            uid.to_string()
        }
    }
}

/// Resolve a group id, falling back to its decimal form
pub fn group_name(gid: u32) -> String {
    match Group::from_gid(Gid::from_raw(gid)) {
        Ok(Some(group)) => group.name,
        Ok(None) => gid.to_string(),
        Err(e) => {
            debug!(gid, error = %e, "group lookup failed");
            gid.to_string()
        }
    }
}

/// Format a modification time in the local time zone
pub fn format_modified(time: SystemTime) -> String {
    DateTime::<Local>::from(time).format(TIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use std::os::unix::fs::PermissionsExt;

    use chrono::TimeZone;
    use tempfile::tempdir;

    #[test]
    fn test_entry_path() {
        assert_eq!(entry_path("a.txt", "."), PathBuf::from("./a.txt"));
        assert_eq!(entry_path("a.txt", "dir"), PathBuf::from("dir/a.txt"));
        assert_eq!(entry_path("sub/a.txt", ""), PathBuf::from("sub/a.txt"));
    }

    #[test]
    fn test_extract_regular_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("foo.txt");
        File::create(&path).unwrap().write_all(b"hello").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        let record = extract("foo.txt", dir.path().to_str().unwrap()).unwrap();
        assert_eq!(record.name(), "foo.txt");
        assert_eq!(record.permissions(), "-rw-r--r--");
        assert_eq!(record.size(), 5);
        assert_eq!(record.hard_links(), 1);
        assert!(!record.owner().is_empty());
        assert!(!record.group().is_empty());
    }

    #[test]
    fn test_extract_does_not_follow_symlinks() {
        let dir = tempdir().unwrap();
        std::os::unix::fs::symlink("does-not-exist", dir.path().join("dangling")).unwrap();

        let record = extract("dangling", dir.path().to_str().unwrap()).unwrap();
        assert!(record.permissions().starts_with('l'));
        assert_eq!(record.size(), "does-not-exist".len() as u64);
    }

    #[test]
    fn test_extract_missing_entry() {
        let dir = tempdir().unwrap();
        let err = extract("gone", dir.path().to_str().unwrap()).unwrap_err();
        match err {
            LslError::NotAccessible { path, source } => {
                assert_eq!(path, dir.path().join("gone"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_ids_fall_back_to_numbers() {
        // Ids this high are not allocated on any sane test host
        assert_eq!(owner_name(4_000_000_123), "4000000123");
        assert_eq!(group_name(4_000_000_123), "4000000123");
    }

    #[test]
    fn test_format_modified() {
        let local = Local.with_ymd_and_hms(2024, 3, 7, 9, 5, 0).unwrap();
        assert_eq!(format_modified(SystemTime::from(local)), "Mar  7 09:05");

        let local = Local.with_ymd_and_hms(2024, 11, 23, 18, 42, 0).unwrap();
        assert_eq!(format_modified(SystemTime::from(local)), "Nov 23 18:42");
    }
}
