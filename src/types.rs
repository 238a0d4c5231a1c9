/*!
 * Core types for the lsl listing
 */

/// Type of a filesystem entry, as encoded in the mode's type bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Regular file
    Regular,
    /// Directory
    Directory,
    /// Symbolic link (the link itself, never its target)
    Symlink,
    /// Block device
    BlockDevice,
    /// Character device
    CharDevice,
    /// Named pipe
    Fifo,
    /// Unix domain socket
    Socket,
    /// Type bits that map to none of the above
    Unknown,
}

impl FileKind {
    /// Glyph used as the first character of the permission string
    pub fn glyph(self) -> char {
        match self {
            Self::Regular => '-',
            Self::Directory => 'd',
            Self::Symlink => 'l',
            Self::BlockDevice => 'b',
            Self::CharDevice => 'c',
            Self::Fifo => 'p',
            Self::Socket => 's',
            Self::Unknown => '?',
        }
    }
}

/// Snapshot of one entry's metadata at listing time
///
/// Built in one go by [`crate::metadata::extract`]; fields are private so a
/// record cannot change after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    name: String,
    permissions: String,
    nlink: u64,
    owner: String,
    group: String,
    size: u64,
    modified: String,
}

impl FileRecord {
    pub fn new(
        name: String,
        permissions: String,
        nlink: u64,
        owner: String,
        group: String,
        size: u64,
        modified: String,
    ) -> Self {
        Self {
            name,
            permissions,
            nlink,
            owner,
            group,
            size,
            modified,
        }
    }

    /// Base name of the entry, or the argument as given for file targets
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 10-character `<type><rwxrwxrwx>` string
    pub fn permissions(&self) -> &str {
        &self.permissions
    }

    pub fn hard_links(&self) -> u64 {
        self.nlink
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    /// Raw size in bytes as reported by the filesystem
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Modification time, `Mon D HH:MM` in local time
    pub fn modified(&self) -> &str {
        &self.modified
    }
}
