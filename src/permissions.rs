/*!
 * Symbolic permission formatting
 */

use nix::sys::stat::{mode_t, Mode, SFlag};

use crate::types::FileKind;

const KINDS: [(SFlag, FileKind); 7] = [
    (SFlag::S_IFREG, FileKind::Regular),
    (SFlag::S_IFDIR, FileKind::Directory),
    (SFlag::S_IFLNK, FileKind::Symlink),
    (SFlag::S_IFBLK, FileKind::BlockDevice),
    (SFlag::S_IFCHR, FileKind::CharDevice),
    (SFlag::S_IFIFO, FileKind::Fifo),
    (SFlag::S_IFSOCK, FileKind::Socket),
];

/// Owner, group and other bits, each paired with its glyph
const CLASS_BITS: [(Mode, char); 9] = [
    (Mode::S_IRUSR, 'r'),
    (Mode::S_IWUSR, 'w'),
    (Mode::S_IXUSR, 'x'),
    (Mode::S_IRGRP, 'r'),
    (Mode::S_IWGRP, 'w'),
    (Mode::S_IXGRP, 'x'),
    (Mode::S_IROTH, 'r'),
    (Mode::S_IWOTH, 'w'),
    (Mode::S_IXOTH, 'x'),
];

/// Decode the type bits of a raw mode
pub fn file_kind(mode: u32) -> FileKind {
    let type_bits = mode as mode_t & SFlag::S_IFMT.bits();
    KINDS
        .iter()
        .find(|(flag, _)| flag.bits() == type_bits)
        .map_or(FileKind::Unknown, |&(_, kind)| kind)
}

/// Format a raw mode as `<type><rwxrwxrwx>`
///
/// Total over every `u32`: unrecognized type bits produce `?`. Setuid, setgid
/// and sticky bits are not rendered.
pub fn format_permissions(mode: u32) -> String {
    let bits = Mode::from_bits_truncate(mode as mode_t);
    let mut out = String::with_capacity(10);
    out.push(file_kind(mode).glyph());
    for (class_bit, glyph) in CLASS_BITS {
        out.push(if bits.contains(class_bit) { glyph } else { '-' });
    }
    out
}
