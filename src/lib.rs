/*!
 * lsl - list directory contents in long format
 *
 * Each path is reported with its permissions, link count, owner, group,
 * size and modification time. Directories list their non-hidden entries,
 * sorted by name without regard to case.
 */

pub mod collection;
pub mod config;
pub mod error;
pub mod lister;
pub mod metadata;
pub mod permissions;
pub mod types;
pub mod writer;


// Re-export main components for easier access
pub use collection::EntryCollection;
pub use config::{Args, Config};
pub use error::{LslError, Result};
pub use lister::{Lister, RunSummary};
pub use metadata::extract;
pub use permissions::format_permissions;
pub use types::{FileKind, FileRecord};
pub use writer::{render_record, ListingWriter};
