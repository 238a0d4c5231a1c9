/*!
 * Per-directory collection of records and name ordering
 */

use std::cmp::Ordering;

use crate::error::{LslError, Result};
use crate::types::FileRecord;

/// Ordered records gathered for one directory
///
/// Insertion order is kept until [`EntryCollection::sort_by_name_ci`] runs.
#[derive(Debug, Clone, Default)]
pub struct EntryCollection {
    entries: Vec<FileRecord>,
    limit: Option<usize>,
}

impl EntryCollection {
    /// Create an empty collection that grows as needed
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty collection holding at most `limit` records
    pub fn with_capacity_limit(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            limit: Some(limit),
        }
    }

    /// Add a record at the end; fails without change once the limit is reached
    pub fn append(&mut self, record: FileRecord) -> Result<()> {
        if let Some(capacity) = self.limit {
            if self.entries.len() >= capacity {
                return Err(LslError::CapacityExceeded { capacity });
            }
        }
        self.entries.push(record);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FileRecord> {
        self.entries.iter()
    }

    /// Stable sort by case-insensitive name
    pub fn sort_by_name_ci(&mut self) {
        self.entries
            .sort_by(|a, b| compare_names_ci(a.name(), b.name()));
    }
}

impl<'a> IntoIterator for &'a EntryCollection {
    type Item = &'a FileRecord;
    type IntoIter = std::slice::Iter<'a, FileRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Byte-wise comparison with ASCII case folded
pub fn compare_names_ci(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.bytes().map(|c| c.to_ascii_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> FileRecord {
        FileRecord::new(
            name.to_string(),
            "-rw-r--r--".to_string(),
            1,
            "root".to_string(),
            "root".to_string(),
            0,
            "Jan  1 00:00".to_string(),
        )
    }

    fn names(collection: &EntryCollection) -> Vec<&str> {
        collection.iter().map(FileRecord::name).collect()
    }

    #[test]
    fn test_insertion_order_until_sorted() {
        let mut c = EntryCollection::new();
        assert!(c.is_empty());
        for n in ["zeta", "alpha", "Mid"] {
            c.append(record(n)).unwrap();
        }
        assert_eq!(c.len(), 3);
        assert_eq!(names(&c), ["zeta", "alpha", "Mid"]);

        c.sort_by_name_ci();
        assert_eq!(names(&c), ["alpha", "Mid", "zeta"]);
    }

    #[test]
    fn test_case_duplicates_group_together() {
        let mut c = EntryCollection::new();
        for n in ["b", "A", "a", "B"] {
            c.append(record(n)).unwrap();
        }
        c.sort_by_name_ci();
        let folded: Vec<String> = c.iter().map(|r| r.name().to_lowercase()).collect();
        assert_eq!(folded, ["a", "a", "b", "b"]);
        // stable: original relative order of duplicates survives
        assert_eq!(names(&c), ["A", "a", "b", "B"]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let mut c = EntryCollection::new();
        for n in ["README", "build.rs", "Cargo.toml", "src", "a_b", "a-b"] {
            c.append(record(n)).unwrap();
        }
        c.sort_by_name_ci();
        let once: Vec<String> = names(&c).into_iter().map(String::from).collect();
        c.sort_by_name_ci();
        assert_eq!(names(&c), once);
        assert_eq!(once, ["a-b", "a_b", "build.rs", "Cargo.toml", "README", "src"]);
    }

    #[test]
    fn test_sort_empty_and_single() {
        let mut c = EntryCollection::new();
        c.sort_by_name_ci();
        assert!(c.is_empty());

        c.append(record("only")).unwrap();
        c.sort_by_name_ci();
        assert_eq!(names(&c), ["only"]);
    }

    #[test]
    fn test_append_past_limit_fails() {
        let mut c = EntryCollection::with_capacity_limit(2);
        c.append(record("a")).unwrap();
        c.append(record("b")).unwrap();
        let err = c.append(record("c")).unwrap_err();
        assert!(matches!(err, LslError::CapacityExceeded { capacity: 2 }));
        assert_eq!(names(&c), ["a", "b"]);
    }

    #[test]
    fn test_compare_names_ci() {
        assert_eq!(compare_names_ci("abc", "ABC"), Ordering::Equal);
        assert_eq!(compare_names_ci("abc", "ABD"), Ordering::Less);
        assert_eq!(compare_names_ci("ab", "abc"), Ordering::Less);
        assert_eq!(compare_names_ci("Zed", "apple"), Ordering::Greater);
    }
}
