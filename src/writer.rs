/*!
 * Line-oriented rendering of records
 */

use std::io::{self, Write};

use crate::collection::EntryCollection;
use crate::types::FileRecord;

/// Render one record as a single line, without the line terminator
pub fn render_record(record: &FileRecord) -> String {
    format!(
        "{} {} {} {} {} {} {}",
        record.permissions(),
        record.hard_links(),
        record.owner(),
        record.group(),
        record.size(),
        record.modified(),
        record.name()
    )
}

/// Writer for listing output
pub struct ListingWriter<W: Write> {
    out: W,
    sections: usize,
}

impl<W: Write> ListingWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, sections: 0 }
    }

    /// Write one record line
    pub fn write_record(&mut self, record: &FileRecord) -> io::Result<()> {
        writeln!(self.out, "{}", render_record(record))
    }

    /// Write a directory section: optional `<path>:` header, then one line per entry
    ///
    /// Every section after the first is preceded by a blank line.
    pub fn write_collection(
        &mut self,
        collection: &EntryCollection,
        header: Option<&str>,
    ) -> io::Result<()> {
        if self.sections > 0 {
            writeln!(self.out)?;
        }
        self.sections += 1;

        if let Some(header) = header {
            writeln!(self.out, "{}:", header)?;
        }
        for record in collection {
            self.write_record(record)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
