/*!
 * Argument-driven listing
 *
 * Arguments are handled in two passes: every plain-file argument is printed
 * first, in argument order, then every directory argument gets its own
 * section. That ordering is part of the output format.
 */

use std::fs::{self, ReadDir};
use std::io::{self, Write};

use tracing::{debug, warn};

use crate::collection::EntryCollection;
use crate::config::Config;
use crate::error::{LslError, Result};
use crate::metadata::{extract, extract_at};
use crate::writer::ListingWriter;

/// Counters for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Plain-file arguments printed
    pub files: usize,
    /// Directory sections printed
    pub directories: usize,
    /// Records printed inside directory sections
    pub entries: usize,
    /// Arguments or entries reported on the error stream
    pub failures: usize,
}

/// Lists the configured paths
pub struct Lister {
    config: Config,
}

impl Lister {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run the listing, writing records to `out` and diagnostics to `err`
    ///
    /// Only failures to write either stream are returned; everything else is
    /// reported on `err` and counted in the summary.
    pub fn run<W: Write, E: Write>(&self, out: W, mut err: E) -> Result<RunSummary> {
        let mut writer = ListingWriter::new(out);
        let mut summary = RunSummary::default();

        if self.config.paths.is_empty() {
            self.list_directory(".", &mut writer, &mut err, &mut summary)?;
            writer.flush()?;
            return Ok(summary);
        }

        let mut directories = Vec::new();
        for arg in &self.config.paths {
            match fs::read_dir(arg) {
                // handle is dropped here and reopened in the directory pass
                Ok(_) => directories.push(arg.as_str()),
                Err(e) => match LslError::from_open(arg, e) {
                    LslError::NotADirectory(_) => {
                        self.list_file(arg, &mut writer, &mut err, &mut summary)?
                    }
                    other => {
                        self.report(&mut err, arg, &other)?;
                        summary.failures += 1;
                    }
                },
            }
        }

        for dir in directories {
            self.list_directory(dir, &mut writer, &mut err, &mut summary)?;
        }

        writer.flush()?;
        debug!(?summary, "listing finished");
        Ok(summary)
    }

    /// Print the record of a single non-directory argument
    fn list_file<W: Write, E: Write>(
        &self,
        arg: &str,
        writer: &mut ListingWriter<W>,
        err: &mut E,
        summary: &mut RunSummary,
    ) -> Result<()> {
        let containing_dir = if arg.contains('/') { "" } else { "." };
        match extract(arg, containing_dir) {
            Ok(record) => {
                writer.write_record(&record)?;
                summary.files += 1;
            }
            Err(e) => {
                self.report(err, arg, &e)?;
                summary.failures += 1;
            }
        }
        Ok(())
    }

    /// Collect, sort and print the non-hidden entries of `dir`
    fn list_directory<W: Write, E: Write>(
        &self,
        dir: &str,
        writer: &mut ListingWriter<W>,
        err: &mut E,
        summary: &mut RunSummary,
    ) -> Result<()> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                self.report(err, dir, &LslError::from_open(dir, e))?;
                summary.failures += 1;
                return Ok(());
            }
        };
        let collection = self.collect(dir, entries, err, summary)?;

        writer.write_collection(&collection, Some(dir))?;
        summary.directories += 1;
        summary.entries += collection.len();
        Ok(())
    }

    /// Drain an open directory into a sorted collection
    ///
    /// Entry failures are reported on `err` and skipped; only a failed write
    /// to `err` is returned.
    fn collect<E: Write>(
        &self,
        dir: &str,
        entries: ReadDir,
        err: &mut E,
        summary: &mut RunSummary,
    ) -> Result<EntryCollection> {
        let mut collection = match self.config.max_entries {
            Some(limit) => EntryCollection::with_capacity_limit(limit),
            None => EntryCollection::new(),
        };

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(dir, error = %e, "failed to read directory entry");
                    self.write_diagnostic(err, &format!("reading directory '{}': {}", dir, e))?;
                    summary.failures += 1;
                    continue;
                }
            };

            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                continue;
            }

            // the full path keeps names that are not valid UTF-8 listable
            let path = entry.path();
            let record = match extract_at(&name, &path) {
                Ok(record) => record,
                Err(e) => {
                    self.report(err, &path.to_string_lossy(), &e)?;
                    summary.failures += 1;
                    continue;
                }
            };

            if let Err(e) = collection.append(record) {
                self.write_diagnostic(err, &format!("{}: {}", dir, e))?;
                summary.failures += 1;
                break;
            }
        }

        collection.sort_by_name_ci();
        debug!(dir, entries = collection.len(), "collected directory");
        Ok(collection)
    }

    /// Report an argument that could not be listed
    fn report<E: Write>(&self, err: &mut E, arg: &str, error: &LslError) -> io::Result<()> {
        let reason = match error {
            LslError::NotAccessible { source, .. } => source.to_string(),
            other => other.to_string(),
        };
        self.write_diagnostic(err, &format!("cannot access '{}': {}", arg, reason))
    }

    fn write_diagnostic<E: Write>(&self, err: &mut E, message: &str) -> io::Result<()> {
        writeln!(err, "{}: {}", self.config.program_name, message)
    }
}
