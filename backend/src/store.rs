//! Flat-file vote store.
//!
//! The primary file is a comma separated table with an `ID,Vote` header and
//! one `<id>, <candidate>` row per vote. After every mutation the whole
//! primary is copied over the mirror. The copy is not linked to the write
//! that preceded it: a crash in between leaves the mirror one step behind.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;
use tracing::{debug, info};
use shared::models::{Candidate, StoredRow, VoterId};
use shared::tally::Tally;

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};

pub const HEADER: [&str; 2] = ["ID", "Vote"];

/// Prefix written before the candidate name on every data row.
const VOTE_PREFIX: char = ' ';

#[derive(Debug, Clone)]
pub struct Store {
    config: StoreConfig,
}

impl Store {
    /// A handle that has not touched the filesystem yet.
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Builds a handle and creates whichever of the two files is missing.
    pub fn open(config: StoreConfig) -> StoreResult<Self> {
        let store = Self::new(config);
        store.ensure_initialized()?;
        Ok(store)
    }

    pub fn data_file(&self) -> &Path {
        &self.config.data_file
    }

    pub fn backup_file(&self) -> &Path {
        &self.config.backup_file
    }

    /// An empty record file is treated like a missing one: appending to it
    /// would put the first vote where readers expect the header.
    pub fn ensure_initialized(&self) -> StoreResult<()> {
        if !self.has_header()? {
            self.write_header_only()?;
            info!("Created record file {}", self.data_file().display());
        }
        if !self.backup_file().is_file() {
            self.sync_mirror()?;
            info!("Created mirror file {}", self.backup_file().display());
        }
        Ok(())
    }

    /// `false` when some row already carries `id`. Rows with foreign vote
    /// values still count.
    pub fn is_unique(&self, id: impl AsRef<str>) -> StoreResult<bool> {
        let id = id.as_ref();
        let taken = self.rows()?.iter().any(|row| row.id == id);
        debug!("ID {} unique: {}", id, !taken);
        Ok(!taken)
    }

    /// Appends one row and resyncs the mirror. Uniqueness is the caller's
    /// job, see [`Store::is_unique`].
    pub fn record_vote(&self, id: &VoterId, candidate: Candidate) -> StoreResult<()> {
        // no `create`: appending to a missing file would produce a table without header
        let file = OpenOptions::new().append(true).open(self.data_file())?;
        let mut writer = csv_writer(file);
        let vote = format!("{VOTE_PREFIX}{candidate}");
        writer.write_record([id.as_str(), vote.as_str()])?;
        writer.flush()?;
        drop(writer);

        self.sync_mirror()?;
        info!("Recorded vote {} for {}", id, candidate);
        Ok(())
    }

    pub fn get_tally(&self) -> StoreResult<Tally> {
        let mut tally = Tally::new();
        let mut ignored = 0usize;
        for row in self.rows()? {
            if !tally.record_row(&row) {
                ignored += 1;
            }
        }
        if ignored > 0 {
            debug!("Tally skipped {} rows with unknown candidates", ignored);
        }
        Ok(tally)
    }

    pub fn reset(&self) -> StoreResult<()> {
        self.write_header_only()?;
        self.sync_mirror()?;
        info!("Reset record file {}", self.data_file().display());
        Ok(())
    }

    /// All data rows in insertion order. A missing record file reads as empty.
    pub fn rows(&self) -> StoreResult<Vec<StoredRow>> {
        let file = match File::open(self.data_file()) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Record file {} missing, reading as empty", self.data_file().display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        reader.records()
            .map(|result| -> StoreResult<StoredRow> {
                let record = result?;
                match (record.get(0), record.get(1), record.len()) {
                    (Some(id), Some(vote), 2) => Ok(StoredRow {
                        id: id.to_string(),
                        vote: vote.strip_prefix(VOTE_PREFIX).unwrap_or(vote).to_string(),
                    }),
                    (_, _, fields) => Err(StoreError::MalformedRow {
                        line: record.position().map_or(0, |p| p.line()),
                        fields,
                    }),
                }
            })
            .collect()
    }

    /// Whether the mirror currently holds the same bytes as the record file.
    pub fn mirror_in_sync(&self) -> StoreResult<bool> {
        let primary = fs::read(self.data_file())?;
        match fs::read(self.backup_file()) {
            Ok(mirror) => Ok(mirror == primary),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn has_header(&self) -> StoreResult<bool> {
        match fs::metadata(self.data_file()) {
            Ok(meta) => Ok(meta.is_file() && meta.len() > 0),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn write_header_only(&self) -> StoreResult<()> {
        let mut writer = csv_writer(File::create(self.data_file())?);
        writer.write_record(HEADER)?;
        writer.flush()?;
        Ok(())
    }

    fn sync_mirror(&self) -> StoreResult<()> {
        fs::copy(self.data_file(), self.backup_file())?;
        debug!("Mirrored {} to {}", self.data_file().display(), self.backup_file().display());
        Ok(())
    }
}

fn csv_writer<W: Write>(inner: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(inner)
}
