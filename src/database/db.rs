//! SQLite persistence for chord review schedules
//!
//! One row per reviewed chord in `chord_progress`. Rows are replaced on every review
//! and never deleted. Timestamps are stored as fixed-width UTC text with nanoseconds
//! (`YYYY-MM-DDTHH:MM:SS.fffffffffZ`) so that string comparison in SQL matches time order.

use crate::error::{DrillError, Result};
use crate::models::{ChordSymbol, ProgressStats, ScheduleRecord};
use chrono::{DateTime, Datelike, NaiveDateTime, Utc};
use rand::Rng;
use rand::seq::SliceRandom;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.9fZ";

/// Bounds of the fixed-width format; times outside are clamped to these
const EARLIEST_STORABLE: &str = "0000-01-01T00:00:00.000000000Z";
const LATEST_STORABLE: &str = "9999-12-31T23:59:59.999999999Z";

/// Owned handle to the review database. Acquire with [`ReviewStore::open`],
/// release with [`ReviewStore::close`].
pub struct ReviewStore {
    conn: Connection,
}

impl ReviewStore {
    /// Opens (or creates) the database file and ensures the schema exists
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::info!("Opening review store at {}", path.display());
        let conn = Connection::open(path).map_err(DrillError::StoreInit)?;
        let journal_mode: String = conn
            .query_row("PRAGMA journal_mode=WAL", [], |row| row.get(0))
            .map_err(DrillError::StoreInit)?;
        log::debug!("Journal mode: {}", journal_mode);
        Self::init(conn)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(DrillError::StoreInit)?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS chord_progress (
                chord_symbol TEXT PRIMARY KEY,
                next_review TEXT NOT NULL,
                interval INTEGER NOT NULL
            )",
            (),
        )
        .map_err(DrillError::StoreInit)?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_chord_progress_next_review
             ON chord_progress(next_review)",
            (),
        )
        .map_err(DrillError::StoreInit)?;

        Ok(Self { conn })
    }

    /// Closes the connection, surfacing any error SQLite reports on shutdown
    pub fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_, e)| DrillError::StoreIo(e))?;
        log::info!("Review store closed");
        Ok(())
    }

    /// Returns the record for a chord, or `None` if it was never reviewed
    pub fn get(&self, chord_symbol: &ChordSymbol) -> Result<Option<ScheduleRecord>> {
        let row: Option<(String, String, i64)> = self
            .conn
            .query_row(
                "SELECT chord_symbol, next_review, interval
                 FROM chord_progress WHERE chord_symbol = ?1",
                params![chord_symbol.to_string()],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .optional()
            .map_err(DrillError::StoreIo)?;

        row.map(record_from_row).transpose()
    }

    /// Inserts the record or replaces the existing one for the same chord.
    /// Runs in autocommit mode, so the write is committed when this returns.
    /// Records with an interval below 1 are rejected and nothing is written.
    pub fn upsert(&self, record: &ScheduleRecord) -> Result<()> {
        check_interval(record)?;
        write_record(&self.conn, record)
    }

    /// Upserts every record in one transaction: either all are written or none.
    /// Later records for the same chord replace earlier ones.
    pub fn upsert_all(&self, records: &[ScheduleRecord]) -> Result<()> {
        records.iter().try_for_each(check_interval)?;

        let tx = self
            .conn
            .unchecked_transaction()
            .map_err(DrillError::StoreIo)?;
        for record in records {
            write_record(&tx, record)?;
        }
        tx.commit().map_err(DrillError::StoreIo)
    }

    /// All chords whose next review is at or before `now`
    pub fn due_chords(&self, now: DateTime<Utc>) -> Result<Vec<ChordSymbol>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT chord_symbol FROM chord_progress
                 WHERE next_review <= ?1
                 ORDER BY chord_symbol",
            )
            .map_err(DrillError::StoreIo)?;

        let symbols = stmt
            .query_map(params![format_timestamp(now)], |row| row.get::<_, String>(0))
            .map_err(DrillError::StoreIo)?
            .collect::<rusqlite::Result<Vec<String>>>()
            .map_err(DrillError::StoreIo)?;

        symbols.iter().map(|s| s.parse()).collect()
    }

    /// Picks one due chord uniformly at random, or `None` if nothing is due
    pub fn select_due<R: Rng + ?Sized>(
        &self,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Result<Option<ChordSymbol>> {
        let due = self.due_chords(now)?;
        log::debug!("{} chords due", due.len());
        Ok(due.choose(rng).copied())
    }

    /// Every stored record, ordered by chord symbol
    pub fn records(&self) -> Result<Vec<ScheduleRecord>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT chord_symbol, next_review, interval
                 FROM chord_progress ORDER BY chord_symbol",
            )
            .map_err(DrillError::StoreIo)?;

        let rows = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))
            .map_err(DrillError::StoreIo)?
            .collect::<rusqlite::Result<Vec<(String, String, i64)>>>()
            .map_err(DrillError::StoreIo)?;

        rows.into_iter().map(record_from_row).collect()
    }

    pub fn stats(&self, now: DateTime<Utc>) -> Result<ProgressStats> {
        let (tracked, due): (i64, i64) = self
            .conn
            .query_row(
                "SELECT COUNT(*), COALESCE(SUM(next_review <= ?1), 0) FROM chord_progress",
                params![format_timestamp(now)],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .map_err(DrillError::StoreIo)?;

        Ok(ProgressStats {
            tracked: tracked as usize,
            due: due as usize,
        })
    }
}

fn check_interval(record: &ScheduleRecord) -> Result<()> {
    if record.interval < 1 {
        return Err(DrillError::CorruptRecord {
            chord_symbol: record.chord_symbol.to_string(),
            reason: format!("interval {} is out of range", record.interval),
        });
    }
    Ok(())
}

fn write_record(conn: &Connection, record: &ScheduleRecord) -> Result<()> {
    conn.execute(
        "INSERT INTO chord_progress (chord_symbol, next_review, interval)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(chord_symbol) DO UPDATE
         SET next_review = excluded.next_review, interval = excluded.interval",
        params![
            record.chord_symbol.to_string(),
            format_timestamp(record.next_review),
            i64::from(record.interval)
        ],
    )
    .map_err(DrillError::StoreIo)?;

    log::debug!(
        "Scheduled {} in {} min (next review {})",
        record.chord_symbol,
        record.interval,
        record.next_review
    );
    Ok(())
}

fn format_timestamp(time: DateTime<Utc>) -> String {
    match time.year() {
        year if year > 9999 => LATEST_STORABLE.to_string(),
        year if year < 0 => EARLIEST_STORABLE.to_string(),
        _ => time.format(TIMESTAMP_FORMAT).to_string(),
    }
}

fn parse_timestamp(chord_symbol: &str, value: &str) -> Result<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| DrillError::CorruptRecord {
            chord_symbol: chord_symbol.to_string(),
            reason: format!("bad next_review '{}': {}", value, e),
        })
}

fn record_from_row((symbol, next_review, interval): (String, String, i64)) -> Result<ScheduleRecord> {
    let chord_symbol: ChordSymbol = symbol.parse()?;
    let next_review = parse_timestamp(&symbol, &next_review)?;
    let interval = u32::try_from(interval)
        .ok()
        .filter(|i| *i >= 1)
        .ok_or_else(|| DrillError::CorruptRecord {
            chord_symbol: symbol.clone(),
            reason: format!("interval {} is out of range", interval),
        })?;

    Ok(ScheduleRecord {
        chord_symbol,
        next_review,
        interval,
    })
}
