//! Owned drill handle used by session drivers.
//! Bundles the open review store, the chord catalog and a time source.

use super::scheduler::next_state;
use super::selection::pick_next;
use super::{ChordCatalog, ChordSymbol, ProgressStats, ScheduleRecord};
use crate::config::Config;
use crate::database::ReviewStore;
use crate::error::Result;
use chrono::{DateTime, Utc};
use rand::Rng;

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock in UTC
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

pub struct ChordDrill<C: Clock = SystemClock> {
    store: ReviewStore,
    catalog: ChordCatalog,
    clock: C,
}

impl<C: Clock> ChordDrill<C> {
    pub fn open(config: &Config, clock: C) -> Result<Self> {
        let store = ReviewStore::open(&config.db_path)?;
        Ok(Self::with_store(store, clock))
    }

    pub fn with_store(store: ReviewStore, clock: C) -> Self {
        Self {
            store,
            catalog: ChordCatalog::generate(),
            clock,
        }
    }

    pub fn store(&self) -> &ReviewStore {
        &self.store
    }

    pub fn catalog(&self) -> &ChordCatalog {
        &self.catalog
    }

    /// Next chord to present: a due chord if any, otherwise any catalog chord
    pub fn pick_next<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<ChordSymbol> {
        pick_next(&self.store, &self.catalog, self.clock.now(), rng)
    }

    /// Reschedules a chord after the user answered it and persists the result.
    /// Creates the chord's record on its first review.
    pub fn record_result(&self, chord_symbol: ChordSymbol, correct: bool) -> Result<ScheduleRecord> {
        let prior = self.store.get(&chord_symbol)?;
        let record = next_state(
            chord_symbol,
            prior.map(|r| r.interval),
            correct,
            self.clock.now(),
        );
        self.store.upsert(&record)?;
        Ok(record)
    }

    pub fn spelling(&self, chord_symbol: &ChordSymbol) -> [&'static str; 4] {
        self.catalog.spelling(chord_symbol)
    }

    pub fn stats(&self) -> Result<ProgressStats> {
        self.store.stats(self.clock.now())
    }

    pub fn close(self) -> Result<()> {
        self.store.close()
    }
}
