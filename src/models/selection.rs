//! Chooses the chord a session presents next.

use super::{ChordCatalog, ChordSymbol};
use crate::database::ReviewStore;
use crate::error::Result;
use chrono::{DateTime, Utc};
use rand::Rng;

/// Returns a random due chord, or a random catalog chord when nothing is due.
///
/// The fallback draws from the whole catalog, reviewed or not, so a session
/// always has something to show.
pub fn pick_next<R: Rng + ?Sized>(
    store: &ReviewStore,
    catalog: &ChordCatalog,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Result<ChordSymbol> {
    if let Some(due) = store.select_due(now, rng)? {
        return Ok(due);
    }

    let fallback = catalog.random_symbol(rng);
    log::debug!("Nothing due, falling back to {}", fallback);
    Ok(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScheduleRecord;
    use chrono::{Duration, TimeZone};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_empty_store_falls_back_to_catalog() {
        let store = ReviewStore::open_in_memory().unwrap();
        let catalog = ChordCatalog::generate();
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..50 {
            let picked = pick_next(&store, &catalog, t0(), &mut rng).unwrap();
            assert!(catalog.contains(&picked));
            assert_eq!(store.get(&picked).unwrap(), None);
        }
    }

    #[test]
    fn test_due_chord_wins_over_fallback() {
        let store = ReviewStore::open_in_memory().unwrap();
        let catalog = ChordCatalog::generate();
        let due: ChordSymbol = "D#m7".parse().unwrap();
        store
            .upsert(&ScheduleRecord {
                chord_symbol: due,
                next_review: t0() - Duration::minutes(1),
                interval: 1,
            })
            .unwrap();

        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            assert_eq!(pick_next(&store, &catalog, t0(), &mut rng).unwrap(), due);
        }
    }

    #[test]
    fn test_not_yet_due_chord_only_reachable_by_fallback() {
        let store = ReviewStore::open_in_memory().unwrap();
        let catalog = ChordCatalog::generate();
        store
            .upsert(&ScheduleRecord {
                chord_symbol: "Cmaj7".parse().unwrap(),
                next_review: t0() + Duration::minutes(8),
                interval: 8,
            })
            .unwrap();

        assert_eq!(store.select_due(t0(), &mut StdRng::seed_from_u64(0)).unwrap(), None);

        let mut rng = StdRng::seed_from_u64(5);
        let picked = pick_next(&store, &catalog, t0(), &mut rng).unwrap();
        assert!(catalog.contains(&picked));
    }
}
