//! Static set of drillable chords: every root in the chromatic cycle with every quality
use super::chord::{ChordQuality, ChordSymbol, PitchClass};
use rand::Rng;
use rand::seq::SliceRandom;

#[derive(Clone, Debug)]
pub struct ChordCatalog {
    symbols: Vec<ChordSymbol>,
}

impl ChordCatalog {
    /// Builds the 36-entry catalog, ordered by root then quality
    pub fn generate() -> Self {
        let symbols = PitchClass::all()
            .flat_map(|root| {
                ChordQuality::ALL
                    .into_iter()
                    .map(move |quality| ChordSymbol::new(root, quality))
            })
            .collect();

        Self { symbols }
    }

    pub fn list_chord_symbols(&self) -> &[ChordSymbol] {
        &self.symbols
    }

    pub fn contains(&self, symbol: &ChordSymbol) -> bool {
        self.symbols.contains(symbol)
    }

    pub fn spelling(&self, symbol: &ChordSymbol) -> [&'static str; 4] {
        symbol.spelling()
    }

    pub fn random_symbol<R: Rng + ?Sized>(&self, rng: &mut R) -> ChordSymbol {
        // The catalog is never empty, see generate()
        self.symbols
            .choose(rng)
            .copied()
            .unwrap_or(ChordSymbol::new(PitchClass::new(0), ChordQuality::Major7))
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Default for ChordCatalog {
    fn default() -> Self {
        Self::generate()
    }
}
