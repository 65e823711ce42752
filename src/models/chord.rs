//! Chord symbols: a root pitch class plus a seventh-chord quality.
//!
//! Symbols are written root first, then the quality suffix ("Cmaj7", "C#m7", "F#7").
//! Only the 36 combinations of [`NOTE_NAMES`] and [`ChordQuality`] exist, so parsing
//! a symbol doubles as catalog validation.

use crate::error::DrillError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Chromatic cycle starting at C, sharp spellings only
pub const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Semitone index into [`NOTE_NAMES`] (0 = C, 11 = B)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PitchClass(u8);

impl PitchClass {
    pub fn new(semitone: u8) -> Self {
        Self(semitone % 12)
    }

    pub fn all() -> impl Iterator<Item = PitchClass> {
        (0..12u8).map(PitchClass)
    }

    pub fn name(self) -> &'static str {
        NOTE_NAMES[self.0 as usize]
    }

    pub fn transpose(self, semitones: u8) -> Self {
        Self::new(self.0 + semitones % 12)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChordQuality {
    Major7,
    Minor7,
    Dominant7,
}

impl ChordQuality {
    pub const ALL: [ChordQuality; 3] = [
        ChordQuality::Major7,
        ChordQuality::Minor7,
        ChordQuality::Dominant7,
    ];

    pub fn suffix(self) -> &'static str {
        match self {
            ChordQuality::Major7 => "maj7",
            ChordQuality::Minor7 => "m7",
            ChordQuality::Dominant7 => "7",
        }
    }

    /// Semitone offsets from the root: root, third, fifth, seventh
    pub fn intervals(self) -> [u8; 4] {
        match self {
            ChordQuality::Major7 => [0, 4, 7, 11],
            ChordQuality::Minor7 => [0, 3, 7, 10],
            ChordQuality::Dominant7 => [0, 4, 7, 10],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ChordSymbol {
    root: PitchClass,
    quality: ChordQuality,
}

impl ChordSymbol {
    pub fn new(root: PitchClass, quality: ChordQuality) -> Self {
        Self { root, quality }
    }

    pub fn root(&self) -> PitchClass {
        self.root
    }

    pub fn quality(&self) -> ChordQuality {
        self.quality
    }

    /// Note names of the chord, root first
    pub fn spelling(&self) -> [&'static str; 4] {
        self.quality
            .intervals()
            .map(|offset| self.root.transpose(offset).name())
    }
}

impl fmt::Display for ChordSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root.name(), self.quality.suffix())
    }
}

impl FromStr for ChordSymbol {
    type Err = DrillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Two-character roots ("C#") must be tried before their natural ("C")
        // or "C#m7" would read as C with suffix "#m7".
        let root = PitchClass::all()
            .filter(|pc| s.starts_with(pc.name()))
            .max_by_key(|pc| pc.name().len())
            .ok_or_else(|| DrillError::InvalidChordSymbol(s.to_string()))?;

        let rest = &s[root.name().len()..];
        let quality = ChordQuality::ALL
            .into_iter()
            .find(|q| q.suffix() == rest)
            .ok_or_else(|| DrillError::InvalidChordSymbol(s.to_string()))?;

        Ok(Self { root, quality })
    }
}

impl TryFrom<String> for ChordSymbol {
    type Error = DrillError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ChordSymbol> for String {
    fn from(symbol: ChordSymbol) -> Self {
        symbol.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_symbols() {
        let c = PitchClass::new(0);
        let f_sharp = PitchClass::new(6);

        assert_eq!(ChordSymbol::new(c, ChordQuality::Major7).to_string(), "Cmaj7");
        assert_eq!(ChordSymbol::new(f_sharp, ChordQuality::Dominant7).to_string(), "F#7");
        assert_eq!(ChordSymbol::new(PitchClass::new(1), ChordQuality::Minor7).to_string(), "C#m7");
    }

    #[test]
    fn test_parse_prefers_sharp_root() {
        let symbol: ChordSymbol = "C#m7".parse().unwrap();
        assert_eq!(symbol.root(), PitchClass::new(1));
        assert_eq!(symbol.quality(), ChordQuality::Minor7);

        let symbol: ChordSymbol = "Cmaj7".parse().unwrap();
        assert_eq!(symbol.root(), PitchClass::new(0));
        assert_eq!(symbol.quality(), ChordQuality::Major7);
    }

    #[test]
    fn test_parse_rejects_unknown_symbols() {
        for bad in ["", "H7", "Cm", "CMaj7", "Cmaj7 ", "Dbm7", "7", "Cdim7"] {
            let err = bad.parse::<ChordSymbol>().unwrap_err();
            assert!(
                matches!(err, DrillError::InvalidChordSymbol(ref s) if s == bad),
                "expected rejection of {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_spelling_wraps_around_octave() {
        let b_maj7: ChordSymbol = "Bmaj7".parse().unwrap();
        assert_eq!(b_maj7.spelling(), ["B", "D#", "F#", "A#"]);

        let a_sharp_7: ChordSymbol = "A#7".parse().unwrap();
        assert_eq!(a_sharp_7.spelling(), ["A#", "D", "F", "G#"]);

        let d_m7: ChordSymbol = "Dm7".parse().unwrap();
        assert_eq!(d_m7.spelling(), ["D", "F", "A", "C"]);
    }

    #[test]
    fn test_serde_uses_symbol_string() {
        let symbol: ChordSymbol = "G#m7".parse().unwrap();
        let json = serde_json::to_string(&symbol).unwrap();
        assert_eq!(json, "\"G#m7\"");

        let parsed: ChordSymbol = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, symbol);

        assert!(serde_json::from_str::<ChordSymbol>("\"Gb7\"").is_err());
    }
}
