use std::fmt;

use crate::error::FretError;

/// Number of pitch classes in the chromatic ring
pub const PITCH_CLASSES: u8 = 12;

/// Pitch classes of the chromatic scale, anchored at A
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteName {
    A,
    ASharp,
    B,
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
}

impl NoteName {
    /// Steps above A within the chromatic ring (A=0, G#=11)
    pub fn pitch_class(self) -> u8 {
        match self {
            NoteName::A => 0,
            NoteName::ASharp => 1,
            NoteName::B => 2,
            NoteName::C => 3,
            NoteName::CSharp => 4,
            NoteName::D => 5,
            NoteName::DSharp => 6,
            NoteName::E => 7,
            NoteName::F => 8,
            NoteName::FSharp => 9,
            NoteName::G => 10,
            NoteName::GSharp => 11,
        }
    }

    /// Ascending semitones from `open` up to `self`, wrapped into one octave
    pub fn semitones_above(self, open: NoteName) -> u8 {
        let diff = self.pitch_class() as i16 - open.pitch_class() as i16;
        diff.rem_euclid(PITCH_CLASSES as i16) as u8
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NoteName::A => "A",
            NoteName::ASharp => "A#",
            NoteName::B => "B",
            NoteName::C => "C",
            NoteName::CSharp => "C#",
            NoteName::D => "D",
            NoteName::DSharp => "D#",
            NoteName::E => "E",
            NoteName::F => "F",
            NoteName::FSharp => "F#",
            NoteName::G => "G",
            NoteName::GSharp => "G#",
        };
        write!(f, "{}", name)
    }
}

/// Every accepted spelling. Sharps and flats share a pitch class.
pub static NOTE_TABLE: [(&str, NoteName); 17] = [
    ("A", NoteName::A),
    ("A#", NoteName::ASharp),
    ("Bb", NoteName::ASharp),
    ("B", NoteName::B),
    ("C", NoteName::C),
    ("C#", NoteName::CSharp),
    ("Db", NoteName::CSharp),
    ("D", NoteName::D),
    ("D#", NoteName::DSharp),
    ("Eb", NoteName::DSharp),
    ("E", NoteName::E),
    ("F", NoteName::F),
    ("F#", NoteName::FSharp),
    ("Gb", NoteName::FSharp),
    ("G", NoteName::G),
    ("G#", NoteName::GSharp),
    ("Ab", NoteName::GSharp),
];

/// Resolve a spelling to its pitch class.
///
/// The match is exact: case-sensitive, no trimming, no normalisation of
/// accidentals. Anything outside `NOTE_TABLE` is an unknown note.
pub fn lookup(name: &str) -> Result<NoteName, FretError> {
    NOTE_TABLE
        .iter()
        .find(|(spelling, _)| *spelling == name)
        .map(|&(_, note)| note)
        .ok_or_else(|| FretError::UnknownNote(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_and_top() {
        assert_eq!(lookup("A").unwrap().pitch_class(), 0);
        assert_eq!(lookup("G#").unwrap().pitch_class(), 11);
        assert_eq!(lookup("G").unwrap().pitch_class(), 10);
    }

    #[test]
    fn test_aliases_share_pitch_class() {
        let pairs = [("A#", "Bb"), ("C#", "Db"), ("D#", "Eb"), ("F#", "Gb"), ("G#", "Ab")];
        for (sharp, flat) in pairs {
            assert_eq!(lookup(sharp), lookup(flat), "{} vs {}", sharp, flat);
        }
    }

    #[test]
    fn test_table_covers_every_pitch_class() {
        let mut seen = [false; PITCH_CLASSES as usize];
        for (_, note) in NOTE_TABLE.iter() {
            seen[note.pitch_class() as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_lookup_is_exact() {
        for bad in ["H", "a", "bb", " A", "A ", "A##", "B#", "Cb", "E#", "Fb", "Abb", ""] {
            assert_eq!(
                lookup(bad),
                Err(FretError::UnknownNote(bad.to_string())),
                "{:?} should not resolve",
                bad
            );
        }
    }

    #[test]
    fn test_display_uses_sharps() {
        assert_eq!(lookup("Bb").unwrap().to_string(), "A#");
        assert_eq!(lookup("E").unwrap().to_string(), "E");
    }

    #[test]
    fn test_semitones_above_wraps() {
        assert_eq!(NoteName::C.semitones_above(NoteName::G), 5);
        assert_eq!(NoteName::G.semitones_above(NoteName::C), 7);
        assert_eq!(NoteName::E.semitones_above(NoteName::E), 0);
    }
}
