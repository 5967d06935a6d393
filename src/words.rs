//! Fixed vocabulary and obstacle color palette.
//!
//! Words are stored uppercase; typed input is uppercased before matching so
//! comparisons stay byte-for-byte exact.

/// Magic words an obstacle can carry
pub const WORDS: &[&str] = &[
    "FIRE", "ICE", "WIND", "ROCK", "BOLT", "HEAL", "OPEN",
    "QUAKE", "STORM", "FROST", "BLAZE", "SMITE", "GUARD",
    "UNLOCK", "BANISH", "QUENCH", "BRIDGE", "SILENCE",
    "LEVITATE", "EXPLODE", "SHATTER", "PETRIFY", "TELEPORT",
    "INFERNO", "BLIZZARD", "TEMPEST", "METEOR", "PURIFY",
];

/// CSS colors obstacles are tinted with
pub const PALETTE: &[&str] = &[
    "#FF4500", "#00BFFF", "#32CD32", "#FFD700", "#FF69B4", "#8A2BE2",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_are_uppercase_and_trimmed() {
        for word in WORDS {
            assert_eq!(*word, word.trim());
            assert_eq!(*word, word.to_uppercase());
        }
    }

    #[test]
    fn palette_entries_are_hex_colors() {
        for color in PALETTE {
            assert!(color.starts_with('#') && color.len() == 7);
        }
    }
}
