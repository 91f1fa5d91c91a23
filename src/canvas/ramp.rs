//! Intensity ramp used to render ink levels as characters

/// Highest ink level a cell can hold
pub const MAX_INK: u8 = 4;

/// Characters for ink levels `0..=MAX_INK`, emptiest first
pub const RAMP: [char; MAX_INK as usize + 1] = [' ', '░', '▒', '▓', '█'];

/// Ink added to the cell a path point lands in
pub const POINT_INK: u8 = 2;

/// Ink added to each 4-neighbour of a path point
pub const BLEED_INK: u8 = 1;

/// Ink added to every cell covered by a disk
pub const DISK_INK: u8 = 2;

/// Character for an ink level. Levels above `MAX_INK` render as full.
#[inline]
pub fn glyph(level: u8) -> char {
    RAMP[usize::from(level.min(MAX_INK))]
}

/// Inverse of [`glyph`], for inspecting rendered output
pub fn level_of(ch: char) -> Option<u8> {
    RAMP.iter().position(|&c| c == ch).map(|i| i as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_bounds() {
        assert_eq!(glyph(0), ' ');
        assert_eq!(glyph(MAX_INK), '█');
        assert_eq!(glyph(200), '█');
    }

    #[test]
    fn test_level_of() {
        for level in 0..=MAX_INK {
            assert_eq!(level_of(glyph(level)), Some(level));
        }
        assert_eq!(level_of('x'), None);
    }
}
