use serde::{Deserialize, Serialize};

use crate::model::{Color, PaletteIndex, PALETTE_SIZE};

pub const DEFAULT_COLORS: [Color; PALETTE_SIZE] = [
    Color::rgb(255, 99, 71),   // tomato
    Color::rgb(100, 149, 237), // cornflower
    Color::rgb(255, 215, 0),   // gold
    Color::rgb(50, 205, 50),   // lime
];
pub const UNCOLORED: Color = Color::rgb(200, 200, 255);
pub const BORDER: Color = Color::rgb(0, 0, 0);

/// The four fill colors plus the colors used for blank regions and borders.
///
/// Immutable once built; customization produces a new palette that the
/// session swaps in as a whole.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub colors: [Color; PALETTE_SIZE],
    pub uncolored: Color,
    pub border: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            colors: DEFAULT_COLORS,
            uncolored: UNCOLORED,
            border: BORDER,
        }
    }
}

impl Palette {
    /// Copy with slot `index` replaced; `None` when the index is out of range.
    pub fn with_color(&self, index: PaletteIndex, color: Color) -> Option<Palette> {
        let mut next = *self;
        *next.colors.get_mut(index as usize)? = color;
        Some(next)
    }

    /// Copy with the fill colors back at their defaults.
    pub fn reset(&self) -> Palette {
        Palette {
            colors: DEFAULT_COLORS,
            ..*self
        }
    }

    pub fn get(&self, index: PaletteIndex) -> Option<Color> {
        self.colors.get(index as usize).copied()
    }

    /// Fill for a region color slot.
    pub fn fill(&self, slot: Option<PaletteIndex>) -> Color {
        slot.and_then(|i| self.get(i)).unwrap_or(self.uncolored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customization_returns_new_palette() {
        let base = Palette::default();
        let custom = base.with_color(2, Color::rgb(1, 2, 3)).unwrap();
        assert_eq!(base.get(2), Some(DEFAULT_COLORS[2]));
        assert_eq!(custom.get(2), Some(Color::rgb(1, 2, 3)));
        assert!(base.with_color(4, Color::rgb(0, 0, 0)).is_none());
        assert_eq!(custom.reset(), base);
    }

    #[test]
    fn fill_falls_back_to_uncolored() {
        let p = Palette::default();
        assert_eq!(p.fill(None), UNCOLORED);
        assert_eq!(p.fill(Some(0)), DEFAULT_COLORS[0]);
        assert_eq!(p.fill(Some(9)), UNCOLORED);
    }
}
