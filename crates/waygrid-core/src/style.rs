//! Visual styling: [`Color`] and the cell-state [`Palette`].

use crate::cell::CellState;

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// An RGB colour packed into a `u32` (0x00RRGGBB).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Self = Self::from_rgb(0, 0, 0);
    pub const WHITE: Self = Self::from_rgb(255, 255, 255);

    /// Construct from individual RGB components.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// Red component.
    #[inline]
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    /// Green component.
    #[inline]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    /// Blue component.
    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// Mapping from [`CellState`] to render colour.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    pub empty: Color,
    pub wall: Color,
    pub path: Color,
    pub frontier: Color,
    pub visited: Color,
}

impl Palette {
    /// Colour for a given cell state.
    #[inline]
    pub const fn color_for(&self, state: CellState) -> Color {
        match state {
            CellState::Empty => self.empty,
            CellState::Wall => self.wall,
            CellState::Path => self.path,
            CellState::Frontier => self.frontier,
            CellState::Visited => self.visited,
        }
    }
}

impl Default for Palette {
    /// White background, black walls, red path, green frontier, blue visited.
    fn default() -> Self {
        Self {
            empty: Color::WHITE,
            wall: Color::BLACK,
            path: Color::from_rgb(255, 0, 0),
            frontier: Color::from_rgb(0, 255, 0),
            visited: Color::from_rgb(0, 0, 255),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_round_trip() {
        let c = Color::from_rgb(0xAB, 0xCD, 0xEF);
        assert_eq!(c.r(), 0xAB);
        assert_eq!(c.g(), 0xCD);
        assert_eq!(c.b(), 0xEF);
    }

    #[test]
    fn palette_covers_every_state() {
        let p = Palette::default();
        assert_eq!(p.color_for(CellState::Empty), Color::WHITE);
        assert_eq!(p.color_for(CellState::Wall), Color::BLACK);
        assert_eq!(p.color_for(CellState::Path), Color::from_rgb(255, 0, 0));
        assert_eq!(p.color_for(CellState::Frontier), Color::from_rgb(0, 255, 0));
        assert_eq!(p.color_for(CellState::Visited), Color::from_rgb(0, 0, 255));
    }
}
