use serde::{Deserialize, Serialize};

pub type RegionId = u32;
pub type PaletteIndex = u8;

/// Number of colors a region can be painted with.
pub const PALETTE_SIZE: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Vec2 { x, y }
    }
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Vec2 {
    fn from((x, y): (f64, f64)) -> Self {
        Vec2 { x, y }
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;
    fn add(self, o: Vec2) -> Vec2 {
        Vec2::new(self.x + o.x, self.y + o.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, o: Vec2) -> Vec2 {
        Vec2::new(self.x - o.x, self.y - o.y)
    }
}

impl std::ops::Mul<f64> for Vec2 {
    type Output = Vec2;
    fn mul(self, s: f64) -> Vec2 {
        Vec2::new(self.x * s, self.y * s)
    }
}

impl std::ops::AddAssign for Vec2 {
    fn add_assign(&mut self, o: Vec2) {
        self.x += o.x;
        self.y += o.y;
    }
}

/// What a click currently paints with. Selecting a color leaves eraser mode,
/// selecting the eraser drops the color selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Brush {
    Paint(PaletteIndex),
    Eraser,
}

impl Default for Brush {
    fn default() -> Self {
        Brush::Paint(0)
    }
}

impl Brush {
    /// Color a region ends up with after being clicked with this brush.
    /// `None` for an out-of-range palette index.
    pub fn target(self) -> Option<Option<PaletteIndex>> {
        match self {
            Brush::Paint(i) if (i as usize) < PALETTE_SIZE => Some(Some(i)),
            Brush::Paint(_) => None,
            Brush::Eraser => Some(None),
        }
    }

    /// Flat encoding used by snapshots: palette index, or -1 for the eraser.
    pub fn selected_color(self) -> i32 {
        match self {
            Brush::Paint(i) => i32::from(i),
            Brush::Eraser => -1,
        }
    }

    pub fn is_eraser(self) -> bool {
        matches!(self, Brush::Eraser)
    }

    pub fn from_parts(selected_color: i32, eraser_mode: bool) -> Brush {
        if eraser_mode {
            return Brush::Eraser;
        }
        match u8::try_from(selected_color) {
            Ok(i) if (i as usize) < PALETTE_SIZE => Brush::Paint(i),
            _ => Brush::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    pub complete: bool,
    pub valid: bool,
}
