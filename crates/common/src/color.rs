use serde::{Deserialize, Serialize};

/// Pack four channel bytes into one pixel, red in the lowest byte.
pub const fn pack(r: u8, g: u8, b: u8, a: u8) -> u32 {
    (r as u32) | (g as u32) << 8 | (b as u32) << 16 | (a as u32) << 24
}

/// Pack with alpha left at 0.
pub const fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    pack(r, g, b, 0)
}

/// Split a packed pixel back into `(r, g, b, a)`.
pub const fn unpack(pixel: u32) -> (u8, u8, u8, u8) {
    (
        pixel as u8,
        (pixel >> 8) as u8,
        (pixel >> 16) as u8,
        (pixel >> 24) as u8,
    )
}

/// A color as separate channels, the form used in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default)]
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Wall tint on both the minimap and the 3D view.
    pub const WALL: Self = Self::rgb(0, 128, 255);
    /// Player marker on the minimap.
    pub const MARKER: Self = Self::rgb(255, 0, 0);
    /// Ray path pixels on the minimap.
    pub const RAY_TRACE: Self = Self::rgb(160, 160, 160);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0 }
    }

    pub const fn pack(self) -> u32 {
        pack(self.r, self.g, self.b, self.a)
    }

    pub const fn from_pixel(pixel: u32) -> Self {
        let (r, g, b, a) = unpack(pixel);
        Self { r, g, b, a }
    }
}

impl From<Rgba> for u32 {
    fn from(c: Rgba) -> u32 {
        c.pack()
    }
}
