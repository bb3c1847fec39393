/// A rectangular buffer of packed pixels, row-major with the origin top-left.
///
/// The surface is owned by whoever presents it and lent mutably to the
/// renderer for one frame at a time. All drawing is clipped to the bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Surface {
    /// Create a surface with every pixel set to 0.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Read-only access to the pixels, `width * height` long.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Pixel at `(x, y)`, or `None` outside the surface.
    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Overwrite every pixel.
    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    /// Fill a `w x h` rectangle whose top-left corner is `(x, y)`.
    ///
    /// The origin may be negative and the size may run past the edges; only
    /// the part that overlaps the surface is written.
    pub fn fill_rect(&mut self, x: i64, y: i64, w: u64, h: u64, color: u32) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = x.saturating_add_unsigned(w).min(self.width as i64);
        let y1 = y.saturating_add_unsigned(h).min(self.height as i64);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let stride = self.width as usize;
        let (x0, x1) = (x0 as usize, x1 as usize);
        for row in y0 as usize..y1 as usize {
            let start = row * stride;
            self.pixels[start + x0..start + x1].fill(color);
        }
    }

    /// Set a single pixel; writes outside the surface are dropped.
    #[inline]
    pub fn put_pixel(&mut self, x: i64, y: i64, color: u32) {
        self.fill_rect(x, y, 1, 1, color);
    }
}
