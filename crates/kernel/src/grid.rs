use std::fmt;

/// Width of the built-in map.
pub const DEFAULT_MAP_WIDTH: usize = 16;
/// Height of the built-in map.
pub const DEFAULT_MAP_HEIGHT: usize = 16;

const DEFAULT_MAP: &str = concat!(
    "0000222222220000",
    "1              0",
    "1      11111   0",
    "1     0        0",
    "0     0  1110000",
    "0     3        0",
    "0   10000      0",
    "0   0   11100  0",
    "0   0   0      0",
    "0   0   1  00000",
    "0       1      0",
    "2       1      0",
    "0       0      0",
    "0 0000000      0",
    "0              0",
    "0002222222200000",
);

/// Which kind of wall occupies a cell, taken from the digit in the map literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WallKind(pub u8);

impl WallKind {
    /// The map symbol for this kind.
    pub fn symbol(self) -> char {
        char::from(b'0' + self.0)
    }
}

/// Contents of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    Empty,
    Wall(WallKind),
}

impl TileKind {
    /// Parse a single map symbol: space is empty, a digit is a wall kind.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            ' ' => Some(Self::Empty),
            '0'..='9' => Some(Self::Wall(WallKind(symbol as u8 - b'0'))),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Empty => ' ',
            Self::Wall(kind) => kind.symbol(),
        }
    }

    pub fn is_wall(self) -> bool {
        is_wall(self)
    }
}

/// True for every kind except [`TileKind::Empty`].
pub fn is_wall(kind: TileKind) -> bool {
    !matches!(kind, TileKind::Empty)
}

/// Errors from building or querying a [`TileGrid`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    #[error("map literal has {actual} cells, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("invalid map symbol {symbol:?} at index {index}")]
    InvalidSymbol { symbol: char, index: usize },
    #[error("map row {row} has width {width}, expected {expected}")]
    RaggedRow {
        row: usize,
        width: usize,
        expected: usize,
    },
    #[error("map dimensions must be non-zero")]
    EmptyDimensions,
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: usize,
        height: usize,
    },
}

/// Fixed-size 2D grid of tiles, immutable once built.
///
/// Invariant: `cells.len() == width * height`, enforced by every constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    width: usize,
    height: usize,
    cells: Vec<TileKind>,
}

impl TileGrid {
    /// Build a grid from a row-major literal with no delimiters.
    ///
    /// The literal must hold exactly `width * height` symbols.
    pub fn from_literal(width: usize, height: usize, literal: &str) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyDimensions);
        }
        let expected = width * height;
        let actual = literal.chars().count();
        if actual != expected {
            return Err(GridError::LengthMismatch { expected, actual });
        }

        let cells = literal
            .chars()
            .enumerate()
            .map(|(index, symbol)| {
                TileKind::from_symbol(symbol).ok_or(GridError::InvalidSymbol { symbol, index })
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(width, height, "tile grid built");
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Build a grid from a map file's text: one row per line.
    pub fn from_rows(text: &str) -> Result<Self, GridError> {
        let rows: Vec<&str> = text
            .lines()
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();
        let width = rows.first().map_or(0, |r| r.chars().count());
        for (row, line) in rows.iter().enumerate() {
            let w = line.chars().count();
            if w != width {
                return Err(GridError::RaggedRow {
                    row,
                    width: w,
                    expected: width,
                });
            }
        }
        Self::from_literal(width, rows.len(), &rows.concat())
    }

    /// The built-in 16x16 map.
    pub fn default_map() -> Self {
        Self::from_literal(DEFAULT_MAP_WIDTH, DEFAULT_MAP_HEIGHT, DEFAULT_MAP)
            .unwrap_or_else(|e| unreachable!("built-in map is valid: {e}"))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> &[TileKind] {
        &self.cells
    }

    /// Tile at integer grid coordinates.
    pub fn at(&self, x: i64, y: i64) -> Result<TileKind, GridError> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.cells[y as usize * self.width + x as usize])
    }

    /// Tile under a world-space point, truncating each coordinate toward zero.
    pub fn at_world(&self, cx: f32, cy: f32) -> Result<TileKind, GridError> {
        if !cx.is_finite() || !cy.is_finite() {
            return Err(GridError::OutOfBounds {
                x: i64::MIN,
                y: i64::MIN,
                width: self.width,
                height: self.height,
            });
        }
        self.at(cx as i64, cy as i64)
    }

    /// Every wall cell as `(x, y, kind)`, row-major.
    pub fn walls(&self) -> impl Iterator<Item = (usize, usize, WallKind)> + '_ {
        self.cells.iter().enumerate().filter_map(|(i, tile)| match tile {
            TileKind::Wall(kind) => Some((i % self.width, i / self.width, *kind)),
            TileKind::Empty => None,
        })
    }

    pub fn wall_count(&self) -> usize {
        self.walls().count()
    }
}

impl Default for TileGrid {
    fn default() -> Self {
        Self::default_map()
    }
}

impl fmt::Display for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            let line: String = row.iter().map(|t| t.symbol()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
