use thiserror::Error;

#[derive(Error, Debug)]
pub enum DielineError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, DielineError>;

/// Measurement unit for every dimension field.
///
/// Purely a label: switching the unit never converts stored values. The
/// only place the unit is interpreted numerically is when emitting PDF
/// coordinates, which are always in points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Unit {
    #[default]
    Mm,
    Cm,
    Inch,
}

impl Unit {
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Mm => "mm",
            Unit::Cm => "cm",
            Unit::Inch => "in",
        }
    }

    /// PDF points per one unit (1 inch = 72 points, 1 inch = 25.4 mm)
    pub fn points_per_unit(self) -> f32 {
        match self {
            Unit::Mm => 72.0 / 25.4,
            Unit::Cm => 720.0 / 25.4,
            Unit::Inch => 72.0,
        }
    }
}

/// The six physical inputs describing a hardcover case, plus the unit tag.
///
/// No field is inherently bounded. Zero or negative widths produce
/// degenerate layouts downstream; nothing here rejects them — input
/// validation belongs to the editing layer.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoverDimensions {
    pub unit: Unit,
    /// Width of each cover board (front and back are identical)
    pub board_width: f32,
    /// Height of each cover board
    pub board_height: f32,
    /// Width of the spine panel
    pub spine_width: f32,
    /// Gap between each board and the spine (both gaps equal)
    pub hinge_gap: f32,
    /// Wrap-around margin outside the board region, all four sides
    pub turn_in: f32,
    /// Extra print margin outside the trim box; zero disables bleed drawing
    pub bleed: f32,
}

impl Default for CoverDimensions {
    fn default() -> Self {
        // A5 book block with standard overshoot and turn-in
        Self {
            unit: Unit::Mm,
            board_width: 153.0,
            board_height: 216.0,
            spine_width: 20.0,
            hinge_gap: 7.0,
            turn_in: 18.0,
            bleed: 0.0,
        }
    }
}

/// A point in trim-box space (origin at the trim top-left, y down)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A rectangle in trim-box space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (top edge)
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge y coordinate
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Center x coordinate
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Center y coordinate
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}
