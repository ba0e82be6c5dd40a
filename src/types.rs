//! Core types for ember-tui.
//!
//! These types define the foundation that everything builds on: geometry,
//! dimensions, flex style enums, colors, and the terminal cell the renderer
//! outputs.

// =============================================================================
// Geometry
// =============================================================================

/// A rectangle in terminal cells: origin plus size.
///
/// Frames assigned by the layout solver are parent-relative; the renderer
/// resolves absolute positions while painting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    /// The x coordinate one past the right edge.
    #[inline]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// The y coordinate one past the bottom edge.
    #[inline]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// The size of this rect.
    #[inline]
    pub const fn size(&self) -> Size {
        Size { width: self.width, height: self.height }
    }

    /// Check if a point is inside this rect.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Compute the intersection of two rects, if any.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());

        if x2 > x1 && y2 > y1 {
            Some(Rect { x: x1, y: y1, width: x2 - x1, height: y2 - y1 })
        } else {
            None
        }
    }
}

/// A width/height pair in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    /// The zero size. Returned by `PrototypeRegistry::measure` for
    /// identifiers with no registered prototype.
    pub const ZERO: Self = Self { width: 0, height: 0 };

    /// Create a new size.
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Check if both dimensions are zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.width == 0 && self.height == 0
    }
}

/// Per-edge spacing values (margin, padding).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Edges {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Edges {
    /// Zero spacing on all edges.
    pub const ZERO: Self = Self { top: 0, right: 0, bottom: 0, left: 0 };

    /// The same value on all four edges.
    pub const fn uniform(value: u16) -> Self {
        Self { top: value, right: value, bottom: value, left: value }
    }

    /// Top and bottom combined.
    #[inline]
    pub const fn vertical(&self) -> u16 {
        self.top.saturating_add(self.bottom)
    }

    /// Left and right combined.
    #[inline]
    pub const fn horizontal(&self) -> u16 {
        self.left.saturating_add(self.right)
    }
}

// =============================================================================
// Constraint - the input to a render pass
// =============================================================================

/// A constraining size for a render pass.
///
/// `None` on an axis means "size to content": the solver receives
/// max-content available space instead of a definite length. This replaces
/// the float "undefined" sentinel found in CSS-adjacent layout systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Constraint {
    pub width: Option<u16>,
    pub height: Option<u16>,
}

impl Constraint {
    /// Unconstrained on both axes: size to content.
    pub const NONE: Self = Self { width: None, height: None };

    /// Constrain both axes.
    pub const fn tight(width: u16, height: u16) -> Self {
        Self { width: Some(width), height: Some(height) }
    }

    /// Constrain the width, leave the height to content.
    ///
    /// This is the shape every prototype measurement uses: rows get the
    /// list's width and as much height as their content needs.
    pub const fn width(width: u16) -> Self {
        Self { width: Some(width), height: None }
    }
}

// =============================================================================
// Dimension
// =============================================================================

/// A dimension value that can be absolute or relative to the parent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Dimension {
    /// Auto-size based on content.
    #[default]
    Auto,
    /// Absolute size in terminal cells.
    Cells(u16),
    /// Percentage of parent size (0-100).
    Percent(f32),
}

impl From<u16> for Dimension {
    fn from(value: u16) -> Self {
        Self::Cells(value)
    }
}

// =============================================================================
// Flex enums
// =============================================================================

/// Flex direction for container layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlexDirection {
    #[default]
    Column,
    Row,
    ColumnReverse,
    RowReverse,
}

/// Flex wrap behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlexWrap {
    #[default]
    NoWrap,
    Wrap,
    WrapReverse,
}

/// Main axis alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JustifyContent {
    #[default]
    FlexStart,
    Center,
    FlexEnd,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

/// Cross axis alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignItems {
    #[default]
    Stretch,
    FlexStart,
    Center,
    FlexEnd,
    Baseline,
}

/// Item override for the parent's align-items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignSelf {
    /// Inherit from the parent container.
    #[default]
    Auto,
    Stretch,
    FlexStart,
    Center,
    FlexEnd,
    Baseline,
}

/// Multi-line cross axis alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignContent {
    #[default]
    Stretch,
    FlexStart,
    Center,
    FlexEnd,
    SpaceBetween,
    SpaceAround,
}

/// Text wrap mode for text-bearing views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextWrap {
    NoWrap,
    #[default]
    Wrap,
    Truncate,
}

// =============================================================================
// Container kind
// =============================================================================

/// What kind of container a view is.
///
/// The kind is fixed when the view is constructed and dispatched on by the
/// post-render content-extent reconciliation: only `Scrollable` containers
/// get their content size recomputed from child frames. `ListManaged`
/// containers keep their own row accounting and are skipped unconditionally,
/// even though they scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContainerKind {
    /// An ordinary view. Never scrolls.
    #[default]
    Plain,
    /// A free-form scrollable container whose content extent is derived
    /// from the union of its children's frames after every layout pass.
    Scrollable,
    /// A list/grid container that maintains its own content extent through
    /// incremental row accounting.
    ListManaged,
}

// =============================================================================
// Color
// =============================================================================

/// RGB color with 8-bit channels.
///
/// Terminal-default foreground/background is expressed as `Option<Rgba>`
/// being `None` wherever a color is consumed, so no sentinel values are
/// needed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgba {
    /// Create an RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    pub const CYAN: Self = Self::rgb(0, 255, 255);
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);
    pub const GRAY: Self = Self::rgb(128, 128, 128);

    /// Create from 0xRRGGBB integer format.
    pub const fn from_rgb_int(rgb: u32) -> Self {
        Self::rgb(
            ((rgb >> 16) & 0xFF) as u8,
            ((rgb >> 8) & 0xFF) as u8,
            (rgb & 0xFF) as u8,
        )
    }
}

// =============================================================================
// Cell attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield for efficient storage and comparison.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::ITALIC`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const INVERSE = 1 << 4;
        const STRIKETHROUGH = 1 << 5;
    }
}

// =============================================================================
// Cell - the atomic unit of terminal rendering
// =============================================================================

/// A single terminal cell.
///
/// This is what the renderer deals with. `None` colors mean "terminal
/// default" (let the terminal pick).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Option<Rgba>,
    pub bg: Option<Rgba>,
    pub attrs: Attr,
}

impl Default for Cell {
    fn default() -> Self {
        Self { ch: ' ', fg: None, bg: None, attrs: Attr::NONE }
    }
}

// =============================================================================
// Border styles
// =============================================================================

/// Border style for a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    #[default]
    None,
    /// ─ │ ┌ ┐ └ ┘
    Single,
    /// ═ ║ ╔ ╗ ╚ ╝
    Double,
    /// ─ │ ╭ ╮ ╰ ╯
    Rounded,
    /// ━ ┃ ┏ ┓ ┗ ┛
    Bold,
    /// - | + + + +
    Ascii,
}

impl BorderStyle {
    /// Get the border characters for this style.
    ///
    /// Returns: (horizontal, vertical, top_left, top_right, bottom_right, bottom_left)
    pub const fn chars(&self) -> (char, char, char, char, char, char) {
        match self {
            Self::None => (' ', ' ', ' ', ' ', ' ', ' '),
            Self::Single => ('─', '│', '┌', '┐', '┘', '└'),
            Self::Double => ('═', '║', '╔', '╗', '╝', '╚'),
            Self::Rounded => ('─', '│', '╭', '╮', '╯', '╰'),
            Self::Bold => ('━', '┃', '┏', '┓', '┛', '┗'),
            Self::Ascii => ('-', '|', '+', '+', '+', '+'),
        }
    }

    /// Whether this border occupies a cell on each edge.
    #[inline]
    pub const fn is_visible(&self) -> bool {
        !matches!(self, Self::None)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(40, 40, 30, 30);
        assert_eq!(r.right(), 70);
        assert_eq!(r.bottom(), 70);
        assert_eq!(r.size(), Size::new(30, 30));
    }

    #[test]
    fn test_rect_contains() {
        let r = Rect::new(2, 2, 4, 4);
        assert!(r.contains(2, 2));
        assert!(r.contains(5, 5));
        assert!(!r.contains(6, 6));
        assert!(!r.contains(0, 0));
    }

    #[test]
    fn test_rect_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert_eq!(a.intersect(&b), Some(Rect::new(5, 5, 5, 5)));

        let c = Rect::new(20, 20, 5, 5);
        assert_eq!(a.intersect(&c), None);
    }

    #[test]
    fn test_edges() {
        let e = Edges { top: 5, right: 2, bottom: 5, left: 2 };
        assert_eq!(e.vertical(), 10);
        assert_eq!(e.horizontal(), 4);
        assert_eq!(Edges::uniform(3).vertical(), 6);
    }

    #[test]
    fn test_constraint() {
        let c = Constraint::width(200);
        assert_eq!(c.width, Some(200));
        assert_eq!(c.height, None);
        assert_eq!(Constraint::NONE, Constraint::default());
    }

    #[test]
    fn test_dimension_from() {
        assert_eq!(Dimension::from(50u16), Dimension::Cells(50));
    }

    #[test]
    fn test_rgba_from_rgb_int() {
        assert_eq!(Rgba::from_rgb_int(0xff0000), Rgba::rgb(255, 0, 0));
        assert_eq!(Rgba::from_rgb_int(0x282a36), Rgba::rgb(40, 42, 54));
    }

    #[test]
    fn test_cell_default() {
        let cell = Cell::default();
        assert_eq!(cell.ch, ' ');
        assert_eq!(cell.fg, None);
        assert_eq!(cell.bg, None);
        assert_eq!(cell.attrs, Attr::NONE);
    }

    #[test]
    fn test_border_chars() {
        let (h, v, tl, ..) = BorderStyle::Single.chars();
        assert_eq!(h, '─');
        assert_eq!(v, '│');
        assert_eq!(tl, '┌');
        assert!(BorderStyle::Single.is_visible());
        assert!(!BorderStyle::None.is_visible());
    }
}
