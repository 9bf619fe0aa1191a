#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All coordinates are terminal cells (0-indexed, origin at top-left).
//! Arithmetic saturates at the `u16` bounds instead of wrapping.

/// A position in cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

impl Point {
    /// The top-left corner.
    pub const ZERO: Self = Self { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// A width/height pair in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    /// Zero-area size.
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
    };

    #[inline]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Check if either dimension is zero.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// An axis-aligned rectangle for layout bounds and placement frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: u16,
    /// Top edge (inclusive).
    pub y: u16,
    /// Width in cells.
    pub width: u16,
    /// Height in cells.
    pub height: u16,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle anchored at the origin.
    #[inline]
    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Create a rectangle from an origin point and a size.
    #[inline]
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Top-left corner.
    #[inline]
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Compute the intersection with another rectangle, returning `None` if no overlap.
    #[inline]
    pub fn intersection_opt(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if x < right && y < bottom {
            Some(Rect::new(x, y, right - x, bottom - y))
        } else {
            None
        }
    }

    /// Smallest rectangle containing both `self` and `other`.
    ///
    /// Empty rectangles still contribute their origin.
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());

        Rect {
            x,
            y,
            width: right.saturating_sub(x),
            height: bottom.saturating_sub(y),
        }
    }

    /// Union of every rectangle in `rects`, or `None` when there are none.
    pub fn union_all<'a>(rects: impl IntoIterator<Item = &'a Rect>) -> Option<Rect> {
        rects
            .into_iter()
            .fold(None, |acc: Option<Rect>, rect| match acc {
                Some(acc) => Some(acc.union(rect)),
                None => Some(*rect),
            })
    }
}

/// A size proposal offered by a container to its content.
///
/// A `None` dimension is unbounded: the content may pick whatever it
/// prefers along that dimension. Arithmetic on a proposal only touches
/// the dimensions that are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ProposedSize {
    pub width: Option<u16>,
    pub height: Option<u16>,
}

impl ProposedSize {
    /// Both dimensions unbounded.
    pub const UNSPECIFIED: Self = Self {
        width: None,
        height: None,
    };

    /// A zero-by-zero proposal; used to collapse content.
    pub const ZERO: Self = Self {
        width: Some(0),
        height: Some(0),
    };

    #[inline]
    pub const fn new(width: Option<u16>, height: Option<u16>) -> Self {
        Self { width, height }
    }

    /// A fully bounded proposal matching `size`.
    #[inline]
    pub const fn exact(size: Size) -> Self {
        Self {
            width: Some(size.width),
            height: Some(size.height),
        }
    }

    /// Subtract `amount` from every bounded dimension, saturating at zero.
    #[must_use]
    pub fn shrink(self, amount: u16) -> Self {
        Self {
            width: self.width.map(|w| w.saturating_sub(amount)),
            height: self.height.map(|h| h.saturating_sub(amount)),
        }
    }

    /// Divide every bounded dimension into `parts` equal shares (floored).
    ///
    /// `parts == 0` returns the proposal unchanged.
    #[must_use]
    pub fn share(self, parts: u16) -> Self {
        if parts == 0 {
            return self;
        }
        Self {
            width: self.width.map(|w| w / parts),
            height: self.height.map(|h| h / parts),
        }
    }

    #[must_use]
    pub const fn replace_width(self, width: Option<u16>) -> Self {
        Self {
            width,
            height: self.height,
        }
    }

    #[must_use]
    pub const fn replace_height(self, height: Option<u16>) -> Self {
        Self {
            width: self.width,
            height,
        }
    }

    /// Resolve against a fallback for unbounded dimensions.
    #[inline]
    pub fn unwrap_or(self, fallback: Size) -> Size {
        Size::new(
            self.width.unwrap_or(fallback.width),
            self.height.unwrap_or(fallback.height),
        )
    }
}

impl From<Size> for ProposedSize {
    fn from(size: Size) -> Self {
        Self::exact(size)
    }
}
