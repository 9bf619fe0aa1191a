#![forbid(unsafe_code)]

//! Split-tree driven bento layout.
//!
//! A bento arranges a flat sequence of elements into nested regions. The
//! nesting comes from a separate [`SplitTree`], not from the elements:
//!
//! - [`split`] - the tree, its leaf counts, and the element ranges per child
//! - [`solver`] - the recursive rectangle solver shared by both passes
//! - [`bento`] - the two-pass [`BentoLayout`] adapter (measure, then place)
//!
//! The arrangement axis alternates with depth: the root stacks its
//! children along the root axis, their children along the other axis, and
//! so on.
//!
//! ```
//! use bento_layout::{BentoLayout, LayoutElement, SplitNode, SplitTree};
//! use bento_layout::{Point, ProposedSize, Rect, Size};
//!
//! struct Fill(Option<Rect>);
//!
//! impl LayoutElement for Fill {
//!     fn preferred_size(&self, proposal: ProposedSize) -> Size {
//!         proposal.unwrap_or(Size::new(10, 10))
//!     }
//!     fn place(&mut self, origin: Point, proposal: ProposedSize) {
//!         self.0 = Some(Rect::from_origin_size(origin, proposal.unwrap_or(Size::ZERO)));
//!     }
//! }
//!
//! let tree = SplitTree::new(SplitNode::even(2)).unwrap();
//! let layout = BentoLayout::new(tree).spacing(2);
//! let mut tiles = [Fill(None), Fill(None)];
//! layout.place(Rect::from_size(20, 12), &mut tiles).unwrap();
//! assert_eq!(tiles[0].0, Some(Rect::new(0, 0, 20, 5)));
//! assert_eq!(tiles[1].0, Some(Rect::new(0, 7, 20, 5)));
//! ```

pub mod bento;
pub mod solver;
pub mod split;

pub use bento::{
    BentoLayout, BentoLayoutError, DEFAULT_SPACING, LayoutElement, LeafDeficitPolicy,
    PlacementSummary, SurplusPolicy,
};
pub use bento_core::geometry::{Point, ProposedSize, Rect, Size};
pub use solver::rects;
pub use split::{
    DEFAULT_MAX_SPLIT_DEPTH, SPLIT_TREE_SCHEMA_VERSION, SplitModelError, SplitNode, SplitTree,
    SplitTreeSnapshot,
};

use serde::{Deserialize, Serialize};

/// The axis along which a node arranges its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Children stacked top to bottom.
    #[default]
    Vertical,
    /// Children placed left to right.
    Horizontal,
}

impl Axis {
    /// The axis used one level deeper.
    #[inline]
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Axis::Vertical => Axis::Horizontal,
            Axis::Horizontal => Axis::Vertical,
        }
    }

    /// Short label for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Axis::Vertical => "vertical",
            Axis::Horizontal => "horizontal",
        }
    }

    /// Far edge of `rect` along this axis (exclusive).
    #[inline]
    pub(crate) const fn far_edge(self, rect: &Rect) -> u16 {
        match self {
            Axis::Vertical => rect.bottom(),
            Axis::Horizontal => rect.right(),
        }
    }

    /// Coordinate of `point` along this axis.
    #[inline]
    pub(crate) const fn coordinate(self, point: Point) -> u16 {
        match self {
            Axis::Vertical => point.y,
            Axis::Horizontal => point.x,
        }
    }

    /// Move `point` forward along this axis, saturating.
    #[inline]
    pub(crate) const fn advance(self, point: Point, by: u16) -> Point {
        match self {
            Axis::Vertical => Point::new(point.x, point.y.saturating_add(by)),
            Axis::Horizontal => Point::new(point.x.saturating_add(by), point.y),
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Axis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vertical" | "v" => Ok(Axis::Vertical),
            "horizontal" | "h" => Ok(Axis::Horizontal),
            other => Err(format!("unknown axis '{other}' (expected vertical|horizontal)")),
        }
    }
}
