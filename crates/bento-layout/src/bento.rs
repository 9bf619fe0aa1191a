//! Two-pass bento layout adapter.
//!
//! [`BentoLayout::measure`] reports the container's preferred size for a
//! proposal; [`BentoLayout::place`] positions every element inside final
//! bounds. Both passes run the same solver with the same tree, spacing,
//! and root axis, so placement always matches what was measured. The host
//! decides when to call each pass and must not change the element
//! collection between them.
//!
//! # Leaf/element mismatch
//!
//! | Situation                 | Default policy                          |
//! |---------------------------|-----------------------------------------|
//! | more leaves than elements | [`LeafDeficitPolicy::SkipLeaves`]       |
//! | more elements than leaves | [`SurplusPolicy::Collapse`]             |
//!
//! Either side can be switched to `Reject`, which fails the pass with a
//! [`BentoLayoutError`] before any element is measured or placed.

use std::fmt;

use crate::Axis;
use crate::solver::rects;
use crate::split::SplitTree;
use bento_core::geometry::{Point, ProposedSize, Rect, Size};

/// Gap between siblings when none is configured.
pub const DEFAULT_SPACING: u16 = 8;

/// Something a bento can size and position.
///
/// `preferred_size` must be deterministic for a given proposal; it may be
/// called once per leaf on every pass. `place` must accept
/// [`ProposedSize::ZERO`] as an instruction to hide.
pub trait LayoutElement {
    /// Size this element wants when offered `proposal`.
    fn preferred_size(&self, proposal: ProposedSize) -> Size;

    /// Position this element at `origin`, sized by `proposal`.
    fn place(&mut self, origin: Point, proposal: ProposedSize);
}

impl<T: LayoutElement + ?Sized> LayoutElement for &mut T {
    fn preferred_size(&self, proposal: ProposedSize) -> Size {
        (**self).preferred_size(proposal)
    }

    fn place(&mut self, origin: Point, proposal: ProposedSize) {
        (**self).place(origin, proposal);
    }
}

impl<T: LayoutElement + ?Sized> LayoutElement for Box<T> {
    fn preferred_size(&self, proposal: ProposedSize) -> Size {
        (**self).preferred_size(proposal)
    }

    fn place(&mut self, origin: Point, proposal: ProposedSize) {
        (**self).place(origin, proposal);
    }
}

/// What to do when the tree has more leaves than there are elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeafDeficitPolicy {
    /// Trailing leaves produce no rectangle.
    #[default]
    SkipLeaves,
    /// Fail with [`BentoLayoutError::LeafDeficit`].
    Reject,
}

/// What to do with elements beyond the tree's leaf count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SurplusPolicy {
    /// Place surplus elements at the zero point with a zero proposal.
    #[default]
    Collapse,
    /// Fail with [`BentoLayoutError::SurplusElements`].
    Reject,
}

/// Counts from one placement pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlacementSummary {
    /// Elements placed into a leaf rectangle.
    pub placed: usize,
    /// Surplus elements collapsed to zero size.
    pub collapsed: usize,
    /// Leaves left without an element.
    pub empty_leaves: usize,
}

/// Mismatch rejected by a `Reject` policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BentoLayoutError {
    LeafDeficit { leaves: usize, elements: usize },
    SurplusElements { leaves: usize, elements: usize },
}

impl fmt::Display for BentoLayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LeafDeficit { leaves, elements } => write!(
                f,
                "split tree has {leaves} leaves but only {elements} elements were supplied"
            ),
            Self::SurplusElements { leaves, elements } => write!(
                f,
                "{elements} elements supplied for a split tree with {leaves} leaves"
            ),
        }
    }
}

impl std::error::Error for BentoLayoutError {}

/// A layout that arranges elements by a [`SplitTree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BentoLayout {
    tree: SplitTree,
    spacing: u16,
    root_axis: Axis,
    deficit_policy: LeafDeficitPolicy,
    surplus_policy: SurplusPolicy,
}

impl Default for BentoLayout {
    fn default() -> Self {
        Self::new(SplitTree::default())
    }
}

impl BentoLayout {
    /// Create a layout with default spacing, a vertical root, and lenient policies.
    #[must_use]
    pub fn new(tree: SplitTree) -> Self {
        Self {
            tree,
            spacing: DEFAULT_SPACING,
            root_axis: Axis::Vertical,
            deficit_policy: LeafDeficitPolicy::default(),
            surplus_policy: SurplusPolicy::default(),
        }
    }

    /// Set the gap between siblings at every level.
    #[must_use]
    pub fn spacing(mut self, spacing: u16) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the axis the root arranges its children along.
    #[must_use]
    pub fn root_axis(mut self, axis: Axis) -> Self {
        self.root_axis = axis;
        self
    }

    #[must_use]
    pub fn deficit_policy(mut self, policy: LeafDeficitPolicy) -> Self {
        self.deficit_policy = policy;
        self
    }

    #[must_use]
    pub fn surplus_policy(mut self, policy: SurplusPolicy) -> Self {
        self.surplus_policy = policy;
        self
    }

    /// Replace the split tree, keeping the rest of the configuration.
    #[must_use]
    pub fn tree(mut self, tree: SplitTree) -> Self {
        self.tree = tree;
        self
    }

    #[must_use]
    pub fn split_tree(&self) -> &SplitTree {
        &self.tree
    }

    #[must_use]
    pub const fn gap(&self) -> u16 {
        self.spacing
    }

    #[must_use]
    pub const fn axis(&self) -> Axis {
        self.root_axis
    }

    /// Preferred size of the whole bento for `proposal`.
    ///
    /// This is the size of the union of all solved rectangles, or
    /// [`Size::ZERO`] when nothing is matched.
    pub fn measure<E: LayoutElement>(
        &self,
        proposal: ProposedSize,
        elements: &[E],
    ) -> Result<Size, BentoLayoutError> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "bento_measure",
            leaves = self.tree.leaf_count(),
            elements = elements.len(),
            width = ?proposal.width,
            height = ?proposal.height,
        )
        .entered();

        self.check_counts(elements.len())?;
        let frames = self.solve(proposal, elements, Point::ZERO);
        Ok(Rect::union_all(&frames).map_or(Size::ZERO, |union| union.size()))
    }

    /// Rectangles the placement pass would assign inside `bounds`.
    ///
    /// One rectangle per matched leaf, in the order elements are matched.
    pub fn frames<E: LayoutElement>(
        &self,
        bounds: Rect,
        elements: &[E],
    ) -> Result<Vec<Rect>, BentoLayoutError> {
        self.check_counts(elements.len())?;
        Ok(self.solve(
            ProposedSize::exact(bounds.size()),
            elements,
            bounds.origin(),
        ))
    }

    /// Place every element inside `bounds`.
    ///
    /// Matched elements are placed at their rectangle's origin with the
    /// rectangle's size as proposal. Surplus elements are collapsed to the
    /// zero point with a zero proposal so stale positions never survive a
    /// re-layout.
    pub fn place<E: LayoutElement>(
        &self,
        bounds: Rect,
        elements: &mut [E],
    ) -> Result<PlacementSummary, BentoLayoutError> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "bento_place",
            leaves = self.tree.leaf_count(),
            elements = elements.len(),
            x = bounds.x,
            y = bounds.y,
            w = bounds.width,
            h = bounds.height,
        )
        .entered();

        let frames = self.frames(bounds, elements)?;
        let leaves = self.tree.leaf_count();

        for (element, frame) in elements.iter_mut().zip(&frames) {
            element.place(frame.origin(), ProposedSize::exact(frame.size()));
        }

        let surplus = elements.iter_mut().skip(leaves);
        let mut collapsed = 0usize;
        for element in surplus {
            element.place(Point::ZERO, ProposedSize::ZERO);
            collapsed += 1;
        }

        let summary = PlacementSummary {
            placed: frames.len(),
            collapsed,
            empty_leaves: leaves.saturating_sub(frames.len()),
        };

        #[cfg(feature = "tracing")]
        if summary.collapsed > 0 || summary.empty_leaves > 0 {
            tracing::debug!(
                collapsed = summary.collapsed,
                empty_leaves = summary.empty_leaves,
                "bento leaf/element mismatch resolved"
            );
        }

        Ok(summary)
    }

    fn solve<E: LayoutElement>(
        &self,
        proposal: ProposedSize,
        elements: &[E],
        origin: Point,
    ) -> Vec<Rect> {
        rects(
            self.tree.root(),
            proposal,
            elements,
            self.root_axis,
            origin,
            self.spacing,
        )
    }

    fn check_counts(&self, elements: usize) -> Result<(), BentoLayoutError> {
        let leaves = self.tree.leaf_count();
        if leaves > elements && self.deficit_policy == LeafDeficitPolicy::Reject {
            return Err(BentoLayoutError::LeafDeficit { leaves, elements });
        }
        if elements > leaves && self.surplus_policy == SurplusPolicy::Reject {
            return Err(BentoLayoutError::SurplusElements { leaves, elements });
        }
        Ok(())
    }
}
