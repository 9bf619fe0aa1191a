//! Recursive rectangle solver.
//!
//! One function serves both layout passes: the union of its output is the
//! container's preferred size, and the same output positions each element.
//! Using it twice keeps placement consistent with the size reported to the
//! parent.

use crate::Axis;
use crate::bento::LayoutElement;
use crate::split::SplitNode;
use bento_core::geometry::{Point, ProposedSize, Rect};

/// Solve one rectangle per matched leaf of `node`, in depth-first order.
///
/// `elements` are matched to leaves left to right. Leaves past the end of
/// `elements` produce nothing, so the result has
/// `min(node.leaf_count(), elements.len())` entries.
///
/// An internal node with `k` children stacks them along `axis`. Each child
/// is offered `1/k` of the proposal along `axis` (after removing the
/// `k - 1` gaps) and the full proposal across it, and arranges its own
/// children along `axis.other()`. Siblings start after the furthest edge
/// reached by the previous sibling plus `spacing`, so they never overlap
/// even when a child is larger than its share.
///
/// Complexity: `O(n * d)` for `n` nodes and depth `d` (leaf counts are
/// recomputed per level).
#[must_use]
pub fn rects<E: LayoutElement>(
    node: &SplitNode,
    proposal: ProposedSize,
    elements: &[E],
    axis: Axis,
    origin: Point,
    spacing: u16,
) -> Vec<Rect> {
    let mut out = Vec::with_capacity(elements.len().min(node.leaf_count()));
    solve_node(node, proposal, elements, axis, origin, spacing, &mut out);
    out
}

fn solve_node<E: LayoutElement>(
    node: &SplitNode,
    proposal: ProposedSize,
    elements: &[E],
    axis: Axis,
    origin: Point,
    spacing: u16,
    out: &mut Vec<Rect>,
) {
    let Some(first) = elements.first() else {
        return;
    };

    let children = node.children();
    if children.is_empty() {
        let size = first.preferred_size(proposal);
        out.push(Rect::from_origin_size(origin, size));
        return;
    }

    let count = u16::try_from(children.len()).unwrap_or(u16::MAX);
    let total_spacing = spacing.saturating_mul(count - 1);
    let divided = proposal.shrink(total_spacing).share(count);
    let child_proposal = match axis {
        Axis::Vertical => proposal.replace_height(divided.height),
        Axis::Horizontal => proposal.replace_width(divided.width),
    };

    let mut cursor = origin;
    let mut remaining = elements;
    for child in children {
        let take = child.leaf_count().min(remaining.len());
        let (child_elements, rest) = remaining.split_at(take);
        remaining = rest;

        let first_rect = out.len();
        solve_node(
            child,
            child_proposal,
            child_elements,
            axis.other(),
            cursor,
            spacing,
            out,
        );

        let start = axis.coordinate(cursor);
        let extent = out[first_rect..]
            .iter()
            .map(|rect| axis.far_edge(rect).saturating_sub(start))
            .max()
            .unwrap_or(0);
        cursor = axis.advance(cursor, extent.saturating_add(spacing));
    }
}
