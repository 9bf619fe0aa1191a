//! Property-based invariant tests for geometry primitives and proposals.
//!
//! 1. Union is commutative.
//! 2. Union contains both inputs.
//! 3. `union_all` agrees with a pairwise fold.
//! 4. `shrink` never grows a bounded dimension and keeps unbounded ones unbounded.
//! 5. `share` never grows a bounded dimension and keeps unbounded ones unbounded.
//! 6. No panics on extreme u16 values.

use bento_core::geometry::{ProposedSize, Rect};
use proptest::prelude::*;

fn small_rect_strategy() -> impl Strategy<Value = Rect> {
    (0u16..=500, 0u16..=500, 0u16..=500, 0u16..=500).prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

fn proposal_strategy() -> impl Strategy<Value = ProposedSize> {
    (
        proptest::option::of(any::<u16>()),
        proptest::option::of(any::<u16>()),
    )
        .prop_map(|(w, h)| ProposedSize::new(w, h))
}

proptest! {
    #[test]
    fn union_commutative(a in small_rect_strategy(), b in small_rect_strategy()) {
        prop_assert_eq!(a.union(&b), b.union(&a));
    }

    #[test]
    fn union_contains_both(a in small_rect_strategy(), b in small_rect_strategy()) {
        let u = a.union(&b);
        for r in [a, b] {
            prop_assert!(u.x <= r.x && u.y <= r.y);
            prop_assert!(u.right() >= r.right() && u.bottom() >= r.bottom());
        }
    }

    #[test]
    fn union_all_matches_fold(rects in proptest::collection::vec(small_rect_strategy(), 1..8)) {
        let folded = rects[1..].iter().fold(rects[0], |acc, r| acc.union(r));
        prop_assert_eq!(Rect::union_all(&rects), Some(folded));
    }

    #[test]
    fn shrink_is_monotone(p in proposal_strategy(), amount in any::<u16>()) {
        let shrunk = p.shrink(amount);
        prop_assert_eq!(shrunk.width.is_some(), p.width.is_some());
        prop_assert_eq!(shrunk.height.is_some(), p.height.is_some());
        if let (Some(before), Some(after)) = (p.width, shrunk.width) {
            prop_assert!(after <= before);
        }
        if let (Some(before), Some(after)) = (p.height, shrunk.height) {
            prop_assert!(after <= before);
        }
    }

    #[test]
    fn share_is_monotone(p in proposal_strategy(), parts in 1u16..=64) {
        let shared = p.share(parts);
        prop_assert_eq!(shared.width.is_some(), p.width.is_some());
        prop_assert_eq!(shared.height.is_some(), p.height.is_some());
        if let (Some(before), Some(after)) = (p.width, shared.width) {
            prop_assert!(after <= before);
            prop_assert!(u32::from(after) * u32::from(parts) <= u32::from(before));
        }
    }

    #[test]
    fn extreme_values_do_not_panic(x in any::<u16>(), y in any::<u16>(), w in any::<u16>(), h in any::<u16>()) {
        let r = Rect::new(x, y, w, h);
        let _ = r.right();
        let _ = r.bottom();
        let _ = r.union(&Rect::new(w, h, x, y));
        let _ = r.intersection_opt(&Rect::new(w, h, x, y));
    }
}
