#![forbid(unsafe_code)]

//! End-to-end measure/place scenarios.
//!
//! | Case | Setup                                   | Expectation                          |
//! |------|-----------------------------------------|--------------------------------------|
//! | A    | lone leaf, one 40x20 element            | measure 40x20, placed at origin      |
//! | B    | two leaves, spacing 10, unbounded height| second element starts at y = 40      |
//! | C    | three leaves, two elements              | two rectangles, no error             |
//! | D    | two leaves, three elements              | third element collapsed at (0,0)     |

use bento_layout::{
    Axis, BentoLayout, LayoutElement, Point, ProposedSize, Rect, Size, SplitNode, SplitTree,
    rects,
};

/// Element with a fixed preferred size that records its last placement.
#[derive(Debug, Clone)]
struct Swatch {
    preferred: Size,
    frame: Option<Rect>,
}

impl Swatch {
    fn new(width: u16, height: u16) -> Self {
        Self {
            preferred: Size::new(width, height),
            frame: None,
        }
    }
}

impl LayoutElement for Swatch {
    fn preferred_size(&self, _proposal: ProposedSize) -> Size {
        self.preferred
    }

    fn place(&mut self, origin: Point, proposal: ProposedSize) {
        self.frame = Some(Rect::from_origin_size(origin, proposal.unwrap_or(Size::ZERO)));
    }
}

/// Element that fills whatever it is offered (10 cells when unbounded).
#[derive(Debug, Clone, Default)]
struct Fill {
    frame: Option<Rect>,
}

impl LayoutElement for Fill {
    fn preferred_size(&self, proposal: ProposedSize) -> Size {
        proposal.unwrap_or(Size::new(10, 10))
    }

    fn place(&mut self, origin: Point, proposal: ProposedSize) {
        self.frame = Some(Rect::from_origin_size(origin, proposal.unwrap_or(Size::ZERO)));
    }
}

fn bento(root: SplitNode, spacing: u16) -> BentoLayout {
    BentoLayout::new(SplitTree::new(root).expect("valid tree")).spacing(spacing)
}

#[test]
fn scenario_a_single_leaf() {
    let layout = bento(SplitNode::leaf(), 8);
    let mut elements = [Swatch::new(40, 20)];

    let size = layout
        .measure(ProposedSize::UNSPECIFIED, &elements)
        .expect("lenient policies");
    assert_eq!(size, Size::new(40, 20));

    layout
        .place(Rect::from_size(40, 20), &mut elements)
        .expect("lenient policies");
    assert_eq!(elements[0].frame, Some(Rect::new(0, 0, 40, 20)));
}

#[test]
fn scenario_b_vertical_pair_with_spacing() {
    let elements = [Swatch::new(100, 30), Swatch::new(100, 50)];
    let out = rects(
        &SplitNode::even(2),
        ProposedSize::new(Some(100), None),
        &elements,
        Axis::Vertical,
        Point::ZERO,
        10,
    );
    assert_eq!(
        out,
        vec![Rect::new(0, 0, 100, 30), Rect::new(0, 40, 100, 50)]
    );

    let layout = bento(SplitNode::even(2), 10);
    let size = layout
        .measure(ProposedSize::new(Some(100), None), &elements)
        .expect("lenient policies");
    assert_eq!(size, Size::new(100, 90));
}

#[test]
fn scenario_c_more_leaves_than_elements() {
    let layout = bento(SplitNode::even(3), 0);
    let mut elements = [Swatch::new(5, 5), Swatch::new(5, 5)];

    let frames = layout
        .frames(Rect::from_size(5, 15), &elements)
        .expect("deficit is not an error");
    assert_eq!(frames, vec![Rect::new(0, 0, 5, 5), Rect::new(0, 5, 5, 5)]);

    let summary = layout
        .place(Rect::from_size(5, 15), &mut elements)
        .expect("deficit is not an error");
    assert_eq!(summary.placed, 2);
    assert_eq!(summary.empty_leaves, 1);
}

#[test]
fn scenario_d_more_elements_than_leaves() {
    let layout = bento(SplitNode::even(2), 0);
    let mut elements = [Swatch::new(4, 4), Swatch::new(4, 4), Swatch::new(4, 4)];

    let frames = layout
        .frames(Rect::from_size(4, 8), &elements)
        .expect("surplus is not an error");
    assert_eq!(frames.len(), 2);

    let summary = layout
        .place(Rect::from_size(4, 8), &mut elements)
        .expect("surplus is not an error");
    assert_eq!(summary.collapsed, 1);
    assert_eq!(elements[0].frame, Some(Rect::new(0, 0, 4, 4)));
    assert_eq!(elements[1].frame, Some(Rect::new(0, 4, 4, 4)));
    assert_eq!(elements[2].frame, Some(Rect::new(0, 0, 0, 0)));
}

#[test]
fn stale_frames_are_cleared_when_an_element_becomes_surplus() {
    let layout = bento(SplitNode::even(2), 0);
    let mut elements = vec![Swatch::new(3, 3), Swatch::new(3, 3)];
    layout
        .place(Rect::from_size(3, 6), &mut elements)
        .expect("lenient policies");
    assert_eq!(elements[1].frame, Some(Rect::new(0, 3, 3, 3)));

    // A new element is inserted in front; the old second one is now surplus.
    elements.insert(0, Swatch::new(3, 3));
    layout
        .place(Rect::from_size(3, 6), &mut elements)
        .expect("lenient policies");
    assert_eq!(elements[2].frame, Some(Rect::default()));
}

#[test]
fn sample_tree_fills_bounds_without_overlap() {
    // 7 leaves, 10 elements: the last three are collapsed.
    let layout = bento(SplitNode::sample(), 2);
    let mut elements: Vec<Fill> = (0..10).map(|_| Fill::default()).collect();
    let bounds = Rect::from_size(80, 40);

    let summary = layout.place(bounds, &mut elements).expect("lenient policies");
    assert_eq!(summary.placed, 7);
    assert_eq!(summary.collapsed, 3);

    let frames: Vec<Rect> = elements[..7]
        .iter()
        .map(|e| e.frame.expect("placed"))
        .collect();
    for (i, a) in frames.iter().enumerate() {
        assert!(!a.is_empty(), "frame {i} should be visible: {a:?}");
        assert!(a.right() <= bounds.right() && a.bottom() <= bounds.bottom());
        for b in &frames[i + 1..] {
            assert_eq!(a.intersection_opt(b), None, "{a:?} overlaps {b:?}");
        }
    }
    for e in &elements[7..] {
        assert_eq!(e.frame, Some(Rect::default()));
    }
}

#[test]
fn sample_tree_rows_and_columns() {
    // Rows: (40 - 2*2) / 3 = 12 tall. Row 0 columns: (80 - 2) / 2 = 39 wide.
    let layout = bento(SplitNode::sample(), 2);
    let elements: Vec<Fill> = (0..7).map(|_| Fill::default()).collect();
    let frames = layout
        .frames(Rect::from_size(80, 40), &elements)
        .expect("lenient policies");
    assert_eq!(
        frames,
        vec![
            // row 0: leaf | column of two
            Rect::new(0, 0, 39, 12),
            Rect::new(41, 0, 39, 5),
            Rect::new(41, 7, 39, 5),
            // row 1: column of two | leaf
            Rect::new(0, 14, 39, 5),
            Rect::new(0, 21, 39, 5),
            Rect::new(41, 14, 39, 12),
            // row 2: single leaf spanning the width
            Rect::new(0, 28, 80, 12),
        ]
    );
}

#[test]
fn measured_size_matches_placed_extent() {
    let layout = bento(SplitNode::sample(), 1);
    let elements: Vec<Swatch> = (1..=7).map(|i| Swatch::new(i * 2, i)).collect();
    let proposal = ProposedSize::new(Some(60), Some(30));
    let size = layout.measure(proposal, &elements).expect("lenient policies");
    let frames = layout
        .frames(Rect::from_size(size.width, size.height), &elements)
        .expect("lenient policies");
    let union = Rect::union_all(&frames).expect("frames present");
    assert_eq!(union.size(), size);
}
