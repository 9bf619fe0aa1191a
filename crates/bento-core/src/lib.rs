#![forbid(unsafe_code)]

//! Core: geometry primitives and size proposals shared by the bento crates.

pub mod geometry;

pub use geometry::{Point, ProposedSize, Rect, Size};
