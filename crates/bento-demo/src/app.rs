#![forbid(unsafe_code)]

//! Demo driver: load a tree, measure, place, and print.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use bento_core::geometry::{Point, ProposedSize, Rect, Size};
use bento_layout::{
    BentoLayout, BentoLayoutError, PlacementSummary, SplitModelError, SplitNode, SplitTree,
    SplitTreeSnapshot,
};
use serde::Serialize;

use crate::canvas;
use crate::cli::Opts;
use crate::tiles::{self, Tile, TileReport};

#[derive(Debug)]
pub enum DemoError {
    Io(io::Error),
    Json(serde_json::Error),
    Model(SplitModelError),
    Layout(BentoLayoutError),
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "io error: {err}"),
            Self::Json(err) => write!(f, "invalid split tree snapshot: {err}"),
            Self::Model(err) => write!(f, "invalid split tree: {err}"),
            Self::Layout(err) => write!(f, "layout failed: {err}"),
        }
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::Model(err) => Some(err),
            Self::Layout(err) => Some(err),
        }
    }
}

impl From<io::Error> for DemoError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for DemoError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<SplitModelError> for DemoError {
    fn from(err: SplitModelError) -> Self {
        Self::Model(err)
    }
}

impl From<BentoLayoutError> for DemoError {
    fn from(err: BentoLayoutError) -> Self {
        Self::Layout(err)
    }
}

/// Everything one run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoReport {
    pub width: u16,
    pub height: u16,
    pub leaves: usize,
    pub placed: usize,
    pub collapsed: usize,
    pub empty_leaves: usize,
    pub tiles: Vec<TileReport>,
}

/// Read a split tree snapshot from a JSON file.
pub fn load_tree(path: &Path) -> Result<SplitTree, DemoError> {
    let text = fs::read_to_string(path)?;
    let snapshot: SplitTreeSnapshot = serde_json::from_str(&text)?;
    Ok(SplitTree::from_snapshot(snapshot)?)
}

/// Run both layout passes for `opts` and return the placed tiles.
pub fn layout_tiles(opts: &Opts) -> Result<(Vec<Tile>, DemoReport), DemoError> {
    let tree = match &opts.tree {
        Some(path) => load_tree(path)?,
        None => SplitTree::new(SplitNode::sample())?,
    };
    let layout = BentoLayout::new(tree)
        .spacing(opts.spacing)
        .root_axis(opts.axis);

    let mut tiles = tiles::sample_tiles(opts.items);
    let removed = tiles::remove_tiles(&mut tiles, &opts.remove);

    let proposal = ProposedSize::new(
        (opts.width > 0).then_some(opts.width),
        (opts.height > 0).then_some(opts.height),
    );
    let size = layout.measure(proposal, &tiles)?;
    let summary: PlacementSummary =
        layout.place(Rect::from_origin_size(Point::ZERO, size), &mut tiles)?;

    tracing::info!(
        leaves = layout.split_tree().leaf_count(),
        tiles = tiles.len(),
        removed,
        width = size.width,
        height = size.height,
        "bento demo laid out"
    );

    let report = DemoReport {
        width: size.width,
        height: size.height,
        leaves: layout.split_tree().leaf_count(),
        placed: summary.placed,
        collapsed: summary.collapsed,
        empty_leaves: summary.empty_leaves,
        tiles: tiles.iter().map(TileReport::from).collect(),
    };
    Ok((tiles, report))
}

/// Lay out tiles and write either a canvas or a JSON report to `out`.
pub fn run(opts: &Opts, out: &mut impl Write) -> Result<(), DemoError> {
    let (tiles, report) = layout_tiles(opts)?;
    if opts.json {
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        out.write_all(canvas::render(&tiles, Size::new(report.width, report.height)).as_bytes())?;
        writeln!(
            out,
            "{} placed, {} collapsed, {} empty leaves",
            report.placed, report.collapsed, report.empty_leaves
        )?;
    }
    Ok(())
}
