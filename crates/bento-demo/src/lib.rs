#![forbid(unsafe_code)]

//! Bento demo: colored tiles arranged by a split tree.
//!
//! The binary parses [`cli::Opts`], runs [`app::run`], and prints either a
//! character canvas or a JSON report of every tile's placement.

pub mod app;
pub mod canvas;
pub mod cli;
pub mod tiles;
