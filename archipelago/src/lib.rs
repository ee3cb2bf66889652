//! Detection and labeling of islands in rectangular text maps.
//!
//! A map is a grid of land and water cells loaded from a sequence of text rows with
//! [`Grid::parse`]. Scanning the map with [`Labeling::scan`] assigns a numeric id to
//! every island, that is, every maximal group of land cells connected through
//! 8-directional adjacency. The result is a label grid that can be queried per cell
//! ([`Labeling::get`]), grouped into per-island coordinate lists
//! ([`Labeling::islands`]), or rendered as text for diagnostics.
//!
//! The scan is a single row-major pass: each unlabeled land cell seeds an iterative
//! flood fill over the island it belongs to. The whole operation is synchronous and
//! self-contained; nothing is shared between scans.

pub mod grid;
pub mod label;

pub use crate::{
    grid::{Coordinate, Dimensions, Grid, MalformedGridError, Neighbors, Terrain, LAND_MARKER},
    label::{IslandId, Labeling},
};
