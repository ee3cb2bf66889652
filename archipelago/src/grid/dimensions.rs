//! Dimensions of the rectangular map, coordinate linearization, and neighbor
//! iteration.
use std::borrow::Borrow;

use crate::grid::Coordinate;

/// Dimensions of a rectangular map.
/// Implements the methods needed to check bounds, linearize indexes, and compute
/// neighbor cells.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Dimensions {
    /// Width of the map. This cooresponds to the `col` [`Coordinate`].
    width: usize,
    /// Height of the map. This cooresponds to the `row` [`Coordinate`].
    height: usize,
}

impl Dimensions {
    /// Create new [`Dimensions`] with the specified width and height.
    /// Panics if `width * height` exceeds `usize::max_value()` or if `width` or
    /// `height` is 0.
    pub fn new(width: usize, height: usize) -> Self {
        match Self::try_new(width, height) {
            Some(dim) => dim,
            None => {
                if width == 0 || height == 0 {
                    panic!("Dimensions must be nonzero, got {}x{}", width, height);
                } else {
                    panic!(
                        "Dimensions too large: {} * {} > {}",
                        width,
                        height,
                        usize::max_value()
                    );
                }
            }
        }
    }

    /// Create new [`Dimensions`] with the specified width and height.
    /// Returns `None` if `width * height` exceeds `usize::max_value()` or if `width`
    /// or `height` is 0.
    pub fn try_new(width: usize, height: usize) -> Option<Self> {
        if width == 0 || height == 0 {
            None
        } else {
            width.checked_mul(height).map(|_| Self { width, height })
        }
    }

    /// Get the width of these [`Dimensions`].
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height of these [`Dimensions`].
    pub fn height(&self) -> usize {
        self.height
    }

    /// Compute the linear total size of these [`Dimensions`].
    pub fn total_size(&self) -> usize {
        self.width * self.height
    }

    /// Convert a coordinate to a linear index within this dimension.
    /// Panics if the coordinate is out of range for the dimension.
    pub fn linearize(&self, coord: &Coordinate) -> usize {
        match self.try_linearize(coord) {
            Some(v) => v,
            None => panic!("{:?} is out of bounds for {:?}", coord, self),
        }
    }

    /// Convert a coordinate to a linear index within this dimension.
    /// Returns `None` if the coordinate is out of range for the dimension.
    pub fn try_linearize(&self, coord: &Coordinate) -> Option<usize> {
        self.check_bounds(coord)
            .map(|coord| coord.row * self.width + coord.col)
    }

    /// Get back a coordinate from a linearized index. The index must be less than
    /// [`total_size`][Dimensions::total_size].
    pub fn un_linearize(&self, idx: usize) -> Coordinate {
        Coordinate {
            row: idx / self.width,
            col: idx % self.width,
        }
    }

    /// Get an iterator over rows of the grid. Each row is an iterator over the
    /// coordinates of that row.
    pub fn iter_coordinates(&self) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        let width = self.width;
        (0..self.height).map(move |row| (0..width).map(move |col| Coordinate { row, col }))
    }

    /// Iterate the 8-connected neighbors of the given coordinate: the four orthogonal
    /// and the four diagonal cells. Only in-bounds coordinates are produced, so cells
    /// on the map edge have fewer neighbors.
    pub fn neighbors(&self, coord: Coordinate) -> Neighbors {
        Neighbors::start(self, coord)
    }

    /// Check if the given [`Coordinate`] is in bounds for these [`Dimensions`]. If so,
    /// return it, otherwise return `None`.
    #[inline]
    fn check_bounds<B: Borrow<Coordinate>>(&self, coord: B) -> Option<B> {
        let c = coord.borrow();
        if c.row < self.height && c.col < self.width {
            Some(coord)
        } else {
            None
        }
    }
}

/// Iterator over the in-bounds neighbors of a coordinate. Created by
/// [`Dimensions::neighbors`].
pub struct Neighbors<'a> {
    dim: &'a Dimensions,
    coord: Coordinate,
    step: Step,
}

/// Which neighbor the iterator tries next. Steps proceed clockwise from north.
#[derive(Debug, Copy, Clone)]
enum Step {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
    End,
}

impl<'a> Neighbors<'a> {
    fn start(dim: &'a Dimensions, coord: Coordinate) -> Self {
        Self {
            dim,
            coord,
            // If the coordinate is out of bounds, skip directly to the End state so we
            // don't have to run dim.check_bounds every iteration.
            step: dim.check_bounds(coord).map_or(Step::End, |_| Step::North),
        }
    }

    /// Row above the center coordinate, if it exists.
    fn up(&self) -> Option<usize> {
        self.coord.row.checked_sub(1)
    }

    /// Row below the center coordinate, if it exists.
    fn down(&self) -> Option<usize> {
        match self.coord.row + 1 {
            row if row < self.dim.height => Some(row),
            _ => None,
        }
    }

    /// Column left of the center coordinate, if it exists.
    fn left(&self) -> Option<usize> {
        self.coord.col.checked_sub(1)
    }

    /// Column right of the center coordinate, if it exists.
    fn right(&self) -> Option<usize> {
        match self.coord.col + 1 {
            col if col < self.dim.width => Some(col),
            _ => None,
        }
    }
}

impl Iterator for Neighbors<'_> {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Coordinate> {
        loop {
            match self.step {
                Step::North => {
                    self.step = Step::NorthEast;
                    if let Some(row) = self.up() {
                        return Some(Coordinate::new(row, self.coord.col));
                    }
                }
                Step::NorthEast => {
                    self.step = Step::East;
                    if let (Some(row), Some(col)) = (self.up(), self.right()) {
                        return Some(Coordinate::new(row, col));
                    }
                }
                Step::East => {
                    self.step = Step::SouthEast;
                    if let Some(col) = self.right() {
                        return Some(Coordinate::new(self.coord.row, col));
                    }
                }
                Step::SouthEast => {
                    self.step = Step::South;
                    if let (Some(row), Some(col)) = (self.down(), self.right()) {
                        return Some(Coordinate::new(row, col));
                    }
                }
                Step::South => {
                    self.step = Step::SouthWest;
                    if let Some(row) = self.down() {
                        return Some(Coordinate::new(row, self.coord.col));
                    }
                }
                Step::SouthWest => {
                    self.step = Step::West;
                    if let (Some(row), Some(col)) = (self.down(), self.left()) {
                        return Some(Coordinate::new(row, col));
                    }
                }
                Step::West => {
                    self.step = Step::NorthWest;
                    if let Some(col) = self.left() {
                        return Some(Coordinate::new(self.coord.row, col));
                    }
                }
                Step::NorthWest => {
                    self.step = Step::End;
                    if let (Some(row), Some(col)) = (self.up(), self.left()) {
                        return Some(Coordinate::new(row, col));
                    }
                }
                Step::End => return None,
            }
        }
    }
}
