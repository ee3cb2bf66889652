//! Labeling of islands: maximal groups of land cells connected through 8-directional
//! adjacency.

use std::{borrow::Borrow, collections::HashMap, fmt};

use crate::grid::{Coordinate, Dimensions, Grid};

/// Identifier of a single island on a scanned map.
///
/// Ids are assigned from 1 upward in the order islands are first touched by the
/// row-major scan, so a [`Labeling`] with `n` islands uses exactly the ids `1..=n`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct IslandId(u32);

impl IslandId {
    /// Construct an [`IslandId`] with the given numeric value. Panics if `value` is 0,
    /// which is reserved for water.
    pub fn new(value: u32) -> Self {
        assert!(value > 0);
        IslandId(value)
    }

    /// Get the numeric value of this id. Always at least 1.
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for IslandId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The finished label grid produced by scanning a [`Grid`] for islands.
///
/// Every land cell belongs to exactly one island; water cells belong to none. The
/// labeling is built in a single call and read-only afterward.
#[derive(Debug, Clone)]
pub struct Labeling {
    /// Dimensions of the scanned map.
    dim: Dimensions,
    /// Island id of each cell in row-major order. 0 marks water.
    labels: Box<[u32]>,
    /// Number of distinct islands found by the scan.
    island_count: u32,
}

impl Labeling {
    /// Scan the given [`Grid`] and label every island on it.
    ///
    /// Cells are visited in row-major order. Each land cell that has no label yet
    /// seeds a flood fill that labels everything 8-connected to it before the scan
    /// moves on, so island ids increase in the order islands are discovered.
    pub fn scan(grid: &Grid) -> Self {
        let dim = grid.dimensions();
        let mut labels = vec![0u32; dim.total_size()].into_boxed_slice();
        // Worklist of cells pending a visit, reused across fills. Always drained when
        // a fill returns.
        let mut pending = Vec::new();
        let mut next_id = 1;
        for row in dim.iter_coordinates() {
            for coord in row {
                if grid.terrain(coord).is_land() && labels[dim.linearize(&coord)] == 0 {
                    let filled = flood(grid, &mut labels, &mut pending, coord, next_id);
                    // The outer scan only seeds unlabeled land, so every fill covers at
                    // least its seed; the guard keeps an empty fill from burning an id.
                    if filled > 0 {
                        next_id += 1;
                    }
                }
            }
        }
        Self {
            dim,
            labels,
            island_count: next_id - 1,
        }
    }

    /// Get the [`Dimensions`] of the scanned map.
    pub fn dimensions(&self) -> Dimensions {
        self.dim
    }

    /// Get the number of islands found by the scan.
    pub fn island_count(&self) -> u32 {
        self.island_count
    }

    /// Get the island that the cell at the given [`Coordinate`] belongs to. Returns
    /// `None` for water cells and for coordinates outside the map.
    pub fn get<B: Borrow<Coordinate>>(&self, coord: B) -> Option<IslandId> {
        match self.dim.try_linearize(coord.borrow()).map(|i| self.labels[i]) {
            Some(0) | None => None,
            Some(id) => Some(IslandId(id)),
        }
    }

    /// Build a map from each island's id to the list of coordinates it occupies.
    ///
    /// This is an independent pass over the finished labels in row-major order, so
    /// each island's coordinate list is in row-major scan order regardless of the
    /// order the flood fill first reached the cells.
    pub fn islands(&self) -> HashMap<IslandId, Vec<Coordinate>> {
        let mut islands: HashMap<IslandId, Vec<Coordinate>> = HashMap::new();
        for (idx, &label) in self.labels.iter().enumerate() {
            if label != 0 {
                islands
                    .entry(IslandId(label))
                    .or_default()
                    .push(self.dim.un_linearize(idx));
            }
        }
        islands
    }
}

impl fmt::Display for Labeling {
    /// Render the label grid with one line per row: water cells as `'_'`, land cells
    /// as their island id in decimal. Ids of 10 or more print as several characters
    /// and skew the columns; the view is for diagnostics, not parsing.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (idx, &label) in self.labels.iter().enumerate() {
            if idx > 0 && idx % self.dim.width() == 0 {
                writeln!(f)?;
            }
            if label == 0 {
                write!(f, "_")?;
            } else {
                write!(f, "{}", label)?;
            }
        }
        Ok(())
    }
}

/// Flood one island outward from `seed`, writing `id` into every land cell
/// 8-connected to it. Returns the number of cells labeled.
///
/// Uses an explicit worklist rather than recursion, so island size is bounded by
/// memory instead of call depth. Neighbors are pushed without filtering; a popped
/// cell that is water or already labeled is dropped, which also makes duplicate
/// pushes of the same cell harmless.
fn flood(
    grid: &Grid,
    labels: &mut [u32],
    pending: &mut Vec<Coordinate>,
    seed: Coordinate,
    id: u32,
) -> usize {
    let dim = grid.dimensions();
    let mut filled = 0;
    pending.push(seed);
    while let Some(coord) = pending.pop() {
        let idx = dim.linearize(&coord);
        if !grid.terrain(coord).is_land() || labels[idx] != 0 {
            continue;
        }
        labels[idx] = id;
        filled += 1;
        pending.extend(dim.neighbors(coord));
    }
    filled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Terrain;

    fn scan(rows: &[&str]) -> Labeling {
        Labeling::scan(&Grid::parse(rows).unwrap())
    }

    #[test]
    fn diagonal_cells_form_one_island() {
        let labeling = scan(&["o~", "~o"]);
        assert_eq!(labeling.island_count(), 1);
        assert_eq!(
            labeling.get(Coordinate::new(0, 0)),
            labeling.get(Coordinate::new(1, 1)),
        );
    }

    #[test]
    fn solid_block_is_one_island() {
        let labeling = scan(&["oo", "oo"]);
        assert_eq!(labeling.island_count(), 1);
        let id = labeling.get(Coordinate::new(0, 0)).unwrap();
        for row in 0..2 {
            for col in 0..2 {
                assert_eq!(labeling.get(Coordinate::new(row, col)), Some(id));
            }
        }
    }

    #[test]
    fn separated_cells_are_distinct_islands() {
        let labeling = scan(&["o~o"]);
        assert_eq!(labeling.island_count(), 2);
        assert_ne!(
            labeling.get(Coordinate::new(0, 0)),
            labeling.get(Coordinate::new(0, 2)),
        );
    }

    #[test]
    fn all_water_has_no_islands() {
        let labeling = scan(&["~~~", "~~~"]);
        assert_eq!(labeling.island_count(), 0);
        assert!(labeling.islands().is_empty());
    }

    #[test]
    fn single_cell_island() {
        let labeling = scan(&["o"]);
        assert_eq!(labeling.island_count(), 1);
        let islands = labeling.islands();
        assert_eq!(islands.len(), 1);
        assert_eq!(islands[&IslandId::new(1)], vec![Coordinate::new(0, 0)]);
    }

    #[test]
    fn land_is_labeled_and_water_is_not() {
        let grid = Grid::parse(vec!["o~o~", "~oo~", "~~~o"]).unwrap();
        let labeling = Labeling::scan(&grid);
        for row in grid.dimensions().iter_coordinates() {
            for coord in row {
                assert_eq!(
                    labeling.get(coord).is_some(),
                    grid.terrain(coord) == Terrain::Land,
                    "label mismatch at {:?}",
                    coord,
                );
            }
        }
    }

    #[test]
    fn ids_are_contiguous_from_one() {
        let labeling = scan(&["o~o~o", "~~~~~", "o~o~o"]);
        assert_eq!(labeling.island_count(), 6);
        let islands = labeling.islands();
        assert_eq!(islands.len(), 6);
        for id in 1..=6 {
            assert!(islands.contains_key(&IslandId::new(id)));
        }
    }

    #[test]
    fn ids_are_assigned_in_scan_order() {
        let labeling = scan(&["o~o", "~~~", "o~~"]);
        assert_eq!(labeling.get(Coordinate::new(0, 0)), Some(IslandId::new(1)));
        assert_eq!(labeling.get(Coordinate::new(0, 2)), Some(IslandId::new(2)));
        assert_eq!(labeling.get(Coordinate::new(2, 0)), Some(IslandId::new(3)));
    }

    #[test]
    fn ring_around_a_lake_is_one_island() {
        let labeling = scan(&["ooo", "o~o", "ooo"]);
        assert_eq!(labeling.island_count(), 1);
        assert_eq!(labeling.get(Coordinate::new(1, 1)), None);
    }

    #[test]
    fn island_lists_are_in_row_major_order() {
        // Four cells joined only through diagonal adjacency.
        let labeling = scan(&["~o~", "o~o", "~o~"]);
        assert_eq!(labeling.island_count(), 1);
        let islands = labeling.islands();
        assert_eq!(
            islands[&IslandId::new(1)],
            vec![
                Coordinate::new(0, 1),
                Coordinate::new(1, 0),
                Coordinate::new(1, 2),
                Coordinate::new(2, 1),
            ]
        );
    }

    #[test]
    fn rescanning_gives_the_same_partition() {
        let grid = Grid::parse(vec!["oo~~o", "~o~o~", "o~~oo"]).unwrap();
        let first = Labeling::scan(&grid);
        let second = Labeling::scan(&grid);
        assert_eq!(first.island_count(), second.island_count());
        assert_eq!(first.islands(), second.islands());
    }

    #[test]
    fn spiral_land_is_a_single_island() {
        let labeling = scan(&["ooooo", "~~~~o", "ooo~o", "o~~~o", "ooooo"]);
        assert_eq!(labeling.island_count(), 1);
    }

    #[test]
    fn render_shows_ids_and_water() {
        let labeling = scan(&["o~o", "~~~", "~oo"]);
        assert_eq!(labeling.to_string(), "1_2\n___\n_33");
    }

    #[test]
    fn out_of_bounds_cells_have_no_label() {
        let labeling = scan(&["oo"]);
        assert_eq!(labeling.get(Coordinate::new(1, 0)), None);
        assert_eq!(labeling.get(Coordinate::new(0, 2)), None);
    }

    #[test]
    fn large_island_does_not_exhaust_call_depth() {
        // A 200x200 solid block exercises the explicit worklist on one big component.
        let row = "o".repeat(200);
        let rows: Vec<&str> = (0..200).map(|_| row.as_str()).collect();
        let labeling = scan(&rows);
        assert_eq!(labeling.island_count(), 1);
        assert_eq!(islands_total(&labeling), 200 * 200);
    }

    fn islands_total(labeling: &Labeling) -> usize {
        labeling.islands().values().map(|cells| cells.len()).sum()
    }
}
