//! Full-retention grid storage.

use std::io::{self, Write};

use super::{Grid, GridSpec};

/// Memory-intensive [`Grid`] implementation that retains every cell.
///
/// Holds all `num_t · num_s` values, so any time slice can be read back
/// after the march and the whole surface can be exported as delimited text.
///
/// # Examples
/// ```
/// use fdm_core::grid::{FullGrid, Grid, GridSpec};
///
/// let spec = GridSpec::new(0.5, 0.0, 1.0, 1.0, 0.0, 2.0).unwrap();
/// let mut grid = FullGrid::new(spec);
/// grid.set(2, 1, 7.0);
/// assert_eq!(grid.present(1), 7.0);
/// ```
#[derive(Debug, Clone)]
pub struct FullGrid {
    spec: GridSpec,
    nodes: Vec<f64>,
}

impl FullGrid {
    /// Creates a full grid with all cells initialised to zero.
    pub fn new(spec: GridSpec) -> Self {
        let nodes = vec![0.0; spec.num_t() * spec.num_s()];
        Self { spec, nodes }
    }

    #[inline]
    fn index(&self, it: usize, is: usize) -> usize {
        assert!(
            it < self.spec.num_t(),
            "time index {} out of range [0, {})",
            it,
            self.spec.num_t()
        );
        assert!(
            is < self.spec.num_s(),
            "underlying index {} out of range [0, {})",
            is,
            self.spec.num_s()
        );
        it * self.spec.num_s() + is
    }

    /// Exports the whole surface as delimited text.
    ///
    /// The first line is a header of underlying values
    /// (`time \ stock; s_min; …; s_max`), followed by one line per time
    /// index in the format of [`Grid::write_step`]. Returns the number of
    /// data lines written.
    ///
    /// # Errors
    /// Propagates any I/O error from the writer.
    pub fn export_csv<W: Write>(&self, out: &mut W) -> io::Result<usize> {
        write!(out, "time \\ stock;")?;
        for is in 0..self.spec.num_s() - 1 {
            write!(out, "{}; ", self.spec.s(is))?;
        }
        writeln!(out, "{}", self.spec.s(self.spec.num_s() - 1))?;

        let mut lines = 0;
        for it in 0..self.spec.num_t() {
            self.write_step(it, out)?;
            lines += 1;
        }
        Ok(lines)
    }
}

impl Grid for FullGrid {
    fn spec(&self) -> &GridSpec {
        &self.spec
    }

    fn get(&self, it: usize, is: usize) -> f64 {
        self.nodes[self.index(it, is)]
    }

    fn set(&mut self, it: usize, is: usize, value: f64) {
        let index = self.index(it, is);
        self.nodes[index] = value;
    }

    fn reset(&mut self) {
        self.nodes.fill(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_spec() -> GridSpec {
        GridSpec::new(0.5, 0.0, 1.0, 1.0, 0.0, 3.0).unwrap()
    }

    #[test]
    fn reset_yields_all_zeros() {
        let mut grid = FullGrid::new(small_spec());
        grid.set(1, 2, 9.0);
        grid.reset();
        for it in 0..grid.spec().num_t() {
            for is in 0..grid.spec().num_s() {
                assert_eq!(grid.get(it, is), 0.0);
            }
        }
    }

    #[test]
    fn values_survive_round_trip() {
        let mut grid = FullGrid::new(small_spec());
        grid.set(0, 0, 1.25);
        grid.set(2, 3, -4.5);
        assert_eq!(grid.get(0, 0), 1.25);
        assert_eq!(grid.get(2, 3), -4.5);
    }

    #[test]
    fn present_reads_the_last_time_slice() {
        let mut grid = FullGrid::new(small_spec());
        let last = grid.spec().num_t() - 1;
        grid.set(last, 1, 3.0);
        assert_eq!(grid.present(1), 3.0);
    }

    #[test]
    fn present_interpolated_is_linear_between_nodes() {
        let mut grid = FullGrid::new(small_spec());
        let last = grid.spec().num_t() - 1;
        grid.set(last, 1, 10.0);
        grid.set(last, 2, 20.0);
        assert_eq!(grid.present_interpolated(1.5), 15.0);
        assert_eq!(grid.present_interpolated(1.25), 12.5);
    }

    #[test]
    fn present_interpolated_clamps_at_range_edges() {
        let mut grid = FullGrid::new(small_spec());
        let last = grid.spec().num_t() - 1;
        grid.set(last, 0, -1.0);
        grid.set(last, 3, 99.0);
        assert_eq!(grid.present_interpolated(-50.0), -1.0);
        assert_eq!(grid.present_interpolated(500.0), 99.0);
    }

    #[test]
    fn export_writes_header_and_one_line_per_time_index() {
        let grid = FullGrid::new(small_spec());
        let mut out = Vec::new();
        let lines = grid.export_csv(&mut out).unwrap();
        assert_eq!(lines, grid.spec().num_t());

        let text = String::from_utf8(out).unwrap();
        let mut rows = text.lines();
        assert_eq!(rows.next().unwrap(), "time \\ stock;0; 1; 2; 3");
        assert_eq!(rows.clone().count(), grid.spec().num_t());
        assert!(rows.next().unwrap().starts_with("1;"));
    }

    #[test]
    #[should_panic(expected = "time index")]
    fn get_past_time_range_panics() {
        let grid = FullGrid::new(small_spec());
        grid.get(99, 0);
    }

    #[test]
    #[should_panic(expected = "underlying index")]
    fn set_past_underlying_range_panics() {
        let mut grid = FullGrid::new(small_spec());
        grid.set(0, 99, 1.0);
    }
}
