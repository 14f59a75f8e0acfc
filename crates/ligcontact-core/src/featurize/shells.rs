use super::distances::euclidean;
use ndarray::{Array1, ArrayView2};
use thiserror::Error;

/// Lower bound of the first shell.
pub const SHELL_START: f64 = 1.0;
/// Shell lower bounds stay strictly below this value.
pub const SHELL_STOP: f64 = 31.0;
/// Width of every shell. Independent of the cutoff, which only sets the step
/// between lower bounds: a cutoff below 0.5 gives overlapping shells, one above
/// 0.5 leaves gaps.
pub const SHELL_WIDTH: f64 = 0.5;
pub const DEFAULT_CUTOFF: f64 = 0.5;
pub const MAX_SHELLS: usize = 100_000;

#[derive(Debug, Error, PartialEq)]
pub enum ShellError {
    #[error("cutoff must be a positive, finite number, got {0}")]
    InvalidCutoff(f64),

    #[error("cutoff {cutoff} yields {count} shells, more than the limit of {}", MAX_SHELLS)]
    TooManyShells { cutoff: f64, count: f64 },
}

/// Distance shells: lower bounds `SHELL_START + k · cutoff` for every `k` with
/// the bound below `SHELL_STOP`, each covering `[lower, lower + SHELL_WIDTH)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellConfig {
    cutoff: f64,
    lower_bounds: Vec<f64>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self::from_valid_cutoff(DEFAULT_CUTOFF)
    }
}

impl ShellConfig {
    pub fn new(cutoff: f64) -> Result<Self, ShellError> {
        if !cutoff.is_finite() || cutoff <= 0.0 {
            return Err(ShellError::InvalidCutoff(cutoff));
        }
        let count = ((SHELL_STOP - SHELL_START) / cutoff).ceil();
        if count > MAX_SHELLS as f64 {
            return Err(ShellError::TooManyShells { cutoff, count });
        }
        Ok(Self::from_valid_cutoff(cutoff))
    }

    // Filled the way `numpy.arange(1, 31, cutoff)` fills a float range: the second
    // value is `start + step`, later ones `start + k * (second - start)`.
    fn from_valid_cutoff(cutoff: f64) -> Self {
        let count = ((SHELL_STOP - SHELL_START) / cutoff).ceil() as usize;
        let second = SHELL_START + cutoff;
        let delta = second - SHELL_START;
        let lower_bounds = (0..count)
            .map(|k| match k {
                0 => SHELL_START,
                1 => second,
                _ => SHELL_START + k as f64 * delta,
            })
            .collect();
        Self {
            cutoff,
            lower_bounds,
        }
    }

    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }
    pub fn num_shells(&self) -> usize {
        self.lower_bounds.len()
    }
    pub fn lower_bounds(&self) -> &[f64] {
        &self.lower_bounds
    }
    /// `(lower, upper)` of shell `k`; the upper bound is exclusive.
    pub fn bounds(&self, k: usize) -> (f64, f64) {
        let lower = self.lower_bounds[k];
        (lower, lower + SHELL_WIDTH)
    }

    /// Sum of `1/d` per shell over `distances`, added in slice order.
    pub fn shell_sums(&self, distances: &[f64]) -> Array1<f64> {
        let mut sums = vec![0f64; self.num_shells()];
        for &distance in distances {
            self.accumulate(distance, &mut sums);
        }
        Array1::from(sums)
    }

    /// Same result as `shell_sums(&pairwise_distances(ligand, protein))`, without
    /// materialising the `N · M` distances.
    pub fn bin_pair(&self, ligand: ArrayView2<f64>, protein: ArrayView2<f64>) -> Array1<f64> {
        let mut sums = vec![0f64; self.num_shells()];
        for l in ligand.rows() {
            for p in protein.rows() {
                self.accumulate(euclidean(l, p), &mut sums);
            }
        }
        Array1::from(sums)
    }

    fn accumulate(&self, distance: f64, sums: &mut [f64]) {
        // also rejects NaN and coincident atoms, so 1/0 is never taken
        if !(distance >= SHELL_START) {
            return;
        }
        // first shell that could contain `distance`, minus one for rounding slack
        let first = ((distance - SHELL_WIDTH - SHELL_START) / self.cutoff).floor() - 1.0;
        let first = if first > 0.0 { first as usize } else { 0 };

        for (lower, sum) in self.lower_bounds.iter().zip(sums.iter_mut()).skip(first) {
            if *lower > distance {
                break;
            }
            if distance < lower + SHELL_WIDTH {
                *sum += 1.0 / distance;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pairwise_distances;
    use ndarray::array;

    #[test]
    fn test_default_shells() {
        let shells = ShellConfig::default();
        assert_eq!(shells.num_shells(), 60);
        assert_eq!(shells.bounds(0), (1.0, 1.5));
        assert_eq!(shells.bounds(59), (30.5, 31.0));
        assert_eq!(shells, ShellConfig::new(0.5).unwrap());
    }

    #[test]
    fn test_cutoff_is_step_only() {
        let shells = ShellConfig::new(0.25).unwrap();
        assert_eq!(shells.num_shells(), 120);
        assert_eq!(shells.bounds(1), (1.25, 1.75));

        let shells = ShellConfig::new(1.0).unwrap();
        assert_eq!(shells.num_shells(), 30);
        assert_eq!(shells.bounds(1), (2.0, 2.5));

        // same count as numpy.arange(1, 31, 0.7)
        assert_eq!(ShellConfig::new(0.7).unwrap().num_shells(), 43);
    }

    #[test]
    fn test_invalid_cutoff() {
        assert_eq!(ShellConfig::new(0.0), Err(ShellError::InvalidCutoff(0.0)));
        assert_eq!(ShellConfig::new(-0.5), Err(ShellError::InvalidCutoff(-0.5)));
        assert!(ShellConfig::new(f64::NAN).is_err());
        assert!(ShellConfig::new(f64::INFINITY).is_err());
        assert!(matches!(
            ShellConfig::new(1e-9),
            Err(ShellError::TooManyShells { .. })
        ));
    }

    #[test]
    fn test_single_contact() {
        let shells = ShellConfig::default();
        let sums = shells.shell_sums(&[1.2]);
        assert_eq!(sums.len(), 60);
        assert_eq!(sums[0], 1.0 / 1.2);
        assert!(sums.iter().skip(1).all(|&v| v == 0.0));
    }

    #[test]
    fn test_shell_edges() {
        let shells = ShellConfig::default();
        // lower bounds are inclusive, upper bounds exclusive
        let sums = shells.shell_sums(&[1.0, 1.5, 30.5]);
        assert_eq!(sums[0], 1.0);
        assert_eq!(sums[1], 1.0 / 1.5);
        assert_eq!(sums[59], 1.0 / 30.5);

        // out of range on either side, and coincident atoms
        let sums = shells.shell_sums(&[0.0, 0.5, 0.999_999, 31.0, 45.0, f64::NAN]);
        assert!(sums.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_overlapping_shells() {
        let shells = ShellConfig::new(0.25).unwrap();
        let sums = shells.shell_sums(&[1.3]);
        // [1.0, 1.5) and [1.25, 1.75)
        assert_eq!(sums[0], 1.0 / 1.3);
        assert_eq!(sums[1], 1.0 / 1.3);
        assert_eq!(sums.iter().filter(|&&v| v != 0.0).count(), 2);
    }

    #[test]
    fn test_gapped_shells() {
        let shells = ShellConfig::new(1.0).unwrap();
        // 1.7 sits between [1.0, 1.5) and [2.0, 2.5)
        let sums = shells.shell_sums(&[1.7, 2.2]);
        assert_eq!(sums[0], 0.0);
        assert_eq!(sums[1], 1.0 / 2.2);
    }

    #[test]
    fn test_accumulation_in_order() {
        let shells = ShellConfig::default();
        let distances = [1.1, 1.2, 1.3, 1.45];
        let expected = 0.0 + 1.0 / 1.1 + 1.0 / 1.2 + 1.0 / 1.3 + 1.0 / 1.45;
        assert_eq!(shells.shell_sums(&distances)[0], expected);
    }

    #[test]
    fn test_bin_pair_matches_flat_distances() {
        let shells = ShellConfig::new(0.3).unwrap();
        let ligand = array![[0.0, 0.0, 0.0], [1.5, -0.7, 2.2], [3.1, 4.1, -5.9]];
        let protein = array![
            [1.2, 0.0, 0.0],
            [0.0, 0.0, 0.0],
            [7.3, 2.2, -1.0],
            [12.0, 14.5, 3.3],
            [-2.6, 5.3, 5.8]
        ];
        let streamed = shells.bin_pair(ligand.view(), protein.view());
        let flat = shells.shell_sums(&pairwise_distances(ligand.view(), protein.view()));
        assert_eq!(streamed, flat);
        assert!(streamed.iter().all(|&v| v >= 0.0));
    }

    #[test]
    fn test_every_shell_is_reachable() {
        for cutoff in [0.25, 0.5, 0.7, 1.0] {
            let shells = ShellConfig::new(cutoff).unwrap();
            let midpoints: Vec<f64> = shells
                .lower_bounds()
                .iter()
                .map(|l| l + SHELL_WIDTH / 2.0)
                .collect();
            let sums = shells.shell_sums(&midpoints);
            assert!(sums.iter().all(|&v| v > 0.0), "cutoff {cutoff}");
        }
    }
}
