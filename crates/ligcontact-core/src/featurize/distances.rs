use ndarray::{ArrayView1, ArrayView2};

#[inline]
pub(crate) fn euclidean(a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// All `N · M` distances between the rows of `a` (`N × 3`) and `b` (`M × 3`),
/// flattened row-major: `a[0]` against every row of `b`, then `a[1]`, and so on.
pub fn pairwise_distances(a: ArrayView2<f64>, b: ArrayView2<f64>) -> Vec<f64> {
    let mut distances = Vec::with_capacity(a.nrows() * b.nrows());
    for row_a in a.rows() {
        for row_b in b.rows() {
            distances.push(euclidean(row_a, row_b));
        }
    }
    distances
}
