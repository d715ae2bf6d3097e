//! Chi-square statistics for checking how evenly a hash function spreads keys over buckets.
use ndarray::prelude::*;
use ndarray::{ScalarOperand, Zip};
use num_traits::{Float, NumAssignOps};
use statrs::distribution::{ChiSquared, ContinuousCDF};

/// A result of a Chi-square test.
#[derive(Debug)]
pub struct Chi2Statistic<V> {
    pub chi2: V,
    pub dof: usize,
    pub p_value: V,
}

/// Calculates the chi-square statistic.
pub fn chi2<V>(observed: &[V], expected: &[V], dof: Option<usize>) -> Chi2Statistic<V>
where
    V: Float + NumAssignOps + From<f64>,
{
    debug_assert_eq!(observed.len(), expected.len(), "Dimensions must match");
    let chi2: V = Zip::from(observed)
        .and(expected)
        .fold(0.0.into(), |acc, &obs, &exp| {
            let diff = obs - exp;
            acc + diff.powf(2.0.into()) / exp
        });

    let dof = dof.unwrap_or(observed.len() - 1);
    let dist = ChiSquared::new(dof as f64).unwrap();
    let p_value = (1.0 - dist.cdf(chi2.to_f64().unwrap())).into();

    Chi2Statistic { chi2, dof, p_value }
}

/// Performs a Chi-square uniformity test.
pub fn chi2_uniformity<'a, V, A>(observed: A) -> Chi2Statistic<V>
where
    V: Float + NumAssignOps + From<f64> + ScalarOperand,
    A: AsArray<'a, V>,
{
    let observed: ArrayView1<V> = observed.into();
    let total_sum = observed.sum();
    let num_cells = observed.len();
    let expected_value = total_sum / (num_cells as f64).into();

    let expected = Array1::<V>::from_elem(observed.dim(), expected_value);

    chi2(
        observed.to_vec().as_slice(),
        expected.as_slice().unwrap(),
        None,
    )
}

/// Counts how many of the given bucket `indices` fall into each of `num_buckets` buckets.
pub fn bucket_counts<I>(indices: I, num_buckets: usize) -> Array1<f64>
where
    I: IntoIterator<Item = usize>,
{
    let mut counts = Array1::<f64>::zeros(num_buckets);
    for idx in indices {
        debug_assert!(
            idx < num_buckets,
            r#"bucket index {} exceeds "num_buckets" {}"#,
            idx,
            num_buckets
        );
        counts[idx] += 1.0;
    }
    counts
}

/// Asserts that bucket occupancy `counts` is consistent with a uniform distribution at
/// significance level `alpha`.
pub fn assert_uniform(counts: &Array1<f64>, alpha: f64) {
    let statistic = chi2_uniformity(counts);
    assert!(
        statistic.p_value > alpha,
        "Bucket occupancy is not uniform:\n{:?}",
        statistic,
    );
}

/// Asserts that bucket occupancy `counts` deviates from a uniform distribution at
/// significance level `alpha`.
pub fn assert_not_uniform(counts: &Array1<f64>, alpha: f64) {
    let statistic = chi2_uniformity(counts);
    assert!(
        statistic.p_value <= alpha,
        "Bucket occupancy is unexpectedly uniform:\n{:?}",
        statistic,
    );
}
