//! Two-sample Kolmogorov-Smirnov statistic.
//!
//! `D = sup_x |F_a(x) - F_b(x)|` over the empirical CDFs of the raw samples.
//! Only the statistic is reported; no p-value or decision is derived.

/// Compute the two-sample KS statistic.
///
/// Both inputs are sorted copies; the walk advances past every tied value
/// in both samples before comparing, so identical samples give exactly 0.
/// An empty input yields 0.
pub fn ks_statistic(sample_a: &[f64], sample_b: &[f64]) -> f64 {
    if sample_a.is_empty() || sample_b.is_empty() {
        return 0.0;
    }

    let mut a = sample_a.to_vec();
    let mut b = sample_b.to_vec();
    a.sort_by(f64::total_cmp);
    b.sort_by(f64::total_cmp);

    let len_a = a.len() as f64;
    let len_b = b.len() as f64;

    let mut ia = 0;
    let mut ib = 0;
    let mut stat: f64 = 0.0;

    while ia < a.len() && ib < b.len() {
        let x = a[ia].min(b[ib]);
        while ia < a.len() && a[ia] <= x {
            ia += 1;
        }
        while ib < b.len() && b[ib] <= x {
            ib += 1;
        }

        let diff = (ia as f64 / len_a - ib as f64 / len_b).abs();
        stat = stat.max(diff);
    }

    // Once one side is exhausted the other ECDF only climbs toward 1,
    // so the gap can only shrink from here.
    stat.clamp(0.0, 1.0)
}
