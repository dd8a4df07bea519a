pub struct MetricUtil;

impl MetricUtil {
    /// `part / whole` as a percentage rounded to one decimal, clamped to [0, 100].
    /// A zero `whole` yields 0.
    #[inline]
    pub fn percent(part: u64, whole: u64) -> f64 {
        if whole == 0 {
            return 0.0;
        }
        Self::clamp_percent(part as f64 / whole as f64 * 100.0)
    }

    /// Percentage of `total` that is not `available`.
    #[inline]
    pub fn used_percent(total: u64, available: u64) -> f64 {
        Self::percent(total.saturating_sub(available), total)
    }

    #[inline]
    pub fn clamp_percent(value: f64) -> f64 {
        if !value.is_finite() {
            return 0.0;
        }
        (value.clamp(0.0, 100.0) * 10.0).round() / 10.0
    }
}
