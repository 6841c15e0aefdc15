//! Trailing moving average over one year's series

use crate::app::models::{SeriesPoint, YearSeries};

/// Average a full year's points with a trailing window
///
/// The window covers `window` consecutive points, not consecutive calendar
/// days: gaps in the source series shrink the effective day span. The first
/// `window - 1` positions have no defined average and are omitted, rather
/// than reported as misleading partial-window values. Each year is windowed
/// independently; callers truncate the result to the display range afterward,
/// which leaves the averaged values themselves unaffected.
pub fn moving_average(series: &YearSeries, window: usize) -> Vec<SeriesPoint> {
    if window == 0 || series.points.len() < window {
        return Vec::new();
    }

    let mut averages = Vec::with_capacity(series.points.len() - window + 1);
    let mut sum = 0.0;
    for (position, point) in series.points.iter().enumerate() {
        sum += point.value;
        if position + 1 >= window {
            averages.push(SeriesPoint {
                day_of_year: point.day_of_year,
                value: sum / window as f64,
            });
            sum -= series.points[position + 1 - window].value;
        }
    }
    averages
}
