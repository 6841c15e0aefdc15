use super::series;
use crate::app::services::series_builder::moving_average;

#[test]
fn test_window_larger_than_series_yields_nothing() {
    let s = series(2024, &[1.0; 10]);
    assert!(moving_average(&s, 30).is_empty());
}

#[test]
fn test_window_equal_to_series_yields_one_average() {
    let values: Vec<f64> = (1..=30).map(f64::from).collect();
    let s = series(2024, &values);
    let averages = moving_average(&s, 30);
    assert_eq!(averages.len(), 1);
    // mean of 1..=30
    assert_eq!(averages[0].value, 15.5);
    assert_eq!(averages[0].day_of_year, 30);
}

#[test]
fn test_trailing_window_positions() {
    let s = series(2024, &[2.0, 4.0, 6.0, 8.0]);
    let averages = moving_average(&s, 2);
    assert_eq!(averages.len(), 3);
    assert_eq!(averages[0].value, 3.0);
    assert_eq!(averages[1].value, 5.0);
    assert_eq!(averages[2].value, 7.0);
    // the first window - 1 positions are undefined and omitted
    assert_eq!(averages[0].day_of_year, 2);
}

#[test]
fn test_window_of_one_is_identity() {
    let s = series(2024, &[3.5, 7.0]);
    let averages = moving_average(&s, 1);
    assert_eq!(averages.len(), 2);
    assert_eq!(averages[0].value, 3.5);
    assert_eq!(averages[1].value, 7.0);
}

#[test]
fn test_window_of_zero_yields_nothing() {
    let s = series(2024, &[1.0, 2.0]);
    assert!(moving_average(&s, 0).is_empty());
}

#[test]
fn test_gaps_shrink_day_span_not_point_count() {
    // points on days 1, 50, 100: the window counts points, not days
    let mut s = series(2024, &[10.0, 20.0, 30.0]);
    s.points[1].day_of_year = 50;
    s.points[2].day_of_year = 100;
    let averages = moving_average(&s, 3);
    assert_eq!(averages.len(), 1);
    assert_eq!(averages[0].value, 20.0);
    assert_eq!(averages[0].day_of_year, 100);
}
