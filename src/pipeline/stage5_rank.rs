use crate::model::row::AggregateRow;
use crate::model::view::ViewMode;

pub fn sort_value(row: &AggregateRow, view: ViewMode) -> f64 {
    match view {
        ViewMode::Seasonal => row.mean_s_spectral_corr,
        ViewMode::Trend => row.mean_t_r2,
        ViewMode::Overall => row.overall_score,
    }
}

// Stable sort: tied rows keep the aggregation (first-seen) order, so the
// same input always renders the same table.
pub fn rank(mut rows: Vec<AggregateRow>, view: ViewMode) -> Vec<AggregateRow> {
    rows.sort_by(|a, b| {
        sort_value(b, view)
            .partial_cmp(&sort_value(a, view))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agg(name: &str, t_r2: f64, spectral: f64, overall: f64) -> AggregateRow {
        AggregateRow {
            method_name: name.to_string(),
            display_name: name.to_string(),
            needs_period: false,
            method_config_json: "{}".to_string(),
            row_count: 1,
            coverage_count: 1,
            coverage_total: 1,
            mean_t_r2: t_r2,
            mean_t_dtw: 0.0,
            mean_s_spectral_corr: spectral,
            mean_s_maxlag_corr: 0.0,
            mean_s_r2: 0.0,
            trend_score: 0.0,
            seasonal_score: 0.0,
            overall_score: overall,
        }
    }

    #[test]
    fn test_descending_by_view_key() {
        let rows = vec![agg("a", 0.1, 0.7, 0.2), agg("b", 0.2, 0.9, 0.1)];
        let ranked = rank(rows, ViewMode::Seasonal);
        assert_eq!(ranked[0].method_name, "b");
        assert_eq!(ranked[1].method_name, "a");
    }

    #[test]
    fn test_ties_keep_pre_sort_order() {
        let rows = vec![
            agg("first", 0.5, 0.8, 0.5),
            agg("second", 0.5, 0.8, 0.5),
            agg("third", 0.5, 0.8, 0.5),
        ];
        let ranked = rank(rows, ViewMode::Seasonal);
        let names: Vec<&str> = ranked.iter().map(|r| r.method_name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_view_switch_resets_sort_key() {
        let rows = vec![agg("a", 0.9, 0.1, 0.3), agg("b", 0.1, 0.9, 0.7)];
        // Previously ranked by overall; switching views must re-sort by the
        // new view's key, not keep the stale order.
        let by_overall = rank(rows, ViewMode::Overall);
        assert_eq!(by_overall[0].method_name, "b");
        let by_trend = rank(by_overall, ViewMode::Trend);
        assert_eq!(by_trend[0].method_name, "a");
    }

    #[test]
    fn test_nan_keys_do_not_panic() {
        let rows = vec![agg("a", f64::NAN, 0.5, 0.5), agg("b", 0.2, 0.5, 0.5)];
        let ranked = rank(rows, ViewMode::Trend);
        assert_eq!(ranked.len(), 2);
    }
}
