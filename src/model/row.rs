use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateRow {
    pub method_name: String,
    pub display_name: String,
    pub needs_period: bool,
    pub method_config_json: String,
    pub row_count: usize,
    pub coverage_count: usize,
    pub coverage_total: usize,
    #[serde(rename = "metric_T_r2")]
    pub mean_t_r2: f64,
    #[serde(rename = "metric_T_dtw")]
    pub mean_t_dtw: f64,
    #[serde(rename = "metric_S_spectral_corr")]
    pub mean_s_spectral_corr: f64,
    #[serde(rename = "metric_S_maxlag_corr")]
    pub mean_s_maxlag_corr: f64,
    #[serde(rename = "metric_S_r2")]
    pub mean_s_r2: f64,
    pub trend_score: f64,
    pub seasonal_score: f64,
    pub overall_score: f64,
}
