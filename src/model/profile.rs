#[derive(Debug, Clone)]
pub struct ScoreProfile {
    pub dtw_scale: f64,
    pub trend_weight: f64,
    pub seasonal_weight: f64,
}

impl ScoreProfile {
    pub fn default_v1() -> Self {
        Self {
            dtw_scale: 0.9,
            trend_weight: 0.5,
            seasonal_weight: 0.5,
        }
    }
}
