use crate::model::profile::ScoreProfile;

pub fn clip(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

pub fn normalize_dtw(value: f64, scale: f64) -> f64 {
    1.0 - (value / scale).min(1.0)
}

pub fn trend_score(mean_t_r2: f64, mean_t_dtw: f64, profile: &ScoreProfile) -> f64 {
    (clip(mean_t_r2, -1.0, 1.0) + normalize_dtw(mean_t_dtw, profile.dtw_scale)) / 2.0
}

// Spectral and max-lag correlations are already bounded near [-1, 1]; they
// are averaged without clipping, unlike the trend side.
pub fn seasonal_score(mean_s_spectral_corr: f64, mean_s_maxlag_corr: f64) -> f64 {
    (mean_s_spectral_corr + mean_s_maxlag_corr) / 2.0
}

pub fn overall_score(trend: f64, seasonal: f64, profile: &ScoreProfile) -> f64 {
    profile.trend_weight * trend + profile.seasonal_weight * seasonal
}
