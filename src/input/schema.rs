use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct SuitesFile {
    pub suite_version: String,
    pub suites: Vec<Suite>,
    pub tiers: BTreeMap<String, i64>,
    pub scenario_periods: BTreeMap<String, Vec<f64>>,
}

impl SuitesFile {
    pub fn declared_tier(&self, scenario_id: &str) -> Option<i64> {
        self.tiers.get(scenario_id).copied()
    }

    pub fn declared_periods(&self, scenario_id: &str) -> Option<&[f64]> {
        self.scenario_periods
            .get(scenario_id)
            .map(|periods| periods.as_slice())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Suite {
    pub suite_id: String,
    pub name: String,
    pub scenario_ids: Vec<String>,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScenariosFile {
    pub scenarios: Vec<ScenarioMeta>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioMeta {
    pub scenario_id: String,
    pub tier: i64,
    pub base_periods: Vec<f64>,
    pub family: String,
    pub tags: Vec<String>,
    pub patterns: Vec<String>,
    pub description: String,
    pub stressors: Vec<String>,
    pub default_length: i64,
    pub default_samples: i64,
    pub default_seed: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MethodsFile {
    pub methods: Vec<MethodMeta>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MethodMeta {
    pub method_name: String,
    pub display_name: String,
    pub reference: String,
    pub needs_period: bool,
    pub default_config: serde_json::Value,
    pub wrapper_path: String,
    pub expected_strengths: Vec<String>,
    pub known_signatures: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LeaderboardFile {
    pub suite_version: String,
    pub suite_id: String,
    pub rows: Vec<EvaluationRow>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EvaluationRow {
    pub suite_version: String,
    pub suite_id: String,
    pub scenario_id: String,
    pub tier: i64,
    pub seed: i64,
    pub method_name: String,
    pub method_config_json: String,
    #[serde(rename = "metric_T_r2")]
    pub metric_t_r2: f64,
    #[serde(rename = "metric_T_dtw")]
    pub metric_t_dtw: f64,
    #[serde(rename = "metric_S_spectral_corr")]
    pub metric_s_spectral_corr: f64,
    #[serde(rename = "metric_S_maxlag_corr")]
    pub metric_s_maxlag_corr: f64,
    #[serde(rename = "metric_S_r2", default)]
    pub metric_s_r2: Option<f64>,
    pub length: i64,
    pub timestamp: String,
    #[serde(default)]
    pub package_version: Option<String>,
    #[serde(default)]
    pub git_commit: Option<String>,
    #[serde(default)]
    pub scenario_periods_json: Option<String>,
}
