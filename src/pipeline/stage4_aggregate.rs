use std::collections::{HashMap, HashSet};

use crate::input::catalog::MethodCatalog;
use crate::input::schema::EvaluationRow;
use crate::model::profile::ScoreProfile;
use crate::model::row::AggregateRow;
use crate::model::scores::{overall_score, seasonal_score, trend_score};

#[derive(Debug, Clone)]
pub struct Stage4Inputs<'a> {
    pub rows: &'a [&'a EvaluationRow],
    pub methods: &'a MethodCatalog,
    pub coverage: &'a HashMap<String, usize>,
    pub coverage_total: usize,
    pub profile: &'a ScoreProfile,
}

struct MethodAccum {
    method_name: String,
    method_config_json: String,
    row_count: usize,
    scenario_ids: HashSet<String>,
    sum_t_r2: f64,
    sum_t_dtw: f64,
    sum_s_spectral: f64,
    sum_s_maxlag: f64,
    sum_s_r2: f64,
}

impl MethodAccum {
    fn new(row: &EvaluationRow) -> Self {
        Self {
            method_name: row.method_name.clone(),
            method_config_json: row.method_config_json.clone(),
            row_count: 0,
            scenario_ids: HashSet::new(),
            sum_t_r2: 0.0,
            sum_t_dtw: 0.0,
            sum_s_spectral: 0.0,
            sum_s_maxlag: 0.0,
            sum_s_r2: 0.0,
        }
    }

    fn fold(&mut self, row: &EvaluationRow) {
        self.row_count += 1;
        self.scenario_ids.insert(row.scenario_id.clone());
        self.sum_t_r2 += row.metric_t_r2;
        self.sum_t_dtw += row.metric_t_dtw;
        self.sum_s_spectral += row.metric_s_spectral_corr;
        self.sum_s_maxlag += row.metric_s_maxlag_corr;
        // A missing seasonal R2 counts as 0 and still divides; historical
        // leaderboard outputs bake this in.
        self.sum_s_r2 += row.metric_s_r2.unwrap_or(0.0);
    }

    fn finish(self, inputs: &Stage4Inputs<'_>) -> AggregateRow {
        // Divisor floored at 1; callers check row_count to tell "no rows"
        // from "one row at zero".
        let n = self.row_count.max(1) as f64;
        let mean_t_r2 = self.sum_t_r2 / n;
        let mean_t_dtw = self.sum_t_dtw / n;
        let mean_s_spectral_corr = self.sum_s_spectral / n;
        let mean_s_maxlag_corr = self.sum_s_maxlag / n;
        let mean_s_r2 = self.sum_s_r2 / n;

        let trend = trend_score(mean_t_r2, mean_t_dtw, inputs.profile);
        let seasonal = seasonal_score(mean_s_spectral_corr, mean_s_maxlag_corr);
        let overall = overall_score(trend, seasonal, inputs.profile);

        let display = inputs.methods.display_for(&self.method_name);
        let coverage_count = inputs
            .coverage
            .get(&self.method_name)
            .copied()
            .unwrap_or(self.scenario_ids.len());

        AggregateRow {
            method_name: self.method_name,
            display_name: display.display_name,
            needs_period: display.needs_period,
            method_config_json: self.method_config_json,
            row_count: self.row_count,
            coverage_count,
            coverage_total: inputs.coverage_total,
            mean_t_r2,
            mean_t_dtw,
            mean_s_spectral_corr,
            mean_s_maxlag_corr,
            mean_s_r2,
            trend_score: trend,
            seasonal_score: seasonal,
            overall_score: overall,
        }
    }
}

// Groups in first-seen order; ranking is a separate step.
pub fn run_stage4(inputs: &Stage4Inputs<'_>) -> Vec<AggregateRow> {
    let mut groups: Vec<MethodAccum> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for row in inputs.rows {
        let idx = match index.get(&row.method_name) {
            Some(&idx) => idx,
            None => {
                groups.push(MethodAccum::new(row));
                index.insert(row.method_name.clone(), groups.len() - 1);
                groups.len() - 1
            }
        };
        groups[idx].fold(row);
    }

    groups
        .into_iter()
        .map(|accum| accum.finish(inputs))
        .collect()
}
