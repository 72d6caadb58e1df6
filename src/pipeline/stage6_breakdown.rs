use serde::Serialize;

use crate::input::catalog::{MethodCatalog, ScenarioCatalog};
use crate::input::schema::{EvaluationRow, Suite};
use crate::model::profile::ScoreProfile;
use crate::model::row::AggregateRow;
use crate::model::view::ViewMode;
use crate::pipeline::stage3_coverage::coverage_counts;
use crate::pipeline::stage4_aggregate::{Stage4Inputs, run_stage4};
use crate::pipeline::stage5_rank::rank;

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioBoard {
    pub scenario_id: String,
    pub family: Option<String>,
    pub rows: Vec<AggregateRow>,
}

#[derive(Debug, Clone)]
pub struct Stage6Inputs<'a> {
    pub suite: &'a Suite,
    pub rows: &'a [EvaluationRow],
    pub methods: &'a MethodCatalog,
    pub scenarios: &'a ScenarioCatalog,
    pub profile: &'a ScoreProfile,
    pub view: ViewMode,
}

// One board per suite scenario, in the suite's declared order. Scenarios
// with no rows still get a board, with an empty table.
pub fn run_stage6(inputs: &Stage6Inputs<'_>) -> Vec<ScenarioBoard> {
    inputs
        .suite
        .scenario_ids
        .iter()
        .map(|scenario_id| {
            let slice: Vec<&EvaluationRow> = inputs
                .rows
                .iter()
                .filter(|row| &row.scenario_id == scenario_id)
                .collect();
            // A one-scenario slice has no meaningful suite-wide ratio.
            let coverage_total = if slice.is_empty() { 0 } else { 1 };
            let coverage = coverage_counts(slice.iter().copied());
            let aggregates = run_stage4(&Stage4Inputs {
                rows: &slice,
                methods: inputs.methods,
                coverage: &coverage,
                coverage_total,
                profile: inputs.profile,
            });
            ScenarioBoard {
                scenario_id: scenario_id.clone(),
                family: inputs
                    .scenarios
                    .get(scenario_id)
                    .map(|meta| meta.family.clone()),
                rows: rank(aggregates, inputs.view),
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct TierStat {
    pub tier: i64,
    pub row_count: usize,
    pub mean_t_r2: f64,
    pub mean_s_spectral_corr: f64,
    pub mean_s_maxlag_corr: f64,
}

// Tier table for one method. Tiers come from the whole row set, so a tier
// the method never ran in still shows up, with row_count 0.
pub fn tier_breakdown(rows: &[EvaluationRow], method_name: &str) -> Vec<TierStat> {
    let mut tiers: Vec<i64> = rows.iter().map(|row| row.tier).collect();
    tiers.sort_unstable();
    tiers.dedup();

    tiers
        .into_iter()
        .map(|tier| {
            let mut count = 0usize;
            let mut sum_t_r2 = 0.0;
            let mut sum_spectral = 0.0;
            let mut sum_maxlag = 0.0;
            for row in rows {
                if row.tier != tier || row.method_name != method_name {
                    continue;
                }
                count += 1;
                sum_t_r2 += row.metric_t_r2;
                sum_spectral += row.metric_s_spectral_corr;
                sum_maxlag += row.metric_s_maxlag_corr;
            }
            let n = count.max(1) as f64;
            TierStat {
                tier,
                row_count: count,
                mean_t_r2: sum_t_r2 / n,
                mean_s_spectral_corr: sum_spectral / n,
                mean_s_maxlag_corr: sum_maxlag / n,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::testutil::{row, scenario_meta};

    fn suite(ids: &[&str]) -> Suite {
        Suite {
            suite_id: "core".to_string(),
            name: "Core".to_string(),
            scenario_ids: ids.iter().map(|s| s.to_string()).collect(),
            description: String::new(),
        }
    }

    #[test]
    fn test_boards_follow_suite_order_and_keep_empty_scenarios() {
        let rows = vec![
            row("stl", "s2", 0.9, 0.1, 0.8, 0.7),
            row("vmd", "s2", 0.7, 0.3, 0.9, 0.5),
        ];
        let suite = suite(&["s1", "s2", "s3"]);
        let methods = MethodCatalog::new(vec![]);
        let scenarios = ScenarioCatalog::new(vec![scenario_meta("s2", "trend+cycle")]);
        let profile = ScoreProfile::default_v1();
        let boards = run_stage6(&Stage6Inputs {
            suite: &suite,
            rows: &rows,
            methods: &methods,
            scenarios: &scenarios,
            profile: &profile,
            view: ViewMode::Seasonal,
        });

        assert_eq!(boards.len(), 3);
        assert_eq!(boards[0].scenario_id, "s1");
        assert!(boards[0].rows.is_empty());
        assert_eq!(boards[0].family, None);
        assert_eq!(boards[1].scenario_id, "s2");
        assert_eq!(boards[1].rows.len(), 2);
        assert_eq!(boards[1].family.as_deref(), Some("trend+cycle"));
        assert_eq!(boards[2].scenario_id, "s3");
        assert!(boards[2].rows.is_empty());

        // Seasonal view ranks vmd (0.9 spectral) over stl (0.8).
        assert_eq!(boards[1].rows[0].method_name, "vmd");
    }

    #[test]
    fn test_local_coverage_total_is_one_or_zero() {
        let rows = vec![row("stl", "s1", 0.9, 0.1, 0.8, 0.7)];
        let suite = suite(&["s1", "s2"]);
        let methods = MethodCatalog::new(vec![]);
        let scenarios = ScenarioCatalog::new(vec![]);
        let profile = ScoreProfile::default_v1();
        let boards = run_stage6(&Stage6Inputs {
            suite: &suite,
            rows: &rows,
            methods: &methods,
            scenarios: &scenarios,
            profile: &profile,
            view: ViewMode::Overall,
        });
        assert_eq!(boards[0].rows[0].coverage_total, 1);
        assert_eq!(boards[0].rows[0].coverage_count, 1);
        assert!(boards[1].rows.is_empty());
    }

    #[test]
    fn test_tier_breakdown_reports_empty_tiers() {
        let mut hard = row("stl", "s2", 0.6, 0.3, 0.5, 0.4);
        hard.tier = 3;
        let mut other = row("vmd", "s3", 0.7, 0.2, 0.6, 0.5);
        other.tier = 2;
        let rows = vec![
            row("stl", "s1", 0.9, 0.1, 0.8, 0.7),
            row("stl", "s1", 0.7, 0.1, 0.6, 0.5),
            hard,
            other,
        ];

        let stats = tier_breakdown(&rows, "stl");
        assert_eq!(stats.len(), 3);

        assert_eq!(stats[0].tier, 1);
        assert_eq!(stats[0].row_count, 2);
        assert!((stats[0].mean_t_r2 - 0.8).abs() < 1e-12);

        // Tier 2 exists in the suite but stl never ran there.
        assert_eq!(stats[1].tier, 2);
        assert_eq!(stats[1].row_count, 0);

        assert_eq!(stats[2].tier, 3);
        assert_eq!(stats[2].row_count, 1);
    }
}
