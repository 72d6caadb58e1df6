use crate::compare::{MAX_SELECTED, MIN_COMPARE};
use crate::model::row::AggregateRow;
use crate::pipeline::stage7_report::Stage7Input;
use crate::report::{coverage_label, format_metric_3};

pub fn render_summary_text(input: &Stage7Input<'_>) -> String {
    let mut out = String::new();

    out.push_str("Time-Series Decomposition Leaderboard\n");
    out.push_str("=====================================\n\n");

    out.push_str(&format!(
        "Suite: {} [{}] ({})\n",
        input.suite_name, input.suite_id, input.suite_version
    ));
    if !input.suite_description.is_empty() {
        out.push_str(&format!("{}\n", input.suite_description));
    }
    out.push_str(&format!(
        "View: {} - {}\n",
        input.view.name(),
        input.view.label()
    ));
    out.push_str(&format!("Scenario: {}\n", input.scenario_label));
    let search = input.search.trim();
    if search.is_empty() {
        out.push_str("Search: (none)\n");
    } else {
        out.push_str(&format!("Search: {search}\n"));
    }
    out.push_str(&format!(
        "Rows: {}  Methods: {}\n\n",
        input.filtered_row_count,
        input.ranked.len()
    ));

    out.push_str("1. Global ranking\n");
    if input.ranked.is_empty() {
        out.push_str("no data\n");
    } else {
        push_table(&mut out, input.ranked, "");
    }
    out.push('\n');

    out.push_str("2. Scenario leaderboards\n");
    for board in input.boards {
        match &board.family {
            Some(family) => out.push_str(&format!("[{}] {}\n", board.scenario_id, family)),
            None => out.push_str(&format!("[{}]\n", board.scenario_id)),
        }
        if board.rows.is_empty() {
            out.push_str("  no data\n");
        } else {
            push_table(&mut out, &board.rows, "  ");
        }
    }
    out.push('\n');

    out.push_str("3. Comparison\n");
    if input.compare.is_empty() {
        out.push_str(&format!(
            "No methods selected (pick {MIN_COMPARE}-{MAX_SELECTED}).\n"
        ));
    } else {
        if input.compare.len() < MIN_COMPARE {
            out.push_str(&format!(
                "Only {} method selected; pick at least {MIN_COMPARE} for a side-by-side view.\n",
                input.compare.len()
            ));
        }
        push_table(&mut out, input.compare.iter().copied(), "");
    }
    out.push('\n');

    out.push_str("4. Downloads\n");
    out.push_str(&format!("JSON: {}\n", input.downloads.json));
    out.push_str(&format!("CSV:  {}\n", input.downloads.csv));

    out
}

fn push_table<'a, I>(out: &mut String, rows: I, indent: &str)
where
    I: IntoIterator<Item = &'a AggregateRow>,
{
    out.push_str(&format!(
        "{indent}{:>4}  {:<24} {:>9} {:>9} {:>9} {:>9} {:>9}  {}\n",
        "rank", "method", "trend_r2", "trend_dtw", "spectral", "maxlag", "overall", "coverage"
    ));
    for (pos, row) in rows.into_iter().enumerate() {
        out.push_str(&format!(
            "{indent}{:>4}  {:<24} {:>9} {:>9} {:>9} {:>9} {:>9}  {}\n",
            pos + 1,
            row.display_name,
            format_metric_3(row.mean_t_r2),
            format_metric_3(row.mean_t_dtw),
            format_metric_3(row.mean_s_spectral_corr),
            format_metric_3(row.mean_s_maxlag_corr),
            format_metric_3(row.overall_score),
            coverage_label(row.coverage_count, row.coverage_total),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::view::ViewMode;
    use crate::pipeline::stage6_breakdown::ScenarioBoard;
    use crate::report::download_links;

    fn agg(name: &str, coverage_total: usize) -> AggregateRow {
        AggregateRow {
            method_name: name.to_string(),
            display_name: name.to_uppercase(),
            needs_period: false,
            method_config_json: "{}".to_string(),
            row_count: 2,
            coverage_count: 1,
            coverage_total,
            mean_t_r2: 0.95,
            mean_t_dtw: 0.2,
            mean_s_spectral_corr: 0.8,
            mean_s_maxlag_corr: 0.7,
            mean_s_r2: 0.0,
            trend_score: 0.863889,
            seasonal_score: 0.75,
            overall_score: 0.806944,
        }
    }

    fn input<'a>(
        ranked: &'a [AggregateRow],
        boards: &'a [ScenarioBoard],
        compare: &'a [&'a AggregateRow],
    ) -> Stage7Input<'a> {
        Stage7Input {
            tool_name: "tsdecomp-rank",
            tool_version: "0.0.0",
            suite_id: "core",
            suite_name: "Core",
            suite_description: "Core scenarios",
            suite_version: "v1.0.0",
            view: ViewMode::Overall,
            scenario_label: "all",
            search: "",
            filtered_row_count: 2,
            ranked,
            boards,
            compare,
            downloads: download_links("core"),
        }
    }

    #[test]
    fn test_empty_scenario_board_renders_no_data() {
        let ranked = vec![agg("stl", 2)];
        let boards = vec![ScenarioBoard {
            scenario_id: "s2".to_string(),
            family: None,
            rows: vec![],
        }];
        let text = render_summary_text(&input(&ranked, &boards, &[]));
        assert!(text.contains("[s2]\n  no data"));
    }

    #[test]
    fn test_coverage_ratio_and_bare_count() {
        let ranked = vec![agg("stl", 5)];
        let boards = vec![ScenarioBoard {
            scenario_id: "s1".to_string(),
            family: Some("trend+cycle".to_string()),
            rows: vec![agg("stl", 0)],
        }];
        let text = render_summary_text(&input(&ranked, &boards, &[]));
        assert!(text.contains("[s1] trend+cycle"));
        assert!(text.contains("1/5"));
        // The single-scenario board omits the ratio.
        let board_section = text.split("[s1]").nth(1).unwrap();
        assert!(!board_section.contains("1/0"));
    }

    #[test]
    fn test_comparison_hints() {
        let ranked = vec![agg("stl", 2)];
        let text = render_summary_text(&input(&ranked, &[], &[]));
        assert!(text.contains("No methods selected (pick 2-5)."));

        let one: Vec<&AggregateRow> = ranked.iter().collect();
        let text = render_summary_text(&input(&ranked, &[], &one));
        assert!(text.contains("pick at least 2"));
    }
}
