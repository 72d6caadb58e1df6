use crate::input::schema::EvaluationRow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioSelection {
    All,
    One(String),
}

#[derive(Debug, Clone)]
pub struct RowQuery {
    pub scenario: ScenarioSelection,
    pub search: String,
}

// Rows arrive suite-partitioned, so only the scenario and search terms are
// checked here. Order is preserved; an empty result is a valid outcome.
pub fn filter_rows<'a>(rows: &'a [EvaluationRow], query: &RowQuery) -> Vec<&'a EvaluationRow> {
    let needle = query.search.trim().to_lowercase();
    rows.iter()
        .filter(|row| {
            if let ScenarioSelection::One(scenario_id) = &query.scenario {
                if &row.scenario_id != scenario_id {
                    return false;
                }
            }
            needle.is_empty() || row.method_name.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::testutil::row;

    #[test]
    fn test_unfiltered_keeps_everything_in_order() {
        let rows = vec![
            row("stl", "s1", 0.9, 0.1, 0.8, 0.7),
            row("vmd", "s2", 0.7, 0.3, 0.6, 0.5),
            row("ssa", "s1", 0.8, 0.2, 0.7, 0.6),
        ];
        let query = RowQuery {
            scenario: ScenarioSelection::All,
            search: String::new(),
        };
        let kept = filter_rows(&rows, &query);
        assert_eq!(kept.len(), 3);
        assert_eq!(kept[0].method_name, "stl");
        assert_eq!(kept[1].method_name, "vmd");
        assert_eq!(kept[2].method_name, "ssa");
    }

    #[test]
    fn test_scenario_filter() {
        let rows = vec![
            row("stl", "s1", 0.9, 0.1, 0.8, 0.7),
            row("stl", "s2", 0.7, 0.3, 0.6, 0.5),
        ];
        let query = RowQuery {
            scenario: ScenarioSelection::One("s2".to_string()),
            search: String::new(),
        };
        let kept = filter_rows(&rows, &query);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].scenario_id, "s2");
    }

    #[test]
    fn test_search_is_case_insensitive_and_trimmed() {
        let rows = vec![
            row("stl", "s1", 0.9, 0.1, 0.8, 0.7),
            row("mstl", "s1", 0.8, 0.2, 0.7, 0.6),
            row("vmd", "s1", 0.7, 0.3, 0.6, 0.5),
        ];
        let query = RowQuery {
            scenario: ScenarioSelection::All,
            search: "  STL ".to_string(),
        };
        let kept = filter_rows(&rows, &query);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].method_name, "stl");
        assert_eq!(kept[1].method_name, "mstl");
    }

    #[test]
    fn test_empty_result_is_valid() {
        let rows = vec![row("stl", "s1", 0.9, 0.1, 0.8, 0.7)];
        let query = RowQuery {
            scenario: ScenarioSelection::One("s9".to_string()),
            search: String::new(),
        };
        assert!(filter_rows(&rows, &query).is_empty());
    }
}
