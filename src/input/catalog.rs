use std::collections::HashMap;

use crate::input::schema::{MethodMeta, ScenarioMeta, SuitesFile};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodFilter {
    All,
    Needs,
    Free,
}

#[derive(Debug, Clone)]
pub struct MethodDisplay {
    pub display_name: String,
    pub needs_period: bool,
}

#[derive(Debug, Clone)]
pub struct MethodCatalog {
    methods: Vec<MethodMeta>,
    by_name: HashMap<String, usize>,
}

impl MethodCatalog {
    pub fn new(methods: Vec<MethodMeta>) -> Self {
        let mut by_name = HashMap::with_capacity(methods.len());
        for (idx, method) in methods.iter().enumerate() {
            if by_name.contains_key(&method.method_name) {
                tracing::warn!(
                    "duplicate method entry in catalog; keeping first: {}",
                    method.method_name
                );
                continue;
            }
            by_name.insert(method.method_name.clone(), idx);
        }
        Self { methods, by_name }
    }

    pub fn get(&self, method_name: &str) -> Option<&MethodMeta> {
        self.by_name.get(method_name).map(|&idx| &self.methods[idx])
    }

    // Absent metadata is a normal case: the bare name stands in for the
    // display name and the method is assumed period-free.
    pub fn display_for(&self, method_name: &str) -> MethodDisplay {
        match self.get(method_name) {
            Some(meta) => MethodDisplay {
                display_name: meta.display_name.clone(),
                needs_period: meta.needs_period,
            },
            None => MethodDisplay {
                display_name: method_name.to_string(),
                needs_period: false,
            },
        }
    }

    pub fn browse(&self, period: PeriodFilter, query: &str) -> Vec<&MethodMeta> {
        let needle = query.trim().to_lowercase();
        self.methods
            .iter()
            .filter(|method| {
                match period {
                    PeriodFilter::All => {}
                    PeriodFilter::Needs => {
                        if !method.needs_period {
                            return false;
                        }
                    }
                    PeriodFilter::Free => {
                        if method.needs_period {
                            return false;
                        }
                    }
                }
                if needle.is_empty() {
                    return true;
                }
                method.method_name.to_lowercase().contains(&needle)
                    || method.display_name.to_lowercase().contains(&needle)
                    || method
                        .expected_strengths
                        .iter()
                        .any(|item| item.to_lowercase().contains(&needle))
            })
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct ScenarioCatalog {
    scenarios: Vec<ScenarioMeta>,
    by_id: HashMap<String, usize>,
}

impl ScenarioCatalog {
    pub fn new(scenarios: Vec<ScenarioMeta>) -> Self {
        let mut by_id = HashMap::with_capacity(scenarios.len());
        for (idx, scenario) in scenarios.iter().enumerate() {
            if by_id.contains_key(&scenario.scenario_id) {
                tracing::warn!(
                    "duplicate scenario entry in catalog; keeping first: {}",
                    scenario.scenario_id
                );
                continue;
            }
            by_id.insert(scenario.scenario_id.clone(), idx);
        }
        Self { scenarios, by_id }
    }

    pub fn get(&self, scenario_id: &str) -> Option<&ScenarioMeta> {
        self.by_id.get(scenario_id).map(|&idx| &self.scenarios[idx])
    }

    pub fn browse(&self, query: &str) -> Vec<&ScenarioMeta> {
        let needle = query.trim().to_lowercase();
        self.scenarios
            .iter()
            .filter(|scenario| {
                if needle.is_empty() {
                    return true;
                }
                scenario.scenario_id.to_lowercase().contains(&needle)
                    || scenario.description.to_lowercase().contains(&needle)
                    || scenario
                        .tags
                        .iter()
                        .any(|tag| tag.to_lowercase().contains(&needle))
            })
            .collect()
    }
}

pub fn scenario_suites(suites: &SuitesFile) -> HashMap<String, Vec<String>> {
    let mut map: HashMap<String, Vec<String>> = HashMap::new();
    for suite in &suites.suites {
        for scenario_id in &suite.scenario_ids {
            map.entry(scenario_id.clone())
                .or_default()
                .push(suite.suite_id.clone());
        }
    }
    map
}

pub fn reproduce_command(
    suite_id: &str,
    method_name: &str,
    scenario: Option<&ScenarioMeta>,
) -> String {
    let seed = scenario.map(|s| s.default_seed).unwrap_or(0);
    let samples = scenario.map(|s| s.default_samples).unwrap_or(40);
    let length = scenario.map(|s| s.default_length).unwrap_or(960);
    format!(
        "python -m tsdecomp suite_run \\\n  --suite {suite_id} \\\n  --methods {method_name} \\\n  --seed {seed} \\\n  --n_samples {samples} \\\n  --length {length}\n\npython -m tsdecomp export \\\n  --in runs/ \\\n  --format leaderboard_csv \\\n  --out_file leaderboard_{suite_id}.csv"
    )
}
