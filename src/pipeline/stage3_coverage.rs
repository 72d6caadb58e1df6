use std::collections::{HashMap, HashSet};

use crate::input::schema::EvaluationRow;

// Callers pass the suite-level row set here; scenario filtering happens
// downstream, so a view scoped to one scenario still shows each method's
// true breadth.
pub fn coverage_counts<'a, I>(rows: I) -> HashMap<String, usize>
where
    I: IntoIterator<Item = &'a EvaluationRow>,
{
    let mut seen: HashMap<&str, HashSet<&str>> = HashMap::new();
    for row in rows {
        seen.entry(row.method_name.as_str())
            .or_default()
            .insert(row.scenario_id.as_str());
    }
    seen.into_iter()
        .map(|(method, scenarios)| (method.to_string(), scenarios.len()))
        .collect()
}
