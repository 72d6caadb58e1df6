use serde::Serialize;

use crate::model::row::AggregateRow;
use crate::pipeline::stage6_breakdown::ScenarioBoard;
use crate::pipeline::stage7_report::Stage7Input;
use crate::report::DownloadLinks;

#[derive(Debug, Serialize)]
struct ReportJson<'a> {
    tool: &'a str,
    tool_version: &'a str,
    suite_id: &'a str,
    suite_name: &'a str,
    suite_version: &'a str,
    query: QueryEcho<'a>,
    methods: &'a [AggregateRow],
    scenarios: &'a [ScenarioBoard],
    compare: &'a [&'a AggregateRow],
    downloads: &'a DownloadLinks,
}

#[derive(Debug, Serialize)]
struct QueryEcho<'a> {
    view: &'a str,
    scenario: &'a str,
    search: &'a str,
    row_count: usize,
}

pub fn render_report_json(input: &Stage7Input<'_>) -> Result<String, serde_json::Error> {
    let report = ReportJson {
        tool: input.tool_name,
        tool_version: input.tool_version,
        suite_id: input.suite_id,
        suite_name: input.suite_name,
        suite_version: input.suite_version,
        query: QueryEcho {
            view: input.view.name(),
            scenario: input.scenario_label,
            search: input.search,
            row_count: input.filtered_row_count,
        },
        methods: input.ranked,
        scenarios: input.boards,
        compare: input.compare,
        downloads: &input.downloads,
    };
    serde_json::to_string_pretty(&report)
}
