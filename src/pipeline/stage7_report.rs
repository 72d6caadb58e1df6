use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::model::row::AggregateRow;
use crate::model::view::ViewMode;
use crate::pipeline::stage6_breakdown::ScenarioBoard;
use crate::report::DownloadLinks;
use crate::report::csv::render_table_csv;
use crate::report::json::render_report_json;
use crate::report::text::render_summary_text;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct Stage7Input<'a> {
    pub tool_name: &'a str,
    pub tool_version: &'a str,
    pub suite_id: &'a str,
    pub suite_name: &'a str,
    pub suite_description: &'a str,
    pub suite_version: &'a str,
    pub view: ViewMode,
    pub scenario_label: &'a str,
    pub search: &'a str,
    pub filtered_row_count: usize,
    pub ranked: &'a [AggregateRow],
    pub boards: &'a [ScenarioBoard],
    pub compare: &'a [&'a AggregateRow],
    pub downloads: DownloadLinks,
}

pub fn write_reports(input: &Stage7Input<'_>, out_dir: &Path) -> Result<(), ReportError> {
    fs::create_dir_all(out_dir)?;

    let json_path = out_dir.join(format!("leaderboard_{}.report.json", input.suite_id));
    write_text(&json_path, &render_report_json(input)?)?;
    info!("wrote {}", json_path.display());

    let csv_path = out_dir.join(format!("leaderboard_{}.csv", input.suite_id));
    write_text(&csv_path, &render_table_csv(input.ranked))?;
    info!("wrote {}", csv_path.display());

    let text_path = out_dir.join("summary.txt");
    write_text(&text_path, &render_summary_text(input))?;
    info!("wrote {}", text_path.display());

    Ok(())
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    Ok(())
}
