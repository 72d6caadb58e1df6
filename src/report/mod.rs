pub mod csv;
pub mod json;
pub mod text;

use serde::Serialize;

pub const DATA_VERSION: &str = "v1.0.0";

#[derive(Debug, Clone, Serialize)]
pub struct DownloadLinks {
    pub json: String,
    pub csv: String,
}

// Pass-through pointers to the published raw artifacts; nothing here is
// generated by this tool.
pub fn download_links(suite_id: &str) -> DownloadLinks {
    DownloadLinks {
        json: format!("data/{DATA_VERSION}/leaderboard_{suite_id}.json"),
        csv: format!("data/{DATA_VERSION}/leaderboard_{suite_id}.csv"),
    }
}

pub fn format_metric_3(v: f64) -> String {
    format!("{:.3}", v)
}

pub fn format_metric_6(v: f64) -> String {
    format!("{:.6}", v)
}

// Single-scenario boards have no suite-wide denominator; the ratio is
// omitted rather than rendered as k/0.
pub fn coverage_label(count: usize, total: usize) -> String {
    if total > 0 {
        format!("{count}/{total}")
    } else {
        count.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coverage_label() {
        assert_eq!(coverage_label(3, 5), "3/5");
        assert_eq!(coverage_label(2, 0), "2");
    }

    #[test]
    fn test_download_links() {
        let links = download_links("core");
        assert_eq!(links.json, "data/v1.0.0/leaderboard_core.json");
        assert_eq!(links.csv, "data/v1.0.0/leaderboard_core.csv");
    }

    #[test]
    fn test_metric_formats() {
        assert_eq!(format_metric_3(0.86388), "0.864");
        assert_eq!(format_metric_6(0.5), "0.500000");
    }
}
