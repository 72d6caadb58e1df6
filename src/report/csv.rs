use crate::model::row::AggregateRow;
use crate::report::format_metric_6;

const HEADER: &str = "method_name,display_name,needs_period,row_count,coverage_count,coverage_total,metric_T_r2,metric_T_dtw,metric_S_spectral_corr,metric_S_maxlag_corr,metric_S_r2,trend_score,seasonal_score,overall_score";

pub fn render_table_csv(rows: &[AggregateRow]) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');
    for row in rows {
        let fields = [
            csv_field(&row.method_name),
            csv_field(&row.display_name),
            row.needs_period.to_string(),
            row.row_count.to_string(),
            row.coverage_count.to_string(),
            row.coverage_total.to_string(),
            format_metric_6(row.mean_t_r2),
            format_metric_6(row.mean_t_dtw),
            format_metric_6(row.mean_s_spectral_corr),
            format_metric_6(row.mean_s_maxlag_corr),
            format_metric_6(row.mean_s_r2),
            format_metric_6(row.trend_score),
            format_metric_6(row.seasonal_score),
            format_metric_6(row.overall_score),
        ];
        out.push_str(&fields.join(","));
        out.push('\n');
    }
    out
}

fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
