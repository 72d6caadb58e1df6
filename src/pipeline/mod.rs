pub mod stage2_filter;
pub mod stage3_coverage;
pub mod stage4_aggregate;
pub mod stage5_rank;
pub mod stage6_breakdown;
pub mod stage7_report;
