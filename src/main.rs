mod compare;
mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};

use crate::compare::{ComparisonSelection, MAX_SELECTED};
use crate::input::catalog::{
    MethodCatalog, PeriodFilter, ScenarioCatalog, reproduce_command, scenario_suites,
};
use crate::input::{load_bundle, load_leaderboard, load_methods, load_scenarios, load_suites};
use crate::model::profile::ScoreProfile;
use crate::model::view::ViewMode;
use crate::pipeline::stage2_filter::{RowQuery, ScenarioSelection, filter_rows};
use crate::pipeline::stage3_coverage::coverage_counts;
use crate::pipeline::stage4_aggregate::{Stage4Inputs, run_stage4};
use crate::pipeline::stage5_rank::rank;
use crate::pipeline::stage6_breakdown::{Stage6Inputs, run_stage6, tier_breakdown};
use crate::pipeline::stage7_report::{Stage7Input, write_reports};
use crate::report::download_links;

#[derive(Parser)]
#[command(name = "tsdecomp-rank", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    Run(RunArgs),
    Methods(MethodsArgs),
    Scenarios(ScenariosArgs),
}

#[derive(Args)]
struct RunArgs {
    #[arg(long)]
    data: PathBuf,
    #[arg(long)]
    suite: String,
    #[arg(long)]
    out: PathBuf,
    #[arg(long, default_value = "all")]
    scenario: String,
    #[arg(long, default_value = "")]
    search: String,
    #[arg(long, default_value = "overall")]
    view: String,
    #[arg(long)]
    compare: Vec<String>,
}

#[derive(Args)]
struct MethodsArgs {
    #[arg(long)]
    data: PathBuf,
    #[arg(long, default_value = "")]
    search: String,
    #[arg(long, default_value = "all")]
    period: String,
    #[arg(long)]
    detail: Option<String>,
    #[arg(long, default_value = "core")]
    suite: String,
}

#[derive(Args)]
struct ScenariosArgs {
    #[arg(long)]
    data: PathBuf,
    #[arg(long, default_value = "")]
    search: String,
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();
    match cli.command {
        Command::Run(args) => run_leaderboard(&args),
        Command::Methods(args) => run_methods(&args),
        Command::Scenarios(args) => run_scenarios(&args),
    }
}

fn parse_view(value: &str) -> Result<ViewMode, String> {
    match value {
        "seasonal" => Ok(ViewMode::Seasonal),
        "trend" => Ok(ViewMode::Trend),
        "overall" => Ok(ViewMode::Overall),
        other => Err(format!("invalid --view {other} (use seasonal|trend|overall)")),
    }
}

fn parse_period(value: &str) -> Result<PeriodFilter, String> {
    match value {
        "all" => Ok(PeriodFilter::All),
        "needs" => Ok(PeriodFilter::Needs),
        "free" => Ok(PeriodFilter::Free),
        other => Err(format!("invalid --period {other} (use all|needs|free)")),
    }
}

fn run_leaderboard(args: &RunArgs) -> Result<(), String> {
    let view = parse_view(&args.view)?;
    let bundle = load_bundle(&args.data, &args.suite).map_err(|e| e.to_string())?;
    let methods = MethodCatalog::new(bundle.methods.methods.clone());
    let scenarios = ScenarioCatalog::new(bundle.scenarios.scenarios.clone());
    let profile = ScoreProfile::default_v1();

    let scenario = if args.scenario == "all" {
        ScenarioSelection::All
    } else {
        if !bundle.suite.scenario_ids.iter().any(|id| id == &args.scenario) {
            warn!(
                "scenario {} is not in suite {}; the filtered table will be empty",
                args.scenario, args.suite
            );
        }
        ScenarioSelection::One(args.scenario.clone())
    };
    let query = RowQuery {
        scenario,
        search: args.search.clone(),
    };

    // Coverage is counted before the scenario filter is applied.
    let coverage = coverage_counts(bundle.leaderboard.rows.iter());
    let filtered = filter_rows(&bundle.leaderboard.rows, &query);
    let aggregates = run_stage4(&Stage4Inputs {
        rows: &filtered,
        methods: &methods,
        coverage: &coverage,
        coverage_total: bundle.suite.scenario_ids.len(),
        profile: &profile,
    });
    let ranked = rank(aggregates, view);

    let boards = run_stage6(&Stage6Inputs {
        suite: &bundle.suite,
        rows: &bundle.leaderboard.rows,
        methods: &methods,
        scenarios: &scenarios,
        profile: &profile,
        view,
    });

    let mut selection = ComparisonSelection::new();
    for name in &args.compare {
        if !selection.toggle(name) {
            warn!(
                "comparison set is full ({MAX_SELECTED} methods); ignoring {}",
                name
            );
        }
    }
    if !selection.is_empty() {
        info!(
            "comparing {} methods: {}",
            selection.len(),
            selection.selected().join(", ")
        );
    }
    let compare_rows = selection.resolve(&ranked);

    let input = Stage7Input {
        tool_name: "tsdecomp-rank",
        tool_version: env!("CARGO_PKG_VERSION"),
        suite_id: &bundle.suite.suite_id,
        suite_name: &bundle.suite.name,
        suite_description: &bundle.suite.description,
        suite_version: &bundle.leaderboard.suite_version,
        view,
        scenario_label: &args.scenario,
        search: &args.search,
        filtered_row_count: filtered.len(),
        ranked: &ranked,
        boards: &boards,
        compare: &compare_rows,
        downloads: download_links(&bundle.suite.suite_id),
    };
    write_reports(&input, &args.out).map_err(|e| e.to_string())?;

    Ok(())
}

fn run_methods(args: &MethodsArgs) -> Result<(), String> {
    let methods_file = load_methods(&args.data).map_err(|e| e.to_string())?;
    let catalog = MethodCatalog::new(methods_file.methods);

    if let Some(method_name) = &args.detail {
        return print_method_detail(args, &catalog, method_name);
    }

    let period = parse_period(&args.period)?;
    let listed = catalog.browse(period, &args.search);
    println!("{} methods", listed.len());
    for method in listed {
        println!(
            "{:<16} {:<28} {:<13} {}",
            method.method_name,
            method.display_name,
            if method.needs_period {
                "needs period"
            } else {
                "period-free"
            },
            method.expected_strengths.join(", ")
        );
    }
    Ok(())
}

fn print_method_detail(
    args: &MethodsArgs,
    catalog: &MethodCatalog,
    method_name: &str,
) -> Result<(), String> {
    let display = catalog.display_for(method_name);
    println!(
        "{} ({})",
        display.display_name,
        if display.needs_period {
            "needs period"
        } else {
            "period-free"
        }
    );
    match catalog.get(method_name) {
        Some(meta) => {
            println!("Reference: {}", meta.reference);
            println!("Wrapper: {}", meta.wrapper_path);
            println!("Default config: {}", meta.default_config);
            if !meta.known_signatures.is_empty() {
                println!("Known signatures: {}", meta.known_signatures.join(", "));
            }
        }
        None => {
            warn!("method {method_name} has no catalog entry; showing leaderboard data only");
        }
    }

    let suites = load_suites(&args.data).map_err(|e| e.to_string())?;
    let suite = suites
        .suites
        .iter()
        .find(|s| s.suite_id == args.suite)
        .ok_or_else(|| format!("unknown suite id {}", args.suite))?;
    let leaderboard = load_leaderboard(&args.data, &args.suite).map_err(|e| e.to_string())?;
    let scenarios_file = load_scenarios(&args.data).map_err(|e| e.to_string())?;
    let scenario_catalog = ScenarioCatalog::new(scenarios_file.scenarios);

    println!();
    println!("Per-tier means (suite {}):", args.suite);
    for stat in tier_breakdown(&leaderboard.rows, method_name) {
        if stat.row_count == 0 {
            println!("  tier {}: no benchmark data", stat.tier);
        } else {
            println!(
                "  tier {}: trend_r2={:.3} spectral={:.3} maxlag={:.3} ({} rows)",
                stat.tier,
                stat.mean_t_r2,
                stat.mean_s_spectral_corr,
                stat.mean_s_maxlag_corr,
                stat.row_count
            );
        }
    }

    let repro_scenario_id = suite.scenario_ids.first();
    let repro_scenario = repro_scenario_id.and_then(|id| scenario_catalog.get(id));
    if display.needs_period {
        if let Some(periods) = repro_scenario_id.and_then(|id| suites.declared_periods(id)) {
            let rendered = periods
                .iter()
                .map(|p| format!("{p}"))
                .collect::<Vec<_>>()
                .join(", ");
            println!();
            println!("Injected periods: {rendered}");
        }
    }
    println!();
    println!("Reproduce:");
    println!(
        "{}",
        reproduce_command(&args.suite, method_name, repro_scenario)
    );
    Ok(())
}

fn run_scenarios(args: &ScenariosArgs) -> Result<(), String> {
    let scenarios_file = load_scenarios(&args.data).map_err(|e| e.to_string())?;
    let suites = load_suites(&args.data).map_err(|e| e.to_string())?;
    let catalog = ScenarioCatalog::new(scenarios_file.scenarios);
    let membership = scenario_suites(&suites);

    let listed = catalog.browse(&args.search);
    println!("{} scenarios", listed.len());
    for scenario in listed {
        if let Some(declared) = suites.declared_tier(&scenario.scenario_id) {
            if declared != scenario.tier {
                warn!(
                    "scenario {} declares tier {} but suites.json says {}",
                    scenario.scenario_id, scenario.tier, declared
                );
            }
        }
        let in_suites = membership
            .get(&scenario.scenario_id)
            .map(|ids| ids.join(", "))
            .unwrap_or_default();
        let periods = if scenario.base_periods.is_empty() {
            "none".to_string()
        } else {
            scenario
                .base_periods
                .iter()
                .map(|p| format!("{p}"))
                .collect::<Vec<_>>()
                .join(",")
        };
        println!(
            "{:<24} tier {}  {:<20} periods: {:<14} suites: {}",
            scenario.scenario_id, scenario.tier, scenario.family, periods, in_suites
        );
        let mut notes = Vec::new();
        if !scenario.description.is_empty() {
            notes.push(scenario.description.clone());
        }
        if !scenario.patterns.is_empty() {
            notes.push(format!("patterns: {}", scenario.patterns.join(", ")));
        }
        if !scenario.stressors.is_empty() {
            notes.push(format!("stressors: {}", scenario.stressors.join(", ")));
        }
        if !scenario.tags.is_empty() {
            notes.push(format!("tags: {}", scenario.tags.join(", ")));
        }
        if !notes.is_empty() {
            println!("    {}", notes.join("  "));
        }
    }
    Ok(())
}
