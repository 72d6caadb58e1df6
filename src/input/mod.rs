use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{info, warn};

pub mod catalog;
pub mod schema;

use schema::{LeaderboardFile, MethodsFile, ScenariosFile, Suite, SuitesFile};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("parse error in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone)]
pub struct InputBundle {
    pub suite: Suite,
    pub scenarios: ScenariosFile,
    pub methods: MethodsFile,
    pub leaderboard: LeaderboardFile,
}

pub fn load_bundle(data_dir: &Path, suite_id: &str) -> Result<InputBundle, InputError> {
    let suites = load_suites(data_dir)?;
    let suite = suites
        .suites
        .iter()
        .find(|s| s.suite_id == suite_id)
        .cloned()
        .ok_or_else(|| {
            let known = suites
                .suites
                .iter()
                .map(|s| s.suite_id.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            InputError::MissingInput(format!("unknown suite id {suite_id} (known: {known})"))
        })?;
    let scenarios = load_scenarios(data_dir)?;
    let methods = load_methods(data_dir)?;
    let leaderboard = load_leaderboard(data_dir, suite_id)?;
    if leaderboard.suite_id != suite_id {
        warn!(
            "leaderboard file declares suite {} but {} was requested; using its rows as-is",
            leaderboard.suite_id, suite_id
        );
    }
    info!(
        "loaded suite {}: {} scenarios, {} methods, {} leaderboard rows",
        suite.suite_id,
        suite.scenario_ids.len(),
        methods.methods.len(),
        leaderboard.rows.len()
    );
    Ok(InputBundle {
        suite,
        scenarios,
        methods,
        leaderboard,
    })
}

pub fn load_suites(data_dir: &Path) -> Result<SuitesFile, InputError> {
    read_json(&resolve_artifact(data_dir, "suites")?)
}

pub fn load_scenarios(data_dir: &Path) -> Result<ScenariosFile, InputError> {
    read_json(&resolve_artifact(data_dir, "scenarios")?)
}

pub fn load_methods(data_dir: &Path) -> Result<MethodsFile, InputError> {
    read_json(&resolve_artifact(data_dir, "methods")?)
}

pub fn load_leaderboard(data_dir: &Path, suite_id: &str) -> Result<LeaderboardFile, InputError> {
    read_json(&resolve_artifact(data_dir, &format!("leaderboard_{suite_id}"))?)
}

fn resolve_artifact(data_dir: &Path, stem: &str) -> Result<PathBuf, InputError> {
    let candidates = [format!("{stem}.json"), format!("{stem}.json.gz")];
    for name in &candidates {
        let path = data_dir.join(name);
        if path.exists() {
            return Ok(path);
        }
    }
    Err(InputError::MissingInput(format!(
        "missing {stem}.json(.gz) in {}",
        data_dir.display()
    )))
}

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn Read>, InputError> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(MultiGzDecoder::new(BufReader::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, InputError> {
    info!("reading {}", path.display());
    let mut reader = open_maybe_gz(path)?;
    let mut payload = String::new();
    reader.read_to_string(&mut payload)?;
    serde_json::from_str(&payload).map_err(|source| InputError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
