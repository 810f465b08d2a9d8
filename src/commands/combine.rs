//! Multi-Year Combiner: run one job per season, persist each year, then
//! persist everything that succeeded as a single combined artifact.

use std::fmt;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use tracing::{info, warn};

use crate::{
    core::{artifact_path, combined_path, write_json_pretty},
    error::EspnError,
    season::models::CombinedDataset,
    Season,
};

/// Where a year's processing stands. A year ends `Persisted` or fails at one
/// of the earlier stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearStage {
    Connecting,
    Fetching,
    Aggregating,
    Joining,
    Persisted,
}

impl fmt::Display for YearStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            YearStage::Connecting => "connecting",
            YearStage::Fetching => "fetching",
            YearStage::Aggregating => "aggregating",
            YearStage::Joining => "joining",
            YearStage::Persisted => "persisted",
        };
        write!(f, "{}", s)
    }
}

/// Why a year was dropped from the run
#[derive(Debug)]
pub struct StageFailure {
    pub stage: YearStage,
    pub error: EspnError,
}

impl StageFailure {
    /// For `map_err`: tag an error with the stage it happened in.
    pub fn at(stage: YearStage) -> impl FnOnce(EspnError) -> StageFailure {
        move |error| StageFailure { stage, error }
    }
}

/// A finished year: the data to persist plus a line for the summary.
#[derive(Debug, Clone, PartialEq)]
pub struct YearOutput<T> {
    pub data: T,
    pub detail: String,
    /// Non-fatal problems worth repeating in the summary
    pub notes: Vec<String>,
}

impl<T> YearOutput<T> {
    pub fn new(data: T, detail: impl Into<String>) -> Self {
        Self {
            data,
            detail: detail.into(),
            notes: Vec::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

/// The per-year unit of work a command plugs into [`run_years`].
#[async_trait]
pub trait YearJob: Send + Sync {
    type Output: Serialize + Send + Sync;

    /// File prefix: `<prefix>_<year>.json`, `<prefix>_all_years.json`
    fn artifact_prefix(&self) -> &'static str;

    async fn run_year(&self, season: Season) -> Result<YearOutput<Self::Output>, StageFailure>;
}

/// How one year ended
#[derive(Debug, Clone, PartialEq)]
pub enum YearOutcome {
    Succeeded {
        season: Season,
        path: PathBuf,
        detail: String,
        notes: Vec<String>,
    },
    Failed {
        season: Season,
        stage: YearStage,
        reason: String,
    },
}

impl YearOutcome {
    pub fn season(&self) -> Season {
        match self {
            YearOutcome::Succeeded { season, .. } | YearOutcome::Failed { season, .. } => *season,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, YearOutcome::Succeeded { .. })
    }
}

/// Outcome of a whole run, in year order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub outcomes: Vec<YearOutcome>,
    /// Where the combined artifact landed, if it was written
    pub combined: Option<PathBuf>,
    pub combined_error: Option<String>,
}

impl RunSummary {
    pub fn succeeded(&self) -> Vec<Season> {
        self.outcomes
            .iter()
            .filter(|o| o.is_success())
            .map(YearOutcome::season)
            .collect()
    }

    pub fn failed(&self) -> Vec<Season> {
        self.outcomes
            .iter()
            .filter(|o| !o.is_success())
            .map(YearOutcome::season)
            .collect()
    }

    pub fn any_succeeded(&self) -> bool {
        self.outcomes.iter().any(YearOutcome::is_success)
    }
}

/// Everything a run produced
#[derive(Debug)]
pub struct CombinedRun<T> {
    pub dataset: CombinedDataset<T>,
    pub summary: RunSummary,
}

/// Process `seasons` in order, one at a time.
///
/// A failed year is reported and left out of the combined dataset; the run
/// moves on. Each finished year is written to `<prefix>_<year>.json` as soon
/// as it completes. A year whose own file can't be written is still kept in
/// the combined dataset. The combined file is written once at the end, only
/// if at least one year finished, and a failure there is reported without
/// touching the per-year files.
pub async fn run_years<J>(job: &J, seasons: &[Season], dir: &Path) -> CombinedRun<J::Output>
where
    J: YearJob + ?Sized,
{
    let prefix = job.artifact_prefix();
    let mut dataset = CombinedDataset::new();
    let mut summary = RunSummary::default();

    for &season in seasons {
        println!("Processing {}...", season);

        match job.run_year(season).await {
            Ok(output) => {
                let path = artifact_path(dir, prefix, season);
                let mut notes = output.notes;

                match write_json_pretty(&path, &output.data) {
                    Ok(()) => println!("  ✓ Saved to {}", path.display()),
                    Err(e) => {
                        warn!(%season, error = %e, "could not write year artifact");
                        println!("  ⚠ Could not save {}: {}", path.display(), e);
                        notes.push(format!("per-year file not written: {}", e));
                    }
                }

                info!(%season, stage = %YearStage::Persisted, "year complete");
                dataset.insert(season, output.data);
                summary.outcomes.push(YearOutcome::Succeeded {
                    season,
                    path,
                    detail: output.detail,
                    notes,
                });
            }
            Err(failure) => {
                warn!(%season, stage = %failure.stage, error = %failure.error, "year failed");
                println!("  ✗ Failed while {} - {}", failure.stage, failure.error);
                summary.outcomes.push(YearOutcome::Failed {
                    season,
                    stage: failure.stage,
                    reason: failure.error.to_string(),
                });
            }
        }
    }

    if !dataset.is_empty() {
        let path = combined_path(dir, prefix);
        match write_json_pretty(&path, &dataset) {
            Ok(()) => summary.combined = Some(path),
            Err(e) => {
                warn!(error = %e, "could not write combined artifact");
                summary.combined_error = Some(e.to_string());
            }
        }
    }

    CombinedRun { dataset, summary }
}

/// Print the end-of-run report, with troubleshooting hints when nothing worked.
pub fn print_summary(summary: &RunSummary) {
    println!("\n{}", "=".repeat(60));

    for outcome in &summary.outcomes {
        match outcome {
            YearOutcome::Succeeded {
                season,
                detail,
                notes,
                ..
            } => {
                println!("✓ {}: {}", season, detail);
                for note in notes {
                    println!("    ⚠ {}", note);
                }
            }
            YearOutcome::Failed {
                season,
                stage,
                reason,
            } => println!("✗ {}: failed while {} - {}", season, stage, reason),
        }
    }

    if let Some(path) = &summary.combined {
        println!("\n✓ Combined data saved to {}", path.display());
    }
    if let Some(err) = &summary.combined_error {
        println!("\n⚠ Combined file not written ({}); per-year files are intact", err);
    }

    if summary.any_succeeded() {
        println!(
            "✓ Successfully processed {} of {} seasons: {}",
            summary.succeeded().len(),
            summary.outcomes.len(),
            join_seasons(&summary.succeeded())
        );
        let failed = summary.failed();
        if !failed.is_empty() {
            println!("⚠ Failed seasons: {}", join_seasons(&failed));
        }
    } else {
        println!("\n⚠ No data was successfully fetched.");
        println!("Try the following:");
        println!("1. Make sure your league is NOT private, or set ESPN_SWID and ESPN_S2");
        println!("2. Get fresh cookies from an active browser session");
        println!("3. Verify your league ID is correct");
    }

    println!("{}", "=".repeat(60));
}

fn join_seasons(seasons: &[Season]) -> String {
    seasons
        .iter()
        .map(Season::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
