//! Player stats command: drafted players' regular-season totals per year.

use std::path::Path;

use async_trait::async_trait;
use tracing::warn;

use crate::{
    config::PipelineConfig,
    error::EspnError,
    espn::{pacer_for, EspnConnector, LeagueConnector, Pacer},
    season::{
        draft::load_draft_picks,
        join::{count_with_points, join_draft_with_points},
        models::PlayerSeasonStat,
        points::aggregate_player_points,
    },
    LeagueId, Result, Season,
};

use super::combine::{
    print_summary, run_years, CombinedRun, StageFailure, YearJob, YearOutput, YearStage,
};

pub const PLAYER_STATS_PREFIX: &str = "player_season_stats";

/// Aggregates box score points and joins them onto the year's draft board.
pub struct PlayerStatsJob<'a> {
    pub connector: &'a dyn LeagueConnector,
    pub league_id: LeagueId,
    pub pacer: &'a dyn Pacer,
    pub draft_dir: &'a Path,
}

#[async_trait]
impl<'a> YearJob for PlayerStatsJob<'a> {
    type Output = Vec<PlayerSeasonStat>;

    fn artifact_prefix(&self) -> &'static str {
        PLAYER_STATS_PREFIX
    }

    async fn run_year(
        &self,
        season: Season,
    ) -> std::result::Result<YearOutput<Vec<PlayerSeasonStat>>, StageFailure> {
        let handle = self
            .connector
            .connect(self.league_id, season)
            .await
            .map_err(StageFailure::at(YearStage::Connecting))?;

        let settings = handle.settings();
        println!("  Connected to: {}", settings.name);
        println!("  Fetching box scores for {}...", season);

        let aggregated =
            aggregate_player_points(handle.as_ref(), settings.reg_season_count, self.pacer).await;

        // every pick would read 0.0; that is no data, not a season of zeros
        if settings.reg_season_count > 0 && aggregated.weeks.fetched.is_empty() {
            return Err(StageFailure {
                stage: YearStage::Aggregating,
                error: EspnError::NoData,
            });
        }

        let mut notes = Vec::new();
        let picks = match load_draft_picks(self.draft_dir, season) {
            Ok(picks) => picks,
            Err(e) => {
                warn!(
                    %season,
                    stage = %YearStage::Joining,
                    error = %e,
                    "no draft source; year has no stat lines"
                );
                println!("  Warning: {}", e);
                notes.push(format!(
                    "{}: draft picks unavailable: {}",
                    YearStage::Joining,
                    e
                ));
                Vec::new()
            }
        };

        let stats = join_draft_with_points(&picks, &aggregated.points, season);
        let with_points = count_with_points(&stats);
        println!("  ✓ Fetched stats for {} drafted players", stats.len());
        println!("  ✓ {} players with points", with_points);

        if !aggregated.weeks.is_complete() {
            let weeks: Vec<String> = aggregated
                .weeks
                .failed_weeks()
                .iter()
                .map(|w| w.to_string())
                .collect();
            notes.push(format!(
                "totals exclude unfetched weeks {}",
                weeks.join(", ")
            ));
        }

        let detail = format!(
            "{} drafted players, {} with points",
            stats.len(),
            with_points
        );
        let mut output = YearOutput::new(stats, detail);
        output.notes = notes;
        Ok(output)
    }
}

/// Run the player stats pipeline with any connector.
pub async fn run_player_stats(
    connector: &dyn LeagueConnector,
    config: &PipelineConfig,
    pacer: &dyn Pacer,
) -> CombinedRun<Vec<PlayerSeasonStat>> {
    let job = PlayerStatsJob {
        connector,
        league_id: config.league_id,
        pacer,
        draft_dir: &config.draft_dir,
    };
    run_years(&job, config.seasons(), config.output_dir()).await
}

/// Handle the player-stats command
pub async fn handle_player_stats(config: &PipelineConfig) -> Result<()> {
    println!("ESPN Player Stats Fetcher");
    println!("{}", "=".repeat(50));
    println!("\nLeague ID: {}", config.league_id);
    println!("Years to fetch: {}", config.years);
    println!("Draft files: {}\n", config.draft_dir.display());

    let connector = EspnConnector::new(config.credentials.as_ref())?;
    let pacer = pacer_for(config.pace);

    let run = run_player_stats(&connector, config, pacer.as_ref()).await;
    print_summary(&run.summary);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        cli::types::YearRange,
        commands::combine::YearOutcome,
        core::write_string,
        espn::NoPacing,
        season::draft::draft_path,
        testing::{matchup, FakeConnector, FakeSeason},
    };
    use std::time::Duration;
    use tempfile::TempDir;

    fn config(temp: &TempDir, years: &[u16]) -> PipelineConfig {
        PipelineConfig {
            league_id: LeagueId::new(1),
            years: YearRange::new(years.iter().copied().map(Season::new).collect()).unwrap(),
            credentials: None,
            output_dir: temp.path().to_path_buf(),
            draft_dir: temp.path().join("EspnDraft"),
            pace: Duration::ZERO,
            verbose: false,
        }
    }

    fn two_week_season(year: u16) -> FakeSeason {
        FakeSeason::new(Season::new(year), 2)
            .with_week(1, vec![matchup((1, "A", 30.0), &[(10, 10.0)], (2, "B", 20.0), &[(20, 0.125)])])
            .with_week(2, vec![matchup((1, "A", 30.0), &[(10, 7.5)], (2, "B", 20.0), &[])])
    }

    #[tokio::test]
    async fn test_joins_points_onto_draft_board() {
        let temp = TempDir::new().unwrap();
        let config = config(&temp, &[2021]);
        write_string(
            &draft_path(&config.draft_dir, Season::new(2021)),
            r#"{"draft_picks": [
                {"player_id": 20, "player_name": "Twenty", "team_id": 2, "team_name": "B"},
                {"player_id": 99, "player_name": "Bust", "team_id": 1, "team_name": "A"},
                {"player_id": 10, "player_name": "Ten", "team_id": 1, "team_name": "A"}
            ]}"#,
        )
        .unwrap();
        let connector = FakeConnector::default().with_season(two_week_season(2021));

        let run = run_player_stats(&connector, &config, &NoPacing).await;

        let stats = run.dataset.get(Season::new(2021)).unwrap();
        let totals: Vec<(i64, f64)> = stats
            .iter()
            .map(|s| (s.player_id.unwrap().as_i64(), s.total_points))
            .collect();
        assert_eq!(totals, vec![(20, 0.12), (99, 0.0), (10, 17.5)]);
        assert!(temp.path().join("player_season_stats_2021.json").is_file());
        assert!(temp.path().join("player_season_stats_all_years.json").is_file());
    }

    #[tokio::test]
    async fn test_missing_draft_file_is_empty_year_with_note() {
        let temp = TempDir::new().unwrap();
        let config = config(&temp, &[2021]);
        let connector = FakeConnector::default().with_season(two_week_season(2021));

        let run = run_player_stats(&connector, &config, &NoPacing).await;

        assert_eq!(run.dataset.get(Season::new(2021)), Some(&Vec::new()));
        match &run.summary.outcomes[0] {
            YearOutcome::Succeeded { detail, notes, .. } => {
                assert_eq!(detail, "0 drafted players, 0 with points");
                assert!(notes[0].starts_with("joining: draft picks unavailable"));
            }
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_failed_week_still_joins_with_note() {
        let temp = TempDir::new().unwrap();
        let config = config(&temp, &[2021]);
        write_string(
            &draft_path(&config.draft_dir, Season::new(2021)),
            r#"{"draft_picks": [
                {"player_id": 10, "player_name": "Ten", "team_id": 1, "team_name": "A"},
                {"player_id": 20, "player_name": "Defense", "team_id": 2, "team_name": "B"}
            ]}"#,
        )
        .unwrap();
        let season = FakeSeason::new(Season::new(2021), 3)
            .with_week(1, vec![matchup((1, "A", 30.0), &[(10, 10.0)], (2, "B", 20.0), &[(20, -5.0)])])
            .with_week(2, vec![matchup((1, "A", 30.0), &[(10, 7.5)], (2, "B", 20.0), &[(20, 2.0)])])
            .with_failing_week(3);
        let connector = FakeConnector::default().with_season(season);

        let run = run_player_stats(&connector, &config, &NoPacing).await;

        let totals: Vec<f64> = run
            .dataset
            .get(Season::new(2021))
            .unwrap()
            .iter()
            .map(|s| s.total_points)
            .collect();
        assert_eq!(totals, vec![17.5, -3.0]);
        match &run.summary.outcomes[0] {
            YearOutcome::Succeeded { detail, notes, .. } => {
                assert_eq!(detail, "2 drafted players, 2 with points");
                assert_eq!(notes, &vec!["totals exclude unfetched weeks 3".to_string()]);
            }
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_no_fetched_weeks_fails_at_aggregating() {
        let temp = TempDir::new().unwrap();
        let config = config(&temp, &[2021]);
        let season = FakeSeason::new(Season::new(2021), 2)
            .with_failing_week(1)
            .with_failing_week(2);
        let connector = FakeConnector::default().with_season(season);

        let run = run_player_stats(&connector, &config, &NoPacing).await;

        assert!(run.dataset.is_empty());
        match &run.summary.outcomes[0] {
            YearOutcome::Failed { stage, reason, .. } => {
                assert_eq!(*stage, YearStage::Aggregating);
                assert_eq!(reason, "ESPN API returned no data");
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_connection_failure_skips_year() {
        let temp = TempDir::new().unwrap();
        let config = config(&temp, &[2020, 2021]);
        let connector = FakeConnector::default().with_season(two_week_season(2021));

        let run = run_player_stats(&connector, &config, &NoPacing).await;

        assert_eq!(run.dataset.seasons(), vec![Season::new(2021)]);
        match &run.summary.outcomes[0] {
            YearOutcome::Failed { stage, .. } => assert_eq!(*stage, YearStage::Connecting),
            other => panic!("expected failure, got {other:?}"),
        }
        assert!(!temp.path().join("player_season_stats_2020.json").exists());
    }
}
