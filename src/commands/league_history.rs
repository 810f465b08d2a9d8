//! League history command: one normalized season record per year.

use async_trait::async_trait;

use crate::{
    config::PipelineConfig,
    espn::{pacer_for, EspnConnector, LeagueConnector, Pacer},
    season::{
        models::{SeasonRecord, TeamRecord},
        snapshot::build_season_record,
    },
    LeagueId, Result, Season,
};

use super::combine::{
    print_summary, run_years, CombinedRun, StageFailure, YearJob, YearOutput, YearStage,
};

pub const LEAGUE_PREFIX: &str = "espn_league";

/// Builds one [`SeasonRecord`] per year.
pub struct LeagueHistoryJob<'a> {
    pub connector: &'a dyn LeagueConnector,
    pub league_id: LeagueId,
    pub pacer: &'a dyn Pacer,
}

#[async_trait]
impl<'a> YearJob for LeagueHistoryJob<'a> {
    type Output = SeasonRecord;

    fn artifact_prefix(&self) -> &'static str {
        LEAGUE_PREFIX
    }

    async fn run_year(
        &self,
        season: Season,
    ) -> std::result::Result<YearOutput<SeasonRecord>, StageFailure> {
        let handle = self
            .connector
            .connect(self.league_id, season)
            .await
            .map_err(StageFailure::at(YearStage::Connecting))?;

        let snapshot = build_season_record(handle.as_ref(), self.pacer).await;
        print_standings(&snapshot.record);

        let record = &snapshot.record;
        let detail = format!(
            "{} - {} teams, {} matchups",
            record.league_name,
            record.teams.len(),
            record.matchups.len()
        );

        let mut output = YearOutput::new(snapshot.record.clone(), detail);
        if !snapshot.is_complete() {
            let weeks: Vec<String> = snapshot
                .weeks
                .failed_weeks()
                .iter()
                .map(|w| w.to_string())
                .collect();
            output = output.with_note(format!(
                "matchups incomplete, missing weeks {}",
                weeks.join(", ")
            ));
        }
        Ok(output)
    }
}

/// Teams by standing, unranked (0) last, ties in listed order.
pub fn standings_order(teams: &[TeamRecord]) -> Vec<&TeamRecord> {
    let mut sorted: Vec<&TeamRecord> = teams.iter().collect();
    sorted.sort_by_key(|t| (t.standing == 0, t.standing));
    sorted
}

/// `  1. Kings (sam, lee) - 10-4 - 1623.4 PF`
pub fn standings_line(team: &TeamRecord) -> String {
    let owners = if team.owners.is_empty() {
        "Unknown".to_string()
    } else {
        team.owners.join(", ")
    };
    format!(
        "  {}. {} ({}) - {}-{} - {:.1} PF",
        team.standing, team.name, owners, team.wins, team.losses, team.points_for
    )
}

fn print_standings(record: &SeasonRecord) {
    println!("\n{}", "=".repeat(60));
    println!("SEASON {}: {}", record.year, record.league_name);
    println!("{}", "=".repeat(60));
    println!("Teams: {}", record.teams.len());
    println!("Regular Season Weeks: {}", record.settings.reg_season_week_count);
    println!("\nStandings:");
    for team in standings_order(&record.teams) {
        println!("{}", standings_line(team));
    }
    println!();
}

/// Run the league history pipeline with any connector.
pub async fn run_league_history(
    connector: &dyn LeagueConnector,
    config: &PipelineConfig,
    pacer: &dyn Pacer,
) -> CombinedRun<SeasonRecord> {
    let job = LeagueHistoryJob {
        connector,
        league_id: config.league_id,
        pacer,
    };
    run_years(&job, config.seasons(), config.output_dir()).await
}

/// Handle the league-history command
pub async fn handle_league_history(config: &PipelineConfig) -> Result<()> {
    println!("ESPN Fantasy Football League History");
    println!("League ID: {}", config.league_id);
    println!("Years: {}", config.years);
    println!("{}\n", "-".repeat(60));

    let connector = EspnConnector::new(config.credentials.as_ref())?;
    let pacer = pacer_for(config.pace);

    let run = run_league_history(&connector, config, pacer.as_ref()).await;
    print_summary(&run.summary);

    Ok(())
}
