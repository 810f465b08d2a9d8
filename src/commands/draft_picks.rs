//! Draft picks command: fetch each year's draft board into the draft directory.

use async_trait::async_trait;

use crate::{
    config::PipelineConfig,
    espn::{EspnConnector, LeagueConnector},
    season::{draft::DRAFT_PREFIX, models::DraftFile},
    LeagueId, Result, Season,
};

use super::combine::{
    print_summary, run_years, CombinedRun, StageFailure, YearJob, YearOutput, YearStage,
};

/// Fetches one draft board per year.
pub struct DraftPicksJob<'a> {
    pub connector: &'a dyn LeagueConnector,
    pub league_id: LeagueId,
}

#[async_trait]
impl<'a> YearJob for DraftPicksJob<'a> {
    type Output = DraftFile;

    fn artifact_prefix(&self) -> &'static str {
        DRAFT_PREFIX
    }

    async fn run_year(
        &self,
        season: Season,
    ) -> std::result::Result<YearOutput<DraftFile>, StageFailure> {
        let draft_picks = self
            .connector
            .fetch_draft(self.league_id, season)
            .await
            .map_err(StageFailure::at(YearStage::Fetching))?;

        let detail = format!("{} draft picks", draft_picks.len());
        let mut output = YearOutput::new(DraftFile { draft_picks }, detail);
        if output.data.draft_picks.is_empty() {
            output = output.with_note("league reported no draft picks");
        }
        Ok(output)
    }
}

/// Run the draft fetch with any connector; files land in `config.draft_dir`.
pub async fn run_draft_picks(
    connector: &dyn LeagueConnector,
    config: &PipelineConfig,
) -> CombinedRun<DraftFile> {
    let job = DraftPicksJob {
        connector,
        league_id: config.league_id,
    };
    run_years(&job, config.seasons(), &config.draft_dir).await
}

/// Handle the draft-picks command
pub async fn handle_draft_picks(config: &PipelineConfig) -> Result<()> {
    println!("ESPN Draft Picks Fetcher");
    println!("League ID: {}", config.league_id);
    println!("Years: {}", config.years);
    println!("{}\n", "-".repeat(60));

    let connector = EspnConnector::new(config.credentials.as_ref())?;

    let run = run_draft_picks(&connector, config).await;
    print_summary(&run.summary);

    Ok(())
}
