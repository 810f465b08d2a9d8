//! Draft Roster Loader: per-year draft boards saved as `espn_draft_<year>.json`.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::{
    core::{artifact_path, try_read_to_string},
    error::EspnError,
    season::models::DraftPick,
    Result, Season,
};

pub const DRAFT_PREFIX: &str = "espn_draft";

/// Path: {dir}/espn_draft_{year}.json
pub fn draft_path(dir: &Path, season: Season) -> PathBuf {
    artifact_path(dir, DRAFT_PREFIX, season)
}

/// Read a season's draft picks in draft order.
///
/// Fails with [`EspnError::DraftSource`] when the file is missing or is not
/// JSON. Inside the file, a field that is missing or has the wrong shape
/// becomes `None` on that pick instead of failing the load.
pub fn load_draft_picks(dir: &Path, season: Season) -> Result<Vec<DraftPick>> {
    let path = draft_path(dir, season);
    let source_err = |message: String| EspnError::DraftSource {
        path: path.clone(),
        message,
    };

    let contents = try_read_to_string(&path)
        .ok_or_else(|| source_err("file missing or unreadable".to_string()))?;
    let root: Value = serde_json::from_str(&contents).map_err(|e| source_err(e.to_string()))?;

    let picks = match &root {
        Value::Array(items) => items.as_slice(),
        Value::Object(obj) => match obj.get("draft_picks") {
            Some(Value::Array(items)) => items.as_slice(),
            _ => {
                warn!(path = %path.display(), "draft file has no draft_picks list");
                &[]
            }
        },
        _ => return Err(source_err("expected an object or array".to_string())),
    };

    Ok(picks.iter().map(pick_from_value).collect())
}

fn field<T: DeserializeOwned>(value: &Value, key: &str) -> Option<T> {
    value
        .get(key)
        .filter(|v| !v.is_null())
        .and_then(|v| serde_json::from_value(v.clone()).ok())
}

fn pick_from_value(value: &Value) -> DraftPick {
    DraftPick {
        round_num: field(value, "round_num"),
        round_pick: field(value, "round_pick"),
        overall_pick: field(value, "overall_pick"),
        team_id: field(value, "team_id"),
        team_name: field(value, "team_name"),
        player_name: field(value, "player_name"),
        player_id: field(value, "player_id"),
        position: field(value, "position"),
        nfl_team: field(value, "nfl_team"),
        keeper: field(value, "keeper"),
    }
}
