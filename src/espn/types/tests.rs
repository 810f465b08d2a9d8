//! Unit tests for ESPN wire types

use super::*;
use serde_json::json;

#[cfg(test)]
mod types_tests {
    use super::*;

    #[test]
    fn test_league_response_settings_and_teams() {
        let json = json!({
            "seasonId": 2021,
            "settings": {
                "name": "Playaz Only",
                "size": 10,
                "scheduleSettings": {
                    "matchupPeriodCount": 14,
                    "playoffTeamCount": 6
                }
            },
            "members": [
                {"id": "{OWNER-1}", "displayName": "bigdog", "firstName": "Sam", "lastName": "Lee"}
            ],
            "teams": [
                {
                    "id": 3,
                    "location": "Gridiron",
                    "nickname": "Kings",
                    "owners": ["{OWNER-1}"],
                    "playoffSeed": 2,
                    "rankCalculatedFinal": 1,
                    "record": {
                        "overall": {
                            "wins": 10,
                            "losses": 4,
                            "pointsFor": 1623.42,
                            "pointsAgainst": 1400.1,
                            "streakLength": 3,
                            "streakType": "WIN"
                        }
                    }
                }
            ]
        });

        let league: LeagueResponse = serde_json::from_value(json).unwrap();
        assert_eq!(league.season_id, Some(2021));

        let settings = league.settings.unwrap();
        assert_eq!(settings.name.as_deref(), Some("Playaz Only"));
        assert_eq!(settings.size, Some(10));
        assert_eq!(settings.schedule_settings.matchup_period_count, Some(14));
        assert_eq!(settings.schedule_settings.playoff_team_count, Some(6));

        let team = &league.teams[0];
        assert_eq!(team.display_name(), "Gridiron Kings");
        assert_eq!(team.playoff_seed, Some(2));
        assert!(team.roster.is_none());
        let overall = team.record.as_ref().unwrap().overall.as_ref().unwrap();
        assert_eq!(overall.wins, 10);
        assert_eq!(overall.points_for, 1623.42);
        assert_eq!(overall.streak_type.as_deref(), Some("WIN"));

        assert_eq!(league.members[0].label(), "bigdog");
    }

    #[test]
    fn test_league_response_tolerates_empty_payload() {
        let league: LeagueResponse = serde_json::from_value(json!({})).unwrap();
        assert!(league.settings.is_none());
        assert!(league.teams.is_empty());
        assert!(league.schedule.is_empty());
        assert!(league.draft_detail.is_none());
    }

    #[test]
    fn test_team_display_name_prefers_name() {
        let team: WireTeam = serde_json::from_value(json!({
            "id": 1,
            "name": " The Name ",
            "location": "Old",
            "nickname": "Style"
        }))
        .unwrap();
        assert_eq!(team.display_name(), "The Name");

        let bare: WireTeam = serde_json::from_value(json!({"id": 9})).unwrap();
        assert_eq!(bare.display_name(), "Team 9");
    }

    #[test]
    fn test_member_label_fallbacks() {
        let named: WireMember =
            serde_json::from_value(json!({"id": "x", "firstName": "Ann", "lastName": "Ray"}))
                .unwrap();
        assert_eq!(named.label(), "Ann Ray");

        let bare: WireMember = serde_json::from_value(json!({"id": "{ID}"})).unwrap();
        assert_eq!(bare.label(), "{ID}");
    }

    #[test]
    fn test_roster_entry_player_lookup() {
        let entry: WireRosterEntry = serde_json::from_value(json!({
            "lineupSlotId": 2,
            "playerPoolEntry": {
                "appliedStatTotal": 17.5,
                "player": {
                    "id": 3916387,
                    "fullName": "Lamar Jackson",
                    "defaultPositionId": 1,
                    "stats": [
                        {"seasonId": 2021, "scoringPeriodId": 3, "statSourceId": 1, "appliedTotal": 22.0},
                        {"seasonId": 2021, "scoringPeriodId": 3, "statSourceId": 0, "appliedTotal": 17.5}
                    ]
                }
            }
        }))
        .unwrap();

        assert_eq!(entry.resolved_player_id(), Some(3916387));
        assert_eq!(entry.applied_stat_total(), Some(17.5));
        let player = entry.player().unwrap();
        assert_eq!(player.actual_points_for_period(3), Some(17.5));
        assert_eq!(player.actual_points_for_period(4), None);
    }

    #[test]
    fn test_matchup_bye_has_no_away_side() {
        let matchup: WireMatchup = serde_json::from_value(json!({
            "matchupPeriodId": 5,
            "home": {"teamId": 4, "totalPoints": 101.2}
        }))
        .unwrap();

        assert_eq!(matchup.matchup_period_id, Some(5));
        assert!(matchup.away.is_none());
        let home = matchup.home.unwrap();
        assert_eq!(home.team_id, 4);
        assert!(home.roster_for_current_scoring_period.is_none());
    }

    #[test]
    fn test_draft_detail_picks() {
        let detail: WireDraftDetail = serde_json::from_value(json!({
            "drafted": true,
            "picks": [
                {"overallPickNumber": 1, "roundId": 1, "roundPickNumber": 1, "teamId": 6, "playerId": 3916387, "keeper": false},
                {"overallPickNumber": 2, "roundId": 1, "roundPickNumber": 2, "teamId": 2, "playerId": 4241457}
            ]
        }))
        .unwrap();

        assert!(detail.drafted);
        assert_eq!(detail.picks.len(), 2);
        assert!(!detail.picks[1].keeper);
        assert_eq!(detail.picks[1].team_id, 2);
    }

    #[test]
    fn test_pro_team_abbrev() {
        assert_eq!(pro_team_abbrev(33), Some("BAL"));
        assert_eq!(pro_team_abbrev(25), Some("SF"));
        assert_eq!(pro_team_abbrev(0), None);
        assert_eq!(pro_team_abbrev(31), None);
    }
}
