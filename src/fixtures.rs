/// Fixture data for testing and benchmarks
///
/// Deterministic league documents plus an in-memory provider, so page
/// rendering and the sort controller can be exercised without touching disk.
use async_trait::async_trait;

use crate::data_provider::{DataError, LeagueDataProvider};
use crate::types::{
    Award, Champion, History, Loose, PowerRanking, PowerRankings, Standings, TeamBio,
    TeamDirectory, TeamRecord,
};

pub fn create_mock_power_rankings() -> PowerRankings {
    PowerRankings {
        week: Some(Loose::Number(9.0)),
        last_updated: Some("Nov 4".to_string()),
        rankings: vec![
            PowerRanking {
                rank: Some(Loose::Number(1.0)),
                team: "Bears".to_string(),
                delta: Some(2.0),
                record: Some("8-2".to_string()),
                points_for: Some(Loose::Number(1204.6)),
                points_against: Some(Loose::Number(1010.2)),
                streak: Some("W4".to_string()),
                blurb: Some("Rolling.".to_string()),
            },
            PowerRanking {
                rank: Some(Loose::Number(2.0)),
                team: "Wolves".to_string(),
                delta: Some(-1.0),
                record: Some("3-7".to_string()),
                ..Default::default()
            },
        ],
    }
}

pub fn create_mock_team_records() -> Vec<TeamRecord> {
    vec![
        TeamRecord {
            team: "Wolves".to_string(),
            record: Some("3-7".to_string()),
            points_for: Some(Loose::from("88.5")),
            points_against: Some(Loose::Number(97.0)),
            championships: Some(Loose::Number(1.0)),
        },
        TeamRecord {
            team: "Bears".to_string(),
            record: Some("8-2".to_string()),
            points_for: Some(Loose::from("102.0")),
            points_against: Some(Loose::Number(90.4)),
            championships: Some(Loose::Number(3.0)),
        },
        TeamRecord {
            team: "Foxes".to_string(),
            record: None,
            points_for: Some(Loose::from("—")),
            points_against: None,
            championships: None,
        },
    ]
}

pub fn create_mock_standings() -> Standings {
    Standings {
        last_updated: Some("Nov 4".to_string()),
        teams: create_mock_team_records(),
    }
}

/// A league of `size` teams with mixed records and a few missing values, used by the benchmarks
pub fn create_league_of(size: usize) -> Vec<TeamRecord> {
    (0..size)
        .map(|i| {
            let wins = (i * 7) % 11;
            TeamRecord {
                team: format!("Team {:02}", (i * 5) % size),
                record: Some(format!("{}-{}", wins, 10 - wins.min(10))),
                points_for: Some(Loose::Number(900.0 + ((i * 37) % 300) as f64)),
                points_against: if i % 4 == 0 {
                    None
                } else {
                    Some(Loose::Text(format!("{}.5", 880 + (i * 13) % 250)))
                },
                championships: Some(Loose::Number((i % 3) as f64)),
            }
        })
        .collect()
}

pub fn create_mock_history() -> History {
    History {
        seasons: Some(Loose::from("2015–2024")),
        champions: vec![Champion {
            year: Some(Loose::Number(2024.0)),
            champion: "Bears".to_string(),
            runner_up: Some("Wolves".to_string()),
            score: Some(Loose::from("131.2 – 118.9")),
            note: None,
        }],
        awards: vec![Award {
            label: "MVP".to_string(),
            winner: "J. Doe".to_string(),
            detail: Some("412 pts".to_string()),
            year: Some(Loose::Number(2024.0)),
        }],
    }
}

pub fn create_mock_team_directory() -> TeamDirectory {
    TeamDirectory {
        teams: vec![
            TeamBio {
                team_name: "Bears".to_string(),
                manager: Some("Sam".to_string()),
                division: Some("North".to_string()),
                bio: Some("Founded 2015.\nThree titles.".to_string()),
            },
            TeamBio {
                team_name: "Foxes".to_string(),
                ..Default::default()
            },
        ],
    }
}

/// In-memory provider; `failing` makes every call report a missing file
#[derive(Debug, Clone, Default)]
pub struct MockProvider {
    pub failing: bool,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self { failing: true }
    }

    fn check(&self, file: &str) -> Result<(), DataError> {
        if self.failing {
            return Err(DataError::Read {
                path: file.into(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "mock failure"),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl LeagueDataProvider for MockProvider {
    async fn power_rankings(&self) -> Result<PowerRankings, DataError> {
        self.check(crate::data_provider::POWER_RANKINGS_FILE)?;
        Ok(create_mock_power_rankings())
    }

    async fn standings(&self) -> Result<Standings, DataError> {
        self.check(crate::data_provider::STANDINGS_FILE)?;
        Ok(create_mock_standings())
    }

    async fn history(&self) -> Result<History, DataError> {
        self.check(crate::data_provider::HISTORY_FILE)?;
        Ok(create_mock_history())
    }

    async fn team_directory(&self) -> Result<TeamDirectory, DataError> {
        self.check(crate::data_provider::TEAMS_FILE)?;
        Ok(create_mock_team_directory())
    }
}
