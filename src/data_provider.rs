/// Trait for providing league data, abstracting over the JSON data directory and test fixtures
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::types::{History, PowerRankings, Standings, TeamDirectory};

pub const POWER_RANKINGS_FILE: &str = "power_rankings.json";
pub const STANDINGS_FILE: &str = "standings.json";
pub const HISTORY_FILE: &str = "history.json";
pub const TEAMS_FILE: &str = "teams.json";

/// Shown on a page whose data could not be loaded
pub const LOAD_FAILURE_MESSAGE: &str =
    "Couldn’t load data files. Make sure you uploaded the /data and /assets folders exactly.";

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Source of the four league documents
#[async_trait]
pub trait LeagueDataProvider: Send + Sync {
    async fn power_rankings(&self) -> Result<PowerRankings, DataError>;

    async fn standings(&self) -> Result<Standings, DataError>;

    async fn history(&self) -> Result<History, DataError>;

    async fn team_directory(&self) -> Result<TeamDirectory, DataError>;
}

/// Reads the documents from a directory of JSON files.
///
/// Every call re-reads the file so edits show up on the next render.
#[derive(Debug, Clone)]
pub struct JsonDirectory {
    root: PathBuf,
}

impl JsonDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    async fn load<T: DeserializeOwned>(&self, file: &str) -> Result<T, DataError> {
        let path = self.root.join(file);
        debug!("DATA: Loading {}", path.display());
        let bytes = tokio::fs::read(&path).await.map_err(|source| DataError::Read {
            path: path.clone(),
            source,
        })?;
        serde_json::from_slice(&bytes).map_err(|source| DataError::Parse { path, source })
    }
}

#[async_trait]
impl LeagueDataProvider for JsonDirectory {
    async fn power_rankings(&self) -> Result<PowerRankings, DataError> {
        self.load(POWER_RANKINGS_FILE).await
    }

    async fn standings(&self) -> Result<Standings, DataError> {
        self.load(STANDINGS_FILE).await
    }

    async fn history(&self) -> Result<History, DataError> {
        self.load(HISTORY_FILE).await
    }

    async fn team_directory(&self) -> Result<TeamDirectory, DataError> {
        self.load(TEAMS_FILE).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Loose;

    #[tokio::test]
    async fn test_loads_standings_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(STANDINGS_FILE),
            r#"{"last_updated":"Week 9","teams":[{"team":"Bears","record":"8-2","points_for":"102.0","Championships":1}]}"#,
        )
        .unwrap();

        let provider = JsonDirectory::new(dir.path());
        let standings = provider.standings().await.unwrap();
        assert_eq!(standings.last_updated.as_deref(), Some("Week 9"));
        assert_eq!(standings.teams.len(), 1);
        assert_eq!(standings.teams[0].points_for, Some(Loose::from("102.0")));
    }

    #[tokio::test]
    async fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let provider = JsonDirectory::new(dir.path());
        let err = provider.history().await.unwrap_err();
        assert!(matches!(err, DataError::Read { .. }));
        assert!(err.to_string().contains(HISTORY_FILE));
    }

    #[tokio::test]
    async fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(TEAMS_FILE), "{ not json").unwrap();
        let provider = JsonDirectory::new(dir.path());
        let err = provider.team_directory().await.unwrap_err();
        assert!(matches!(err, DataError::Parse { .. }));
    }

    #[tokio::test]
    async fn test_rereads_on_every_call() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(POWER_RANKINGS_FILE);
        std::fs::write(&path, r#"{"week":3}"#).unwrap();
        let provider = JsonDirectory::new(dir.path());
        assert_eq!(provider.power_rankings().await.unwrap().week, Some(Loose::Number(3.0)));

        std::fs::write(&path, r#"{"week":4}"#).unwrap();
        assert_eq!(provider.power_rankings().await.unwrap().week, Some(Loose::Number(4.0)));
    }
}
