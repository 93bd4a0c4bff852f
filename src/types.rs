/// Shared types used across the application
///
/// These mirror the league's JSON data files. Every field is optional so a
/// partially filled file still renders; missing values show a placeholder.
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Global constants
pub const LEAGUE_NAME: &str = "League";

/// A JSON scalar the data files are not consistent about.
///
/// Weeks, years and point totals show up as numbers in some files and as
/// strings in others (`"88.5"`, `"—"`), so they are kept loose and converted
/// at the point of use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Loose {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl Loose {
    /// Plain numeric conversion: numbers as-is, strings parsed after trimming.
    pub fn to_f64(&self) -> Option<f64> {
        let n = match self {
            Loose::Number(n) => *n,
            Loose::Text(s) => s.trim().parse::<f64>().ok()?,
            Loose::Other(_) => return None,
        };
        n.is_finite().then_some(n)
    }

    /// Zero, NaN and the empty string count as "no value".
    pub fn is_truthy(&self) -> bool {
        match self {
            Loose::Number(n) => *n != 0.0 && !n.is_nan(),
            Loose::Text(s) => !s.is_empty(),
            Loose::Other(v) => !matches!(v, Value::Null | Value::Bool(false)),
        }
    }
}

impl fmt::Display for Loose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Loose::Number(n) => write!(f, "{}", n),
            Loose::Text(s) => f.write_str(s),
            Loose::Other(v) => write!(f, "{}", v),
        }
    }
}

impl From<f64> for Loose {
    fn from(n: f64) -> Self {
        Loose::Number(n)
    }
}

impl From<&str> for Loose {
    fn from(s: &str) -> Self {
        Loose::Text(s.to_string())
    }
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Strings and numbers as text; anything else becomes the empty string
fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(scalar_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

/// Strings and numbers as text; anything else becomes `None`
fn lenient_opt_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(scalar_text(Value::deserialize(deserializer)?))
}

/// Numbers and numeric strings; anything else becomes `None`
fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(Option::<Loose>::deserialize(deserializer)?.and_then(|v| v.to_f64()))
}

/// `data/power_rankings.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerRankings {
    pub week: Option<Loose>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub last_updated: Option<String>,
    pub rankings: Vec<PowerRanking>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerRanking {
    pub rank: Option<Loose>,
    #[serde(deserialize_with = "lenient_string")]
    pub team: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub delta: Option<f64>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub record: Option<String>,
    pub points_for: Option<Loose>,
    pub points_against: Option<Loose>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub streak: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub blurb: Option<String>,
}

/// `data/standings.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Standings {
    #[serde(deserialize_with = "lenient_opt_string")]
    pub last_updated: Option<String>,
    pub teams: Vec<TeamRecord>,
}

/// One row of the standings table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamRecord {
    #[serde(deserialize_with = "lenient_string")]
    pub team: String,
    /// Win-loss record formatted "W-L"
    #[serde(deserialize_with = "lenient_opt_string")]
    pub record: Option<String>,
    pub points_for: Option<Loose>,
    pub points_against: Option<Loose>,
    #[serde(rename = "Championships", alias = "championships")]
    pub championships: Option<Loose>,
}

/// `data/history.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct History {
    pub seasons: Option<Loose>,
    pub champions: Vec<Champion>,
    pub awards: Vec<Award>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Champion {
    pub year: Option<Loose>,
    #[serde(deserialize_with = "lenient_string")]
    pub champion: String,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub runner_up: Option<String>,
    pub score: Option<Loose>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Award {
    #[serde(deserialize_with = "lenient_string")]
    pub label: String,
    #[serde(deserialize_with = "lenient_string")]
    pub winner: String,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub detail: Option<String>,
    pub year: Option<Loose>,
}

/// `data/teams.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamDirectory {
    pub teams: Vec<TeamBio>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamBio {
    #[serde(deserialize_with = "lenient_string")]
    pub team_name: String,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub manager: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub division: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub bio: Option<String>,
}
