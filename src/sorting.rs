//! Standings sort controller
//!
//! Owns the load-time order of the standings, the order currently on
//! display, and one direction control per sortable column. At most one
//! control is active at a time; selecting a direction on one column resets
//! the others, and selecting "none" restores the load-time order.
use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;
use tracing::debug;

use crate::types::{Loose, TeamRecord};

static RECORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*-\s*(\d+)").expect("record pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Rank,
    Team,
    Record,
    PointsFor,
    PointsAgainst,
    Championships,
}

impl SortKey {
    pub const COUNT: usize = 6;

    pub fn all() -> [Self; Self::COUNT] {
        [
            Self::Rank,
            Self::Team,
            Self::Record,
            Self::PointsFor,
            Self::PointsAgainst,
            Self::Championships,
        ]
    }

    /// Column heading
    pub fn name(&self) -> &str {
        match self {
            Self::Rank => "#",
            Self::Team => "Team",
            Self::Record => "Record",
            Self::PointsFor => "PF",
            Self::PointsAgainst => "PA",
            Self::Championships => "Champs",
        }
    }

    /// Identifier carried by the column's control (`data-key` in the markup)
    pub fn id(&self) -> &'static str {
        match self {
            Self::Rank => "rank",
            Self::Team => "team",
            Self::Record => "record",
            Self::PointsFor => "points_for",
            Self::PointsAgainst => "points_against",
            Self::Championships => "championships",
        }
    }

    fn index(&self) -> usize {
        match self {
            Self::Rank => 0,
            Self::Team => 1,
            Self::Record => 2,
            Self::PointsFor => 3,
            Self::PointsAgainst => 4,
            Self::Championships => 5,
        }
    }

    /// Next column to the right, wrapping around
    pub fn next(&self) -> Self {
        Self::all()[(self.index() + 1) % Self::COUNT]
    }

    /// Previous column to the left, wrapping around
    pub fn prev(&self) -> Self {
        Self::all()[(self.index() + Self::COUNT - 1) % Self::COUNT]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    None,
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn id(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    /// Header marker shown next to the column name
    pub fn marker(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }

    /// none → ascending → descending → none
    pub fn cycle(&self) -> Self {
        match self {
            Self::None => Self::Ascending,
            Self::Ascending => Self::Descending,
            Self::Descending => Self::None,
        }
    }

    fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            Self::Descending => ordering.reverse(),
            _ => ordering,
        }
    }
}

/// A value derived from a team for ordering purposes.
#[derive(Debug, Clone, PartialEq)]
pub enum Comparable {
    Number(f64),
    Text(String),
}

impl Comparable {
    /// The empty string sorts with the missing values
    fn is_blank(&self) -> bool {
        matches!(self, Comparable::Text(s) if s.is_empty())
    }

    fn as_text(&self) -> String {
        match self {
            Comparable::Number(n) => n.to_string(),
            Comparable::Text(s) => s.clone(),
        }
    }
}

/// A team paired with its position in the data file.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedTeam {
    pub original_index: usize,
    pub team: TeamRecord,
}

/// Win fraction from a "W-L" record; `None` when unparsable or no games played.
pub fn record_value(record: &str) -> Option<f64> {
    let caps = RECORD_PATTERN.captures(record)?;
    let wins: f64 = caps[1].parse().ok()?;
    let losses: f64 = caps[2].parse().ok()?;
    let games = wins + losses;
    if games == 0.0 {
        return None;
    }
    Some(wins / games).filter(|v| v.is_finite())
}

/// Numeric value after dropping everything but digits, `.` and `-`.
pub fn numeric_value(value: &Loose) -> Option<f64> {
    let stripped: String = value
        .to_string()
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    if stripped.is_empty() {
        return None;
    }
    stripped.parse::<f64>().ok().filter(|n| n.is_finite())
}

pub fn derive_comparable(entry: &IndexedTeam, key: SortKey) -> Option<Comparable> {
    let team = &entry.team;
    match key {
        SortKey::Rank => Some(Comparable::Number(entry.original_index as f64)),
        SortKey::Team => Some(Comparable::Text(team.team.to_lowercase())),
        SortKey::Record => team
            .record
            .as_deref()
            .and_then(record_value)
            .map(Comparable::Number),
        SortKey::PointsFor => team
            .points_for
            .as_ref()
            .and_then(numeric_value)
            .map(Comparable::Number),
        SortKey::PointsAgainst => team
            .points_against
            .as_ref()
            .and_then(numeric_value)
            .map(Comparable::Number),
        SortKey::Championships => {
            let champs = team.championships.clone().unwrap_or(Loose::Number(0.0));
            numeric_value(&champs).map(Comparable::Number)
        }
    }
}

fn compare_values(a: &Comparable, b: &Comparable) -> Ordering {
    match (a, b) {
        (Comparable::Number(x), Comparable::Number(y)) => {
            x.partial_cmp(y).unwrap_or(Ordering::Equal)
        }
        _ => a.as_text().cmp(&b.as_text()),
    }
}

/// Missing values go last whatever the direction; the rest follow `direction`.
pub fn compare_nulls_last(
    a: Option<&Comparable>,
    b: Option<&Comparable>,
    direction: SortDirection,
) -> Ordering {
    let a = a.filter(|v| !v.is_blank());
    let b = b.filter(|v| !v.is_blank());
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => direction.apply(compare_values(a, b)),
    }
}

/// Order `teams` by `key` in `direction`. The input order is taken as the
/// original order; the sort is stable.
pub fn sort_teams(
    teams: &[IndexedTeam],
    key: SortKey,
    direction: SortDirection,
) -> Vec<&IndexedTeam> {
    match (key, direction) {
        (_, SortDirection::None) => teams.iter().collect(),
        (SortKey::Rank, SortDirection::Descending) => teams.iter().rev().collect(),
        _ => {
            let mut keyed: Vec<(Option<Comparable>, &IndexedTeam)> = teams
                .iter()
                .map(|t| (derive_comparable(t, key), t))
                .collect();
            keyed.sort_by(|(a, _), (b, _)| compare_nulls_last(a.as_ref(), b.as_ref(), direction));
            keyed.into_iter().map(|(_, t)| t).collect()
        }
    }
}

/// Direction state of every column control.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortControls {
    directions: [SortDirection; SortKey::COUNT],
}

impl SortControls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn direction(&self, key: SortKey) -> SortDirection {
        self.directions[key.index()]
    }

    /// Set one control and reset every other control. Selecting none on any
    /// column leaves all controls at none, which is the original order.
    pub fn select(&mut self, key: SortKey, direction: SortDirection) {
        self.directions = [SortDirection::None; SortKey::COUNT];
        self.directions[key.index()] = direction;
    }

    /// The one control not set to none, if any
    pub fn active(&self) -> Option<(SortKey, SortDirection)> {
        SortKey::all()
            .into_iter()
            .map(|key| (key, self.direction(key)))
            .find(|(_, dir)| *dir != SortDirection::None)
    }

    pub fn reset(&mut self) {
        self.directions = [SortDirection::None; SortKey::COUNT];
    }
}

/// The standings as loaded plus the order currently on display.
#[derive(Debug, Clone)]
pub struct StandingsTable {
    original: Vec<IndexedTeam>,
    order: Vec<usize>,
    controls: SortControls,
}

impl StandingsTable {
    pub fn new(teams: Vec<TeamRecord>) -> Self {
        let original: Vec<IndexedTeam> = teams
            .into_iter()
            .enumerate()
            .map(|(original_index, team)| IndexedTeam { original_index, team })
            .collect();
        let order = (0..original.len()).collect();
        Self {
            original,
            order,
            controls: SortControls::new(),
        }
    }

    /// Handle a direction change on one column's control and recompute the order
    pub fn select(&mut self, key: SortKey, direction: SortDirection) {
        self.controls.select(key, direction);
        self.resort();
    }

    /// Back to load-time order with every control at none
    pub fn reset(&mut self) {
        self.controls.reset();
        self.resort();
    }

    fn resort(&mut self) {
        self.order = match self.controls.active() {
            Some((key, direction)) => sort_teams(&self.original, key, direction)
                .into_iter()
                .map(|t| t.original_index)
                .collect(),
            None => (0..self.original.len()).collect(),
        };
        debug!(
            "SORT: active={:?} rows={}",
            self.controls.active(),
            self.order.len()
        );
    }

    /// Rows in display order
    pub fn rows(&self) -> impl Iterator<Item = &IndexedTeam> + '_ {
        self.order.iter().map(move |&i| &self.original[i])
    }

    pub fn original(&self) -> &[IndexedTeam] {
        &self.original
    }

    pub fn controls(&self) -> &SortControls {
        &self.controls
    }

    pub fn len(&self) -> usize {
        self.original.len()
    }

    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }
}
