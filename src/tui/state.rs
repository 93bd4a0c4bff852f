use crate::sorting::{SortKey, StandingsTable};

/// Everything the standings view renders from
#[derive(Debug, Clone)]
pub struct AppState {
    pub table: StandingsTable,
    pub last_updated: Option<String>,

    /// Column whose control the sort keys act on
    pub focused: SortKey,

    pub loading: bool,
    pub status_message: Option<String>,
    pub status_is_error: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            table: StandingsTable::new(Vec::new()),
            last_updated: None,
            focused: SortKey::Rank,
            loading: true,
            status_message: None,
            status_is_error: false,
        }
    }

    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = false;
    }

    pub fn set_status_error_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = true;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
