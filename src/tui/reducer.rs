use tracing::debug;

use super::action::Action;
use super::state::AppState;
use crate::data_provider::LOAD_FAILURE_MESSAGE;
use crate::sorting::StandingsTable;

/// Pure state reducer
///
/// Takes the current state and an action and returns the new state. No I/O
/// happens here; the sort controller inside the state enforces that only
/// one column is sorted at a time.
pub fn reduce(state: AppState, action: Action) -> AppState {
    let mut new_state = state;
    match action {
        Action::FocusColumnLeft => {
            new_state.focused = new_state.focused.prev();
        }
        Action::FocusColumnRight => {
            new_state.focused = new_state.focused.next();
        }
        Action::CycleDirection => {
            let key = new_state.focused;
            let direction = new_state.table.controls().direction(key).cycle();
            debug!("REDUCER: cycle {} -> {:?}", key.id(), direction);
            new_state.table.select(key, direction);
        }
        Action::SetDirection(direction) => {
            let key = new_state.focused;
            debug!("REDUCER: set {} -> {:?}", key.id(), direction);
            new_state.table.select(key, direction);
        }
        Action::ResetSort => {
            new_state.table.reset();
        }
        Action::StandingsLoaded(Ok(standings)) => {
            debug!("REDUCER: standings loaded ({} teams)", standings.teams.len());
            new_state.table = StandingsTable::new(standings.teams);
            new_state.last_updated = standings.last_updated;
            new_state.loading = false;
            new_state.status_message = None;
            new_state.status_is_error = false;
        }
        Action::StandingsLoaded(Err(e)) => {
            debug!("REDUCER: standings failed to load: {}", e);
            new_state.loading = false;
            new_state.set_status_error_message(LOAD_FAILURE_MESSAGE.to_string());
        }
        Action::Quit => {}
    }
    new_state
}
