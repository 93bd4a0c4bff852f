use crate::sorting::SortDirection;
use crate::types::Standings;

/// Every state change in the standings view goes through an action.
///
/// Actions come from key events (see `keys`) and from the initial data load.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Column focus
    FocusColumnLeft,
    FocusColumnRight,

    // Sort controls (applied to the focused column)
    CycleDirection,
    SetDirection(SortDirection),
    ResetSort,

    // Data loaded
    StandingsLoaded(Result<Standings, String>),

    // System actions
    Quit,
}
