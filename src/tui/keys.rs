/// Keyboard event to action mapping
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use tracing::trace;

use super::action::Action;
use crate::sorting::SortDirection;

pub fn key_to_action(key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    trace!("KEY: {:?}", key.code);
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::FocusColumnLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::FocusColumnRight),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::CycleDirection),
        KeyCode::Char('a') => Some(Action::SetDirection(SortDirection::Ascending)),
        KeyCode::Char('d') => Some(Action::SetDirection(SortDirection::Descending)),
        KeyCode::Char('n') => Some(Action::SetDirection(SortDirection::None)),
        KeyCode::Char('r') => Some(Action::ResetSort),
        _ => None,
    }
}
