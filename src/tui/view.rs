use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::state::AppState;
use crate::commands::standings::format_championships;
use crate::config::ThemeConfig;
use crate::formatting::{format_fixed1, or_placeholder, PLACEHOLDER};
use crate::sorting::{IndexedTeam, SortKey};

const POSITION_COL_WIDTH: u16 = 4;
const TEAM_COL_WIDTH: u16 = 24;
const RECORD_COL_WIDTH: u16 = 9;
const POINTS_COL_WIDTH: u16 = 9;
const CHAMPS_COL_WIDTH: u16 = 8;

fn column_width(key: SortKey) -> u16 {
    match key {
        SortKey::Rank => POSITION_COL_WIDTH,
        SortKey::Team => TEAM_COL_WIDTH,
        SortKey::Record => RECORD_COL_WIDTH,
        SortKey::PointsFor | SortKey::PointsAgainst => POINTS_COL_WIDTH,
        SortKey::Championships => CHAMPS_COL_WIDTH,
    }
}

/// Cut `text` to at most `width` terminal columns, ending with `…` when cut
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

fn header_row(state: &AppState, theme: &ThemeConfig) -> Row<'static> {
    let cells = SortKey::all().into_iter().map(|key| {
        let direction = state.table.controls().direction(key);
        let label = format!("{}{}", key.name(), direction.marker());
        let mut style = Style::default().add_modifier(Modifier::BOLD);
        if key == state.focused {
            style = style.fg(theme.selection_fg).add_modifier(Modifier::UNDERLINED);
        }
        Cell::from(label).style(style)
    });
    Row::new(cells)
}

fn team_row(position: usize, team: &IndexedTeam, theme: &ThemeConfig) -> Row<'static> {
    let record = &team.team;
    let value_cell = |text: String| {
        let style = if text == PLACEHOLDER {
            Style::default().fg(theme.null_fg)
        } else {
            Style::default()
        };
        Cell::from(text).style(style)
    };
    Row::new(vec![
        Cell::from(position.to_string()),
        Cell::from(truncate_to_width(&record.team, TEAM_COL_WIDTH as usize)),
        value_cell(or_placeholder(record.record.as_deref()).to_string()),
        value_cell(format_fixed1(record.points_for.as_ref())),
        value_cell(format_fixed1(record.points_against.as_ref())),
        value_cell(format_championships(team)),
    ])
}

fn status_line(state: &AppState) -> Line<'static> {
    match &state.status_message {
        Some(msg) if state.status_is_error => Line::from(Span::styled(
            format!(" ERROR: {}", msg),
            Style::default().fg(Color::Red),
        )),
        Some(msg) => Line::raw(format!(" {}", msg)),
        None => Line::raw(" ←→ Column   Enter Cycle   a/d/n Asc/Desc/None   r Reset   q Quit"),
    }
}

/// Draw the standings table with its sort header and the status line
pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &ThemeConfig) {
    let [table_area, status_area] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(area);

    let title = format!(
        " Standings · Updated {} ",
        or_placeholder(state.last_updated.as_deref())
    );
    let block = Block::default().borders(Borders::ALL).title(title);

    if state.loading {
        f.render_widget(Paragraph::new("Loading standings...").block(block), table_area);
    } else {
        let rows: Vec<Row> = state
            .table
            .rows()
            .enumerate()
            .map(|(idx, team)| team_row(idx + 1, team, theme))
            .collect();
        let widths: Vec<Constraint> = SortKey::all()
            .into_iter()
            .map(|key| Constraint::Length(column_width(key)))
            .collect();
        let table = Table::new(rows, widths)
            .header(header_row(state, theme))
            .block(block)
            .column_spacing(1);
        f.render_widget(table, table_area);
    }

    f.render_widget(Paragraph::new(status_line(state)), status_area);
}
