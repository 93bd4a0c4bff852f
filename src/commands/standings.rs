use crate::data_provider::{DataError, LeagueDataProvider};
use crate::formatting::{escape_html, format_fixed1, or_placeholder, PLACEHOLDER};
use crate::sorting::{IndexedTeam, SortControls, SortDirection, SortKey, StandingsTable};
use crate::types::Standings;
use anyhow::{Context, Result};
use tracing::debug;

/// Championship count, zero when absent, placeholder when not a number
pub fn format_championships(team: &IndexedTeam) -> String {
    match &team.team.championships {
        None => "0".to_string(),
        Some(value) => match value.to_f64() {
            Some(n) => n.to_string(),
            None => PLACEHOLDER.to_string(),
        },
    }
}

/// Header cell for one column, carrying that column's direction control
fn format_sort_control(key: SortKey, controls: &SortControls) -> String {
    let selected = controls.direction(key);
    let options: String = [
        SortDirection::None,
        SortDirection::Ascending,
        SortDirection::Descending,
    ]
    .iter()
    .map(|dir| {
        let label = match dir {
            SortDirection::None => PLACEHOLDER,
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        };
        format!(
            "<option value=\"{}\"{}>{}</option>",
            dir.id(),
            if *dir == selected { " selected" } else { "" },
            label
        )
    })
    .collect();

    format!(
        "<th>{}<select class=\"sort-dd\" data-key=\"{}\">{}</select></th>",
        escape_html(key.name()),
        key.id(),
        options
    )
}

fn format_row(position: usize, team: &IndexedTeam) -> String {
    let record = &team.team;
    format!(
        "<tr><td>{}</td><td><b>{}</b></td><td>{}</td><td>{}</td><td>{}</td><td class=\"champ-cell\">{}</td></tr>\n",
        position,
        escape_html(&record.team),
        escape_html(or_placeholder(record.record.as_deref())),
        format_fixed1(record.points_for.as_ref()),
        format_fixed1(record.points_against.as_ref()),
        format_championships(team),
    )
}

/// Table body rows in the controller's current order; the first column is the display position
pub fn format_standings_rows(table: &StandingsTable) -> String {
    table
        .rows()
        .enumerate()
        .map(|(idx, team)| format_row(idx + 1, team))
        .collect()
}

/// Full standings table: sort controls in the header, rows in display order
pub fn format_standings_table(table: &StandingsTable) -> String {
    let mut output = String::new();
    output.push_str("<table class=\"standings\">\n<thead><tr>");
    for key in SortKey::all() {
        output.push_str(&format_sort_control(key, table.controls()));
    }
    output.push_str("</tr></thead>\n<tbody id=\"standingsBody\">\n");
    output.push_str(&format_standings_rows(table));
    output.push_str("</tbody>\n</table>\n");
    output
}

/// Standings fragment with the given column sorted (or load order when `None`)
pub fn format_standings(standings: &Standings, sort: Option<(SortKey, SortDirection)>) -> String {
    let mut table = StandingsTable::new(standings.teams.clone());
    if let Some((key, direction)) = sort {
        table.select(key, direction);
    }

    let mut output = String::new();
    output.push_str(&format!(
        "<p class=\"muted\">Updated: <span id=\"sUpdated\">{}</span></p>\n",
        escape_html(or_placeholder(standings.last_updated.as_deref()))
    ));
    output.push_str(&format_standings_table(&table));
    output
}

pub async fn render(
    provider: &dyn LeagueDataProvider,
    sort: Option<(SortKey, SortDirection)>,
) -> Result<String, DataError> {
    let standings = provider.standings().await?;
    debug!("STANDINGS: {} teams, sort={:?}", standings.teams.len(), sort);
    Ok(format_standings(&standings, sort))
}

pub async fn run(
    provider: &dyn LeagueDataProvider,
    sort: Option<(SortKey, SortDirection)>,
) -> Result<()> {
    let output = render(provider, sort)
        .await
        .context("Failed to load standings")?;
    print!("{}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{create_mock_standings, MockProvider};
    use crate::types::{Loose, TeamRecord};

    fn team_order(output: &str) -> Vec<&str> {
        output
            .match_indices("<td><b>")
            .map(|(i, _)| {
                let rest = &output[i + 7..];
                &rest[..rest.find("</b>").unwrap()]
            })
            .collect()
    }

    #[test]
    fn test_default_order_is_load_order() {
        let output = format_standings(&create_mock_standings(), None);
        assert_eq!(team_order(&output), vec!["Wolves", "Bears", "Foxes"]);
        assert!(output.contains(r#"<span id="sUpdated">Nov 4</span>"#));
    }

    #[test]
    fn test_sorted_by_record() {
        let standings = create_mock_standings();
        let asc = format_standings(&standings, Some((SortKey::Record, SortDirection::Ascending)));
        assert_eq!(team_order(&asc), vec!["Wolves", "Bears", "Foxes"]);

        let desc = format_standings(&standings, Some((SortKey::Record, SortDirection::Descending)));
        assert_eq!(team_order(&desc), vec!["Bears", "Wolves", "Foxes"]);
    }

    #[test]
    fn test_position_column_follows_display_order() {
        let output = format_standings(
            &create_mock_standings(),
            Some((SortKey::Rank, SortDirection::Descending)),
        );
        assert_eq!(team_order(&output), vec!["Foxes", "Bears", "Wolves"]);
        assert!(output.contains("<tr><td>1</td><td><b>Foxes</b>"));
        assert!(output.contains("<tr><td>3</td><td><b>Wolves</b>"));
    }

    #[test]
    fn test_row_cells_and_placeholders() {
        let output = format_standings(&create_mock_standings(), None);
        assert!(output.contains(
            "<tr><td>2</td><td><b>Bears</b></td><td>8-2</td><td>102.0</td><td>90.4</td><td class=\"champ-cell\">3</td></tr>"
        ));
        assert!(output.contains(
            "<tr><td>3</td><td><b>Foxes</b></td><td>—</td><td>—</td><td>—</td><td class=\"champ-cell\">0</td></tr>"
        ));
    }

    #[test]
    fn test_header_reflects_active_control() {
        let output = format_standings(
            &create_mock_standings(),
            Some((SortKey::PointsFor, SortDirection::Descending)),
        );
        assert!(output.contains(
            r#"data-key="points_for"><option value="none">—</option><option value="asc">▲</option><option value="desc" selected>▼</option>"#
        ));
        assert!(output.contains(
            r#"data-key="record"><option value="none" selected>—</option>"#
        ));
        assert_eq!(output.matches(" selected>").count(), SortKey::COUNT);
    }

    #[test]
    fn test_non_numeric_championships() {
        let standings = Standings {
            last_updated: None,
            teams: vec![TeamRecord {
                team: "Owls".to_string(),
                championships: Some(Loose::from("many")),
                ..Default::default()
            }],
        };
        let output = format_standings(&standings, None);
        assert!(output.contains("<td class=\"champ-cell\">—</td>"));
        assert!(output.contains(r#"<span id="sUpdated">—</span>"#));
    }

    #[tokio::test]
    async fn test_render_from_provider() {
        let output = render(&MockProvider::new(), Some((SortKey::Team, SortDirection::Ascending)))
            .await
            .unwrap();
        assert_eq!(team_order(&output), vec!["Bears", "Foxes", "Wolves"]);
    }
}
