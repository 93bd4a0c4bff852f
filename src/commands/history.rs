use crate::data_provider::{DataError, LeagueDataProvider};
use crate::formatting::{escape_html, loose_or_default, loose_or_placeholder, or_placeholder};
use crate::types::{Award, Champion, History};
use anyhow::{Context, Result};

fn format_champion_row(champion: &Champion) -> String {
    format!(
        "<tr><td>{}</td><td><b>{}</b></td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
        escape_html(&loose_or_default(champion.year.as_ref(), "")),
        escape_html(&champion.champion),
        escape_html(or_placeholder(champion.runner_up.as_deref())),
        escape_html(&loose_or_placeholder(champion.score.as_ref())),
        escape_html(champion.note.as_deref().unwrap_or("")),
    )
}

fn format_award_card(award: &Award) -> String {
    let year = match &award.year {
        Some(y) if y.is_truthy() => y.to_string(),
        _ => String::new(),
    };
    format!(
        concat!(
            "<div class=\"card award\">\n",
            "  <div>\n",
            "    <div class=\"muted award-label\">{label}</div>\n",
            "    <div class=\"award-winner\">{winner}</div>\n",
            "    <div class=\"muted award-detail\">{detail}</div>\n",
            "  </div>\n",
            "  <div class=\"chip\">{year}</div>\n",
            "</div>\n",
        ),
        label = escape_html(&award.label),
        winner = escape_html(&award.winner),
        detail = escape_html(award.detail.as_deref().unwrap_or("")),
        year = escape_html(&year),
    )
}

/// History fragment: season range, champions table and award cards
pub fn format_history(history: &History) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "<p class=\"muted\">Seasons: <span id=\"hRange\">{}</span></p>\n",
        escape_html(&loose_or_placeholder(history.seasons.as_ref()))
    ));

    output.push_str("<table class=\"champions\">\n<thead><tr><th>Year</th><th>Champion</th><th>Runner-up</th><th>Score</th><th>Note</th></tr></thead>\n");
    output.push_str("<tbody id=\"champBody\">\n");
    for champion in &history.champions {
        output.push_str(&format_champion_row(champion));
    }
    output.push_str("</tbody>\n</table>\n");

    output.push_str("<div id=\"awards\" class=\"grid\">\n");
    for award in &history.awards {
        output.push_str(&format_award_card(award));
    }
    output.push_str("</div>\n");
    output
}

pub async fn render(provider: &dyn LeagueDataProvider) -> Result<String, DataError> {
    let history = provider.history().await?;
    Ok(format_history(&history))
}

pub async fn run(provider: &dyn LeagueDataProvider) -> Result<()> {
    let output = render(provider).await.context("Failed to load history")?;
    print!("{}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{create_mock_history, MockProvider};

    #[test]
    fn test_format_history() {
        let output = format_history(&create_mock_history());
        assert!(output.contains(r#"<span id="hRange">2015–2024</span>"#));
        assert!(output.contains(
            "<tr><td>2024</td><td><b>Bears</b></td><td>Wolves</td><td>131.2 – 118.9</td><td></td></tr>"
        ));
        assert!(output.contains(r#"<div class="award-winner">J. Doe</div>"#));
        assert!(output.contains(r#"<div class="muted award-detail">412 pts</div>"#));
        assert!(output.contains(r#"<div class="chip">2024</div>"#));
    }

    #[test]
    fn test_empty_history_uses_placeholders() {
        let output = format_history(&History::default());
        assert!(output.contains(r#"<span id="hRange">—</span>"#));
        assert!(output.contains("<tbody id=\"champBody\">\n</tbody>"));
    }

    #[test]
    fn test_champion_missing_fields() {
        let history = History {
            champions: vec![Champion {
                champion: "Owls".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let output = format_history(&history);
        assert!(output.contains("<tr><td></td><td><b>Owls</b></td><td>—</td><td>—</td><td></td></tr>"));
    }

    #[tokio::test]
    async fn test_render_propagates_load_failure() {
        assert!(render(&MockProvider::failing()).await.is_err());
        assert!(render(&MockProvider::new()).await.is_ok());
    }
}
