use crate::data_provider::{DataError, LeagueDataProvider};
use crate::formatting::{delta_chip, escape_html, loose_or_default, or_placeholder, PLACEHOLDER};
use crate::types::{PowerRanking, PowerRankings};
use anyhow::{Context, Result};

fn format_ranking_row(ranking: &PowerRanking) -> String {
    let record = match ranking.record.as_deref() {
        Some(r) if !r.is_empty() => format!("Record: {}", r),
        _ => format!("Record: {}", PLACEHOLDER),
    };
    let streak = format!("Streak: {}", or_placeholder(ranking.streak.as_deref()));
    let meta = format!(
        "PF: {}  •  PA: {}  •  {}",
        loose_or_default(ranking.points_for.as_ref(), PLACEHOLDER),
        loose_or_default(ranking.points_against.as_ref(), PLACEHOLDER),
        streak
    );
    let notes = match ranking.blurb.as_deref() {
        Some(b) if !b.is_empty() => b,
        _ => "(No notes yet.)",
    };

    format!(
        concat!(
            "<div class=\"rank-row\">\n",
            "  <div class=\"rank-top\">\n",
            "    <div class=\"rank-name\">#{rank} — {team}</div>\n",
            "    <div class=\"rank-chips\">{delta}<span class=\"chip\">{record}</span></div>\n",
            "  </div>\n",
            "  <div class=\"rank-meta\">{meta}</div>\n",
            "  <div class=\"rank-notes\">{notes}</div>\n",
            "</div>\n",
        ),
        rank = escape_html(&loose_or_default(ranking.rank.as_ref(), PLACEHOLDER)),
        team = escape_html(&ranking.team),
        delta = delta_chip(ranking.delta.unwrap_or(0.0)),
        record = escape_html(&record),
        meta = escape_html(&meta),
        notes = escape_html(notes),
    )
}

/// Power rankings fragment: week and last-updated header followed by one row per team
pub fn format_power_rankings(power: &PowerRankings) -> String {
    let week = match &power.week {
        Some(w) if w.is_truthy() => format!("Week {}", w),
        _ => String::new(),
    };

    let mut output = String::new();
    output.push_str(&format!(
        "<div class=\"page-meta\"><span id=\"prWeek\">{}</span> <span class=\"muted\">Updated: <span id=\"prUpdated\">{}</span></span></div>\n",
        escape_html(&week),
        escape_html(or_placeholder(power.last_updated.as_deref())),
    ));
    output.push_str("<div id=\"prList\">\n");
    for ranking in &power.rankings {
        output.push_str(&format_ranking_row(ranking));
    }
    output.push_str("</div>\n");
    output
}

pub async fn render(provider: &dyn LeagueDataProvider) -> Result<String, DataError> {
    let power = provider.power_rankings().await?;
    Ok(format_power_rankings(&power))
}

pub async fn run(provider: &dyn LeagueDataProvider) -> Result<()> {
    let output = render(provider)
        .await
        .context("Failed to load power rankings")?;
    print!("{}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{create_mock_power_rankings, MockProvider};
    use crate::types::Loose;

    #[test]
    fn test_format_power_rankings_full_row() {
        let output = format_power_rankings(&create_mock_power_rankings());
        assert!(output.contains(r#"<span id="prWeek">Week 9</span>"#));
        assert!(output.contains(r#"<span id="prUpdated">Nov 4</span>"#));
        assert!(output.contains("#1 — Bears"));
        assert!(output.contains(r#"<span class="chip delta up">▲ 2</span>"#));
        assert!(output.contains("Record: 8-2"));
        assert!(output.contains("PF: 1204.6  •  PA: 1010.2  •  Streak: W4"));
        assert!(output.contains("Rolling."));
    }

    #[test]
    fn test_format_power_rankings_placeholders() {
        let output = format_power_rankings(&create_mock_power_rankings());
        assert!(output.contains(r#"<span class="chip delta down">▼ 1</span>"#));
        assert!(output.contains("PF: —  •  PA: —  •  Streak: —"));
        assert!(output.contains("(No notes yet.)"));
    }

    #[test]
    fn test_missing_week_and_update() {
        let power = PowerRankings {
            week: Some(Loose::Number(0.0)),
            ..Default::default()
        };
        let output = format_power_rankings(&power);
        assert!(output.contains(r#"<span id="prWeek"></span>"#));
        assert!(output.contains(r#"<span id="prUpdated">—</span>"#));
        assert!(output.contains("<div id=\"prList\">\n</div>"));
    }

    #[test]
    fn test_team_names_are_escaped() {
        let power = PowerRankings {
            rankings: vec![PowerRanking {
                team: "<script>".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let output = format_power_rankings(&power);
        assert!(output.contains("&lt;script&gt;"));
        assert!(!output.contains("<script>"));
        assert!(output.contains(r#"<span class="chip delta flat">— 0</span>"#));
    }

    #[tokio::test]
    async fn test_render_from_provider() {
        let output = render(&MockProvider::new()).await.unwrap();
        assert!(output.contains("#2 — Wolves"));
    }

    #[tokio::test]
    async fn test_render_propagates_load_failure() {
        assert!(render(&MockProvider::failing()).await.is_err());
    }
}
