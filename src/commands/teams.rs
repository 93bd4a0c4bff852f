use crate::data_provider::{DataError, LeagueDataProvider};
use crate::formatting::{escape_html, or_placeholder};
use crate::types::{TeamBio, TeamDirectory};
use anyhow::{Context, Result};

fn format_team_card(team: &TeamBio) -> String {
    let bio = match team.bio.as_deref() {
        Some(b) if !b.is_empty() => b,
        _ => "Bio coming soon.",
    };
    format!(
        concat!(
            "<div class=\"card team\">\n",
            "  <h2>{name}</h2>\n",
            "  <div class=\"muted\">Manager: <b>{manager}</b></div>\n",
            "  <div class=\"muted\">Division: <b>{division}</b></div>\n",
            "  <div class=\"bio\">{bio}</div>\n",
            "</div>\n",
        ),
        name = escape_html(&team.team_name),
        manager = escape_html(or_placeholder(team.manager.as_deref())),
        division = escape_html(or_placeholder(team.division.as_deref())),
        bio = escape_html(bio),
    )
}

/// Teams fragment: one bio card per team
pub fn format_teams(directory: &TeamDirectory) -> String {
    let mut output = String::from("<div id=\"teamsGrid\" class=\"grid\">\n");
    for team in &directory.teams {
        output.push_str(&format_team_card(team));
    }
    output.push_str("</div>\n");
    output
}

pub async fn render(provider: &dyn LeagueDataProvider) -> Result<String, DataError> {
    let directory = provider.team_directory().await?;
    Ok(format_teams(&directory))
}

pub async fn run(provider: &dyn LeagueDataProvider) -> Result<()> {
    let output = render(provider).await.context("Failed to load teams")?;
    print!("{}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::create_mock_team_directory;

    #[test]
    fn test_format_teams() {
        let output = format_teams(&create_mock_team_directory());
        assert!(output.contains("<h2>Bears</h2>"));
        assert!(output.contains("Manager: <b>Sam</b>"));
        assert!(output.contains("Division: <b>North</b>"));
        assert!(output.contains("Founded 2015.\nThree titles."));
    }

    #[test]
    fn test_missing_fields_use_placeholders() {
        let output = format_teams(&create_mock_team_directory());
        assert!(output.contains("<h2>Foxes</h2>\n  <div class=\"muted\">Manager: <b>—</b></div>"));
        assert!(output.contains("Division: <b>—</b>"));
        assert!(output.contains("Bio coming soon."));
    }

    #[test]
    fn test_empty_directory() {
        let output = format_teams(&TeamDirectory::default());
        assert_eq!(output, "<div id=\"teamsGrid\" class=\"grid\">\n</div>\n");
    }
}
