pub mod build;
pub mod history;
pub mod power;
pub mod standings;
pub mod teams;

/// The site's pages, in nav order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Power,
    Standings,
    History,
    Teams,
}

impl Page {
    pub fn all() -> [Self; 4] {
        [Self::Power, Self::Standings, Self::History, Self::Teams]
    }

    /// Nav link label and page heading
    pub fn title(&self) -> &str {
        match self {
            Self::Power => "Power Rankings",
            Self::Standings => "Standings",
            Self::History => "History",
            Self::Teams => "Teams",
        }
    }

    /// Output file name, also the nav link target
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Power => "index.html",
            Self::Standings => "standings.html",
            Self::History => "history.html",
            Self::Teams => "teams.html",
        }
    }

    /// Value of the body's `data-page` attribute
    pub fn id(&self) -> &'static str {
        match self {
            Self::Power => "power",
            Self::Standings => "standings",
            Self::History => "history",
            Self::Teams => "teams",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_file_names_unique() {
        let mut names: Vec<_> = Page::all().iter().map(|p| p.file_name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 4);
    }

    #[test]
    fn test_power_is_index() {
        assert_eq!(Page::Power.file_name(), "index.html");
        assert_eq!(Page::all()[0], Page::Power);
    }
}
