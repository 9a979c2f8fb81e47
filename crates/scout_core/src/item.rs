use std::fmt;

/// Provenance of an item.
///
/// `Other` carries any value the backend sent that is not one of the known
/// categories. Such items are kept and displayed but never counted in
/// per-source analytics buckets.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Source {
    Github,
    Paper,
    Dataset,
    Other(String),
}

impl Source {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "github" => Source::Github,
            "paper" => Source::Paper,
            "dataset" => Source::Dataset,
            other => Source::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Source::Github => "github",
            Source::Paper => "paper",
            Source::Dataset => "dataset",
            Source::Other(raw) => raw,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Difficulty tag of an item. `Other` mirrors [`Source::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Level {
    Easy,
    Intermediate,
    Advanced,
    Other(String),
}

impl Level {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "easy" => Level::Easy,
            "intermediate" => Level::Intermediate,
            "advanced" => Level::Advanced,
            other => Level::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Level::Easy => "easy",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
            Level::Other(raw) => raw,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type ItemId = String;

/// A discoverable unit: repository, paper or dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub source: Source,
    pub level: Level,
    pub novelty_score: f64,
    pub url: String,
    pub tags: Option<Vec<String>>,
    pub stars: Option<u64>,
    pub language: Option<String>,
}

pub(crate) const SAMPLE_ID_PREFIX: &str = "sample-";

impl Item {
    /// True for placeholder items injected by the fallback policy.
    pub fn is_sample(&self) -> bool {
        self.id.starts_with(SAMPLE_ID_PREFIX)
    }
}

/// Source filter as selected in the explore view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceFilter {
    #[default]
    All,
    Github,
    Paper,
    Dataset,
}

impl SourceFilter {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "all" => Some(SourceFilter::All),
            "github" => Some(SourceFilter::Github),
            "paper" | "papers" => Some(SourceFilter::Paper),
            "dataset" | "datasets" => Some(SourceFilter::Dataset),
            _ => None,
        }
    }

    /// Query parameter value; `All` means the parameter is omitted.
    pub fn as_param(self) -> Option<&'static str> {
        match self {
            SourceFilter::All => None,
            SourceFilter::Github => Some("github"),
            SourceFilter::Paper => Some("paper"),
            SourceFilter::Dataset => Some("dataset"),
        }
    }

    /// Whether results of `source` are requested by this filter.
    pub fn requests(self, source: &Source) -> bool {
        match self {
            SourceFilter::All => true,
            SourceFilter::Github => *source == Source::Github,
            SourceFilter::Paper => *source == Source::Paper,
            SourceFilter::Dataset => *source == Source::Dataset,
        }
    }
}

/// Level filter as selected in the explore view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LevelFilter {
    #[default]
    All,
    Easy,
    Intermediate,
    Advanced,
}

impl LevelFilter {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "all" => Some(LevelFilter::All),
            "easy" => Some(LevelFilter::Easy),
            "intermediate" => Some(LevelFilter::Intermediate),
            "advanced" => Some(LevelFilter::Advanced),
            _ => None,
        }
    }

    pub fn as_param(self) -> Option<&'static str> {
        match self {
            LevelFilter::All => None,
            LevelFilter::Easy => Some("easy"),
            LevelFilter::Intermediate => Some("intermediate"),
            LevelFilter::Advanced => Some("advanced"),
        }
    }
}

/// Active filter pair for a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchFilter {
    pub source: SourceFilter,
    pub level: LevelFilter,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_wire_values_round_trip_through_other() {
        let source = Source::parse("kaggle");
        assert_eq!(source, Source::Other("kaggle".to_string()));
        assert_eq!(source.as_str(), "kaggle");
        assert_eq!(Level::parse("expert").as_str(), "expert");
    }

    #[test]
    fn filter_parsing_is_lenient_about_case_and_plurals() {
        assert_eq!(SourceFilter::parse(" Papers "), Some(SourceFilter::Paper));
        assert_eq!(SourceFilter::parse("nope"), None);
        assert_eq!(LevelFilter::parse("ADVANCED"), Some(LevelFilter::Advanced));
        assert_eq!(SourceFilter::All.as_param(), None);
    }
}
