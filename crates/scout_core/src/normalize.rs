//! Search result normalization.
//!
//! Backend results are passed through untouched. When the active source
//! filter asks for papers or datasets and the backend returned none of that
//! category, the [`FallbackPolicy`] may append one clearly labelled sample
//! item per missing category so a partial backend outage never renders the
//! category as empty. GitHub never gets a fallback.
use url::Url;
use uuid::Uuid;

use crate::item::SAMPLE_ID_PREFIX;
use crate::{Item, Level, SearchFilter, Source};

pub const SAMPLE_PAPER_NOVELTY: f64 = 7.4;
pub const SAMPLE_DATASET_NOVELTY: f64 = 6.5;
pub const SAMPLE_TAG: &str = "sample";
const SAMPLE_BASE_URL: &str = "https://example.com/samples/";

/// Degraded-mode policy for empty source categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackPolicy {
    /// Append a labelled sample item for each requested category that came back empty.
    #[default]
    Synthesize,
    /// Return backend results exactly as received.
    Disabled,
}

impl FallbackPolicy {
    pub fn from_enabled(enabled: bool) -> Self {
        if enabled {
            FallbackPolicy::Synthesize
        } else {
            FallbackPolicy::Disabled
        }
    }

    pub fn is_enabled(self) -> bool {
        self == FallbackPolicy::Synthesize
    }

    /// Merges `raw` backend results with the active filter.
    ///
    /// Output order: backend results, then the sample paper, then the sample
    /// dataset. Callers reject empty queries before getting here.
    pub fn normalize(self, raw: Vec<Item>, filter: &SearchFilter, query: &str) -> Vec<Item> {
        let mut items = raw;
        if self == FallbackPolicy::Disabled {
            return items;
        }

        let query = query.trim();
        let needs_paper = filter.source.requests(&Source::Paper)
            && !items.iter().any(|item| item.source == Source::Paper);
        let needs_dataset = filter.source.requests(&Source::Dataset)
            && !items.iter().any(|item| item.source == Source::Dataset);

        if needs_paper {
            items.push(sample_paper(query));
        }
        if needs_dataset {
            items.push(sample_dataset(query));
        }
        items
    }
}

/// Convenience for [`FallbackPolicy::normalize`] with the default policy.
pub fn normalize(raw: Vec<Item>, filter: &SearchFilter, query: &str) -> Vec<Item> {
    FallbackPolicy::Synthesize.normalize(raw, filter, query)
}

fn sample_paper(query: &str) -> Item {
    Item {
        id: sample_id("paper"),
        title: format!("Sample paper: {query}"),
        description: format!(
            "[Sample] No research papers came back for \"{query}\". This placeholder is not a real result."
        ),
        source: Source::Paper,
        level: Level::Intermediate,
        novelty_score: SAMPLE_PAPER_NOVELTY,
        url: sample_url("paper", query),
        tags: Some(sample_tags(query)),
        stars: None,
        language: None,
    }
}

fn sample_dataset(query: &str) -> Item {
    Item {
        id: sample_id("dataset"),
        title: format!("Sample dataset: {query}"),
        description: format!(
            "[Sample] No datasets came back for \"{query}\". This placeholder is not a real result."
        ),
        source: Source::Dataset,
        level: Level::Easy,
        novelty_score: SAMPLE_DATASET_NOVELTY,
        url: sample_url("dataset", query),
        tags: Some(sample_tags(query)),
        stars: None,
        language: None,
    }
}

fn sample_id(kind: &str) -> String {
    format!("{SAMPLE_ID_PREFIX}{kind}-{}", Uuid::new_v4())
}

fn sample_tags(query: &str) -> Vec<String> {
    vec![SAMPLE_TAG.to_string(), query.to_string()]
}

fn sample_url(kind: &str, query: &str) -> String {
    match Url::parse(SAMPLE_BASE_URL).and_then(|base| base.join(kind)) {
        Ok(mut url) => {
            url.query_pairs_mut().append_pair("q", query);
            url.into()
        }
        Err(_) => SAMPLE_BASE_URL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_url_encodes_query() {
        assert_eq!(
            sample_url("paper", "graph neural nets"),
            "https://example.com/samples/paper?q=graph+neural+nets"
        );
    }

    #[test]
    fn sample_ids_are_fresh() {
        let a = sample_paper("x");
        let b = sample_paper("x");
        assert_ne!(a.id, b.id);
        assert!(a.is_sample());
    }
}
