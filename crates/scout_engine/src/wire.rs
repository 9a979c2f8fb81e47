//! JSON shapes shared by the backend and the local store.
//!
//! Decoding is lenient: a missing field is repaired to its default (empty
//! text, zero novelty) and unknown `source`/`level` strings are kept as-is,
//! so a malformed item is displayed rather than dropping the whole response.
use scout_core::{Item, Level, ProfileSummary, Source};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub source: String,
    pub level: String,
    pub novelty_score: f64,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stars: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        Item {
            source: Source::parse(&record.source),
            level: Level::parse(&record.level),
            id: record.id,
            title: record.title,
            description: record.description,
            novelty_score: record.novelty_score,
            url: record.url,
            tags: record.tags,
            stars: record.stars,
            language: record.language,
        }
    }
}

impl From<&Item> for ItemRecord {
    fn from(item: &Item) -> Self {
        ItemRecord {
            id: item.id.clone(),
            title: item.title.clone(),
            description: item.description.clone(),
            source: item.source.as_str().to_string(),
            level: item.level.as_str().to_string(),
            novelty_score: item.novelty_score,
            url: item.url.clone(),
            tags: item.tags.clone(),
            stars: item.stars,
            language: item.language.clone(),
        }
    }
}

pub(crate) fn items_from_records(records: Vec<ItemRecord>) -> Vec<Item> {
    records.into_iter().map(Item::from).collect()
}

/// Profile as served by `GET /api/profile/{email}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub branch: String,
    pub year: String,
    pub skills: Vec<String>,
    pub area_of_interest: Vec<String>,
}

impl From<UserProfile> for ProfileSummary {
    fn from(profile: UserProfile) -> Self {
        ProfileSummary {
            name: profile.name,
            skills: profile.skills,
            interests: profile.area_of_interest,
        }
    }
}
