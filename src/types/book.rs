use serde::{Deserialize, Serialize};

/// A normalized catalog work, as persisted in block attributes.
///
/// Fields serialize under the upstream's camelCase names so a persisted
/// record re-hydrates verbatim across sessions.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRecord {
    pub isbn:             String,
    pub title:            String,
    pub seo_friendly_url: String,
    #[serde(default)]
    pub author:           Vec<AuthorCredit>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorCredit {
    pub author_display: String,
}
