use serde::{Deserialize, Serialize};

/// One selectable genre: display text plus the opaque category URI the
/// catalog filters bestseller queries by. `value` is unique within a
/// fetched list.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreOption {
    pub label: String,
    pub value: String,
}
