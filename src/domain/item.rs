//! List Item Entity
//!
//! A row of a collaborative travel list, partitioned into owner groups and
//! ranked inside each group by an integer ordering key.

use std::fmt;
use std::hash::Hash;

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Group label of one list kind: a small fixed set of owner sections.
///
/// Each list kind supplies its own enumeration plus the remote table it
/// lives in; the engine and stores are generic over this trait, so both
/// list kinds share one implementation.
pub trait Group:
    Copy + Eq + Hash + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Remote table holding this list kind
    const TABLE: &'static str;
    /// All labels in display order
    const ALL: &'static [Self];

    /// Wire label, matching the serde representation
    fn as_str(&self) -> &'static str;
}

/// Owner sections of the shared wishlist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WishlistGroup {
    Mine,
    Partner,
    Shared,
}

impl Group for WishlistGroup {
    const TABLE: &'static str = "wishlist";
    const ALL: &'static [Self] = &[Self::Mine, Self::Partner, Self::Shared];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Mine => "mine",
            Self::Partner => "partner",
            Self::Shared => "shared",
        }
    }
}

/// Owner sections of the souvenir list (no shared section)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SouvenirGroup {
    Mine,
    Partner,
}

impl Group for SouvenirGroup {
    const TABLE: &'static str = "souvenirs";
    const ALL: &'static [Self] = &[Self::Mine, Self::Partner];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Mine => "mine",
            Self::Partner => "partner",
        }
    }
}

/// A row of a collaborative list.
///
/// The remote store assigns `id` and the timestamps. `order` ranks the item
/// inside its owner group; values need not be contiguous, display ties are
/// broken by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem<G> {
    pub id: i64,
    pub text: String,
    #[serde(rename = "is_checked")]
    pub checked: bool,
    #[serde(rename = "owner")]
    pub group: G,
    #[serde(rename = "sort_order")]
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
