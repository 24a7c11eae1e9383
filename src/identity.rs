//! Author identity lookup against the cached member roster.

use crate::models::{CurrentUser, Member, Travelogue};
use crate::storage::{self, KeyValueStore};

/// Cache key of the JSON-encoded member roster.
pub const MEMBER_LIST_KEY: &str = "memberList";
/// Cache key of the JSON-encoded signed-in user.
pub const USER_KEY: &str = "user";

pub const UNKNOWN_AUTHOR_NAME: &str = "Unknown";
pub const DEFAULT_AVATAR: &str = "default-profile.png";

/// Display identity of a travelogue's author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorIdentity {
    pub name: String,
    /// Avatar storage key, relative to the asset prefix.
    pub avatar: String,
}

/// Member roster in cache order. Ids are not assumed to be unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    members: Vec<Member>,
}

impl Roster {
    pub fn new(members: Vec<Member>) -> Self {
        Self { members }
    }

    /// First member with the given id.
    pub fn find(&self, user_id: i64) -> Option<&Member> {
        self.members.iter().find(|m| m.user_id == user_id)
    }

    /// Name and avatar for `user_id`. Each falls back to its placeholder on
    /// its own when the member, its details, or the field is missing or empty.
    pub fn resolve(&self, user_id: i64) -> AuthorIdentity {
        let user = self.find(user_id).and_then(|m| m.user.as_ref());
        let pick = |field: Option<&String>, placeholder: &str| {
            field
                .filter(|v| !v.is_empty())
                .cloned()
                .unwrap_or_else(|| placeholder.to_string())
        };

        AuthorIdentity {
            name: pick(user.and_then(|u| u.name.as_ref()), UNKNOWN_AUTHOR_NAME),
            avatar: pick(user.and_then(|u| u.profile_image.as_ref()), DEFAULT_AVATAR),
        }
    }
}

/// Identity data read once when the list mounts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityCache {
    pub roster: Roster,
    pub current_user: Option<CurrentUser>,
}

impl IdentityCache {
    /// Read the roster and signed-in user from `store`. Anything missing or
    /// malformed comes back empty. Roster entries that don't look like a
    /// member are skipped one by one; the rest of the roster still loads.
    pub fn load(store: &impl KeyValueStore) -> Self {
        let entries: Vec<serde_json::Value> =
            storage::load(store, MEMBER_LIST_KEY).unwrap_or_default();
        let total = entries.len();
        let members: Vec<Member> = entries
            .into_iter()
            .filter_map(|entry| serde_json::from_value(entry).ok())
            .collect();
        if members.len() < total {
            crate::log_warn!(
                "identity: skipped {} unreadable roster entries",
                total - members.len()
            );
        }
        let current_user: Option<CurrentUser> = storage::load(store, USER_KEY);
        crate::log_debug!(
            "identity: loaded {} roster entries, signed in: {}",
            members.len(),
            current_user.is_some()
        );

        Self {
            roster: Roster::new(members),
            current_user,
        }
    }

    /// Whether the signed-in user wrote `travelogue`.
    pub fn is_author(&self, travelogue: &Travelogue) -> bool {
        self.current_user
            .as_ref()
            .is_some_and(|u| u.id == travelogue.author_id)
    }
}
