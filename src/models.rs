//! Wire models for travel-group travelogues and members.

use serde::{Deserialize, Serialize};

/// A single user-authored travel post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Travelogue {
    #[serde(rename = "tlIdx")]
    pub id: i64,
    #[serde(rename = "tlTitle")]
    pub title: String,
    #[serde(rename = "tlContent")]
    pub content: String,
    /// Storage key of the attached image, relative to the asset prefix.
    #[serde(rename = "tlImage")]
    pub image: String,
    /// `1` marks a public post, anything else is private.
    #[serde(rename = "tlPublic")]
    pub public_flag: i32,
    #[serde(rename = "usIdx")]
    pub author_id: i64,
}

impl Travelogue {
    pub fn visibility(&self) -> Visibility {
        Visibility::from_flag(self.public_flag)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
}

impl Visibility {
    pub fn from_flag(flag: i32) -> Self {
        if flag == 1 {
            Visibility::Public
        } else {
            Visibility::Private
        }
    }

    /// Badge text shown next to the icon.
    pub fn label(self) -> &'static str {
        match self {
            Visibility::Public => "공개",
            Visibility::Private => "비공개",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Visibility::Public => "public-icon.svg",
            Visibility::Private => "private-icon.svg",
        }
    }

    pub fn icon_alt(self) -> &'static str {
        match self {
            Visibility::Public => "public-icon",
            Visibility::Private => "private-icon",
        }
    }
}

/// Roster entry for a travel-group member.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Member {
    #[serde(rename = "usIdx")]
    pub user_id: i64,
    #[serde(rename = "meUser", default)]
    pub user: Option<MemberUser>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MemberUser {
    #[serde(rename = "usName", default)]
    pub name: Option<String>,
    /// Avatar storage key, relative to the asset prefix.
    #[serde(rename = "usProfile", default)]
    pub profile_image: Option<String>,
}

/// The signed-in user as cached by the rest of the application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurrentUser {
    #[serde(rename = "usIdx")]
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn travelogue_decodes_backend_json_and_ignores_extra_fields() {
        let json = r#"{
            "tlIdx": 7,
            "tlTitle": "Jeju day 1",
            "tlContent": "Windy but lovely",
            "tlImage": "abc.jpg",
            "tlPublic": 1,
            "usIdx": 42,
            "tgIdx": 3
        }"#;
        let t: Travelogue = serde_json::from_str(json).unwrap();
        assert_eq!(t.id, 7);
        assert_eq!(t.author_id, 42);
        assert_eq!(t.visibility(), Visibility::Public);
    }

    #[test]
    fn any_flag_other_than_one_is_private() {
        assert_eq!(Visibility::from_flag(0), Visibility::Private);
        assert_eq!(Visibility::from_flag(2), Visibility::Private);
        assert_eq!(Visibility::from_flag(-1), Visibility::Private);
        assert_eq!(Visibility::Private.label(), "비공개");
        assert_eq!(Visibility::Public.icon(), "public-icon.svg");
    }

    #[test]
    fn member_without_user_details_still_decodes() {
        let m: Member = serde_json::from_str(r#"{"usIdx": 5}"#).unwrap();
        assert_eq!(m.user_id, 5);
        assert!(m.user.is_none());

        let m: Member = serde_json::from_str(r#"{"usIdx": 5, "meUser": {"usName": "Mina"}}"#).unwrap();
        let user = m.user.unwrap();
        assert_eq!(user.name.as_deref(), Some("Mina"));
        assert!(user.profile_image.is_none());
    }
}
