use std::collections::BTreeSet;
use std::fmt::Display;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::types::{AnnouncementId, Price, PublicId};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Announcement {
    pub id: AnnouncementId,
    pub public_id: PublicId,
    pub title: String,
    pub district: Option<String>,
    pub price: Price,
    pub status: AnnouncementStatus,
    pub extras: BTreeSet<String>,
    /// Unvalidated pass-through attributes rendered as-is by the shell.
    pub attributes: Value,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum AnnouncementStatus {
    Draft,
    Published,
    Paused,
    Other(String),
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewAnnouncement {
    pub title: String,
    pub district: Option<String>,
    pub price: Price,
    pub extras: BTreeSet<String>,
    pub attributes: Value,
}

impl NewAnnouncement {
    #[must_use]
    pub fn new(
        title: String,
        district: Option<String>,
        price: Price,
        extras: BTreeSet<String>,
        attributes: Value,
    ) -> Self {
        Self {
            title: title.trim().to_string(),
            district: district
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            price,
            extras: extras
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            attributes,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateAnnouncement {
    pub title: String,
    pub district: Option<String>,
    pub price: Price,
    pub extras: BTreeSet<String>,
    pub attributes: Value,
}

impl UpdateAnnouncement {
    #[must_use]
    pub fn new(
        title: String,
        district: Option<String>,
        price: Price,
        extras: BTreeSet<String>,
        attributes: Value,
    ) -> Self {
        Self {
            title: title.trim().to_string(),
            district: district
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            price,
            extras: extras
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            attributes,
        }
    }
}

impl Display for AnnouncementStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnnouncementStatus::Draft => write!(f, "Draft"),
            AnnouncementStatus::Published => write!(f, "Published"),
            AnnouncementStatus::Paused => write!(f, "Paused"),
            AnnouncementStatus::Other(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for AnnouncementStatus {
    fn from(s: &str) -> Self {
        match s {
            "Draft" => AnnouncementStatus::Draft,
            "Published" => AnnouncementStatus::Published,
            "Paused" => AnnouncementStatus::Paused,
            _ => AnnouncementStatus::Other(s.to_string()),
        }
    }
}

impl From<String> for AnnouncementStatus {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}
