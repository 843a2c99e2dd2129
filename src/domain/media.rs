use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Reference to one piece of media attached to a catalog record.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MediaRef {
    pub url: String,
    pub kind: MediaKind,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum MediaKind {
    Photo,
    Video,
    FloorPlan,
    Other(String),
}

impl Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaKind::Photo => write!(f, "Photo"),
            MediaKind::Video => write!(f, "Video"),
            MediaKind::FloorPlan => write!(f, "FloorPlan"),
            MediaKind::Other(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for MediaKind {
    fn from(s: &str) -> Self {
        match s {
            "Photo" => MediaKind::Photo,
            "Video" => MediaKind::Video,
            "FloorPlan" => MediaKind::FloorPlan,
            _ => MediaKind::Other(s.to_string()),
        }
    }
}
