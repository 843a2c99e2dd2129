use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

use crate::domain::announcement::{NewAnnouncement, UpdateAnnouncement};
use crate::domain::types::{AnnouncementId, Price, TypeConstraintError};

#[derive(Debug, Deserialize, Validate)]
/// Form data collected across the announcement creation steps.
pub struct AddAnnouncementForm {
    #[validate(length(min = 1))]
    pub title: String,
    pub district: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[serde(default)]
    pub extras: Vec<String>,
    #[serde(default)]
    pub attributes: Value,
}

#[derive(Debug, Deserialize, Validate)]
/// Form data for updating an existing announcement.
pub struct SaveAnnouncementForm {
    pub id: i32,
    #[validate(length(min = 1))]
    pub title: String,
    pub district: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[serde(default)]
    pub extras: Vec<String>,
    #[serde(default)]
    pub attributes: Value,
}

impl AddAnnouncementForm {
    pub fn into_new_announcement(self) -> Result<NewAnnouncement, TypeConstraintError> {
        Ok(NewAnnouncement::new(
            self.title,
            self.district,
            Price::new(self.price)?,
            self.extras.into_iter().collect(),
            self.attributes,
        ))
    }
}

impl SaveAnnouncementForm {
    pub fn into_update(self) -> Result<(AnnouncementId, UpdateAnnouncement), TypeConstraintError> {
        let id = AnnouncementId::new(self.id)?;
        let updates = UpdateAnnouncement::new(
            self.title,
            self.district,
            Price::new(self.price)?,
            self.extras.into_iter().collect(),
            self.attributes,
        );
        Ok((id, updates))
    }
}
