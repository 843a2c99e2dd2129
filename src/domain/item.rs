//! Polymorphic seam over the two catalog record types.
//!
//! Lists, filters and the in-memory store only ever look at items through
//! this trait, so one generic implementation serves properties and
//! announcements alike.

use crate::domain::announcement::Announcement;
use crate::domain::property::Property;
use crate::domain::types::{AnnouncementId, Price, PropertyId};

pub trait CatalogItem {
    /// Stable identity within one catalog.
    type Id: Copy + Eq + std::fmt::Debug;

    fn item_id(&self) -> Self::Id;

    /// Price shown on the card and matched against price filters.
    fn display_price(&self) -> Price;

    fn district(&self) -> Option<&str>;

    fn has_extra(&self, extra: &str) -> bool;

    /// Free text the search box matches against.
    fn search_haystack(&self) -> String;
}

impl CatalogItem for Property {
    type Id = PropertyId;

    fn item_id(&self) -> PropertyId {
        self.id
    }

    fn display_price(&self) -> Price {
        self.price
    }

    fn district(&self) -> Option<&str> {
        self.district.as_deref()
    }

    fn has_extra(&self, extra: &str) -> bool {
        self.extras.contains(extra)
    }

    fn search_haystack(&self) -> String {
        match &self.district {
            Some(district) => format!("{} {district}", self.title),
            None => self.title.clone(),
        }
    }
}

impl CatalogItem for Announcement {
    type Id = AnnouncementId;

    fn item_id(&self) -> AnnouncementId {
        self.id
    }

    fn display_price(&self) -> Price {
        self.price
    }

    fn district(&self) -> Option<&str> {
        self.district.as_deref()
    }

    fn has_extra(&self, extra: &str) -> bool {
        self.extras.contains(extra)
    }

    fn search_haystack(&self) -> String {
        match &self.district {
            Some(district) => format!("{} {district}", self.title),
            None => self.title.clone(),
        }
    }
}
