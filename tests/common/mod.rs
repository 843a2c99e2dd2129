use std::collections::BTreeSet;

use serde_json::json;

use realty_catalog::domain::announcement::NewAnnouncement;
use realty_catalog::domain::media::{MediaKind, MediaRef};
use realty_catalog::domain::property::NewProperty;
use realty_catalog::domain::types::{Price, PriceRange};
use realty_catalog::repository::memory::InMemoryCatalog;
use realty_catalog::repository::{AnnouncementWriter, PropertyWriter};

/// Builds one property fixture; prices step by 10 000 from 90 000.
pub fn new_property(index: i32) -> NewProperty {
    let district = if index <= 7 { "Centro" } else { "Savassi" };
    let mut extras = BTreeSet::new();
    if index % 2 == 0 {
        extras.insert("garage".to_string());
    }
    if index % 3 == 0 {
        extras.insert("pool".to_string());
    }

    NewProperty::new(
        format!("Listing #{index}"),
        Some(district.to_string()),
        Some(50.0 + f64::from(index)),
        Price::new(80_000.0 + f64::from(index) * 10_000.0).unwrap(),
        Some(PriceRange::new(100_000.0, 200_000.0).unwrap()),
        extras,
        json!({ "rooms": 2 }),
    )
}

pub fn new_announcement(index: i32) -> NewAnnouncement {
    NewAnnouncement::new(
        format!("Ad #{index}"),
        Some("Centro".to_string()),
        Price::new(100_000.0 + f64::from(index) * 5_000.0).unwrap(),
        BTreeSet::new(),
        json!({}),
    )
}

pub fn photo(url: &str) -> MediaRef {
    MediaRef {
        url: url.to_string(),
        kind: MediaKind::Photo,
    }
}

/// A catalog seeded with 13 properties and 5 announcements.
pub fn seeded_catalog() -> InMemoryCatalog {
    let catalog = InMemoryCatalog::new();

    let properties: Vec<_> = (1..=13).map(new_property).collect();
    catalog.create_properties(&properties).unwrap();

    for index in 1..=5 {
        catalog.create_announcement(&new_announcement(index)).unwrap();
    }

    catalog
}
