use std::collections::BTreeSet;

use serde_json::json;

use realty_catalog::domain::announcement::AnnouncementStatus;
use realty_catalog::domain::filter::ItemFilter;
use realty_catalog::domain::property::UpdateProperty;
use realty_catalog::domain::types::{AnnouncementId, Price, PriceRange, PropertyId};
use realty_catalog::repository::errors::RepositoryError;
use realty_catalog::repository::memory::InMemoryCatalog;
use realty_catalog::repository::{
    AnnouncementListQuery, AnnouncementReader, AnnouncementWriter, MediaReader,
    PropertyListQuery, PropertyReader, PropertyWriter,
};

mod common;

#[test]
fn test_property_repository_crud() {
    let catalog = InMemoryCatalog::new();

    let created = catalog
        .create_properties(&[common::new_property(1), common::new_property(2)])
        .unwrap();
    assert_eq!(created, 2);

    let (total, items) = catalog.list_properties(PropertyListQuery::new()).unwrap();
    assert_eq!(total, 2);
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].title, "Listing #1");
    let second = items[1].clone();

    let updates = UpdateProperty::new(
        "Renovated flat".to_string(),
        second.district.clone(),
        second.area_m2,
        Price::new(250_000.0).unwrap(),
        second.market_range,
        BTreeSet::new(),
        json!({}),
    );
    let updated = catalog.update_property(second.id, &updates).unwrap();
    assert_eq!(updated.title, "Renovated flat");
    assert_eq!(updated.price.get(), 250_000.0);

    catalog.delete_property(items[0].id).unwrap();
    assert!(catalog.get_property_by_id(items[0].id).unwrap().is_none());

    let (total_after, items_after) = catalog.list_properties(PropertyListQuery::new()).unwrap();
    assert_eq!(total_after, 1);
    assert_eq!(items_after[0].title, "Renovated flat");

    let missing = PropertyId::new(99).unwrap();
    assert!(matches!(
        catalog.delete_property(missing),
        Err(RepositoryError::NotFound)
    ));
}

#[test]
fn test_list_returns_totals_with_page_slices() {
    let catalog = common::seeded_catalog();

    let (total, page1) = catalog
        .list_properties(PropertyListQuery::new().paginate(1, 6))
        .unwrap();
    assert_eq!(total, 13);
    assert_eq!(page1.len(), 6);
    // Insertion order is the list order.
    assert_eq!(page1[0].title, "Listing #1");
    assert_eq!(page1[5].title, "Listing #6");

    let (_, page3) = catalog
        .list_properties(PropertyListQuery::new().paginate(3, 6))
        .unwrap();
    assert_eq!(page3.len(), 1);
    assert_eq!(page3[0].title, "Listing #13");

    // Out-of-range pages come back empty; the total is untouched.
    let (total, beyond) = catalog
        .list_properties(PropertyListQuery::new().paginate(9, 6))
        .unwrap();
    assert_eq!(total, 13);
    assert!(beyond.is_empty());
}

#[test]
fn test_filters_narrow_the_list() {
    let catalog = common::seeded_catalog();

    let filter = ItemFilter {
        district: Some("Savassi".to_string()),
        ..ItemFilter::default()
    };
    let (total, items) = catalog
        .list_properties(PropertyListQuery::new().filter(filter))
        .unwrap();
    assert_eq!(total, 6);
    assert!(items.iter().all(|p| p.district.as_deref() == Some("Savassi")));

    // Prices run 90k..210k; [100k, 150k] keeps listings 2 through 7.
    let filter = ItemFilter {
        price_range: Some(PriceRange::new(100_000.0, 150_000.0).unwrap()),
        ..ItemFilter::default()
    };
    let (total, items) = catalog
        .list_properties(PropertyListQuery::new().filter(filter))
        .unwrap();
    assert_eq!(total, 6);
    assert_eq!(items[0].title, "Listing #2");
    assert_eq!(items[5].title, "Listing #7");

    // Extras are an AND-set: garage and pool means multiples of six.
    let filter = ItemFilter {
        extras: BTreeSet::from(["garage".to_string(), "pool".to_string()]),
        ..ItemFilter::default()
    };
    let (total, items) = catalog
        .list_properties(PropertyListQuery::new().filter(filter))
        .unwrap();
    assert_eq!(total, 2);
    assert_eq!(items[0].title, "Listing #6");
    assert_eq!(items[1].title, "Listing #12");
}

#[test]
fn test_search_matches_title_and_district() {
    let catalog = common::seeded_catalog();

    let (total, items) = catalog
        .list_properties(PropertyListQuery::new().search("listing #1"))
        .unwrap();
    // Matches #1 plus #10..#13.
    assert_eq!(total, 5);
    assert_eq!(items[0].title, "Listing #1");

    let (total, _) = catalog
        .list_properties(PropertyListQuery::new().search("savassi"))
        .unwrap();
    assert_eq!(total, 6);

    let (total, _) = catalog
        .list_properties(PropertyListQuery::new().search("penthouse"))
        .unwrap();
    assert_eq!(total, 0);

    // Blank search terms are ignored.
    let (total, _) = catalog
        .list_properties(PropertyListQuery::new().search("   "))
        .unwrap();
    assert_eq!(total, 13);
}

#[test]
fn test_announcement_repository_crud() {
    let catalog = InMemoryCatalog::new();

    let created = catalog
        .create_announcement(&common::new_announcement(1))
        .unwrap();
    assert_eq!(created.status, AnnouncementStatus::Draft);

    let published = catalog
        .set_announcement_status(created.id, AnnouncementStatus::Published)
        .unwrap();
    assert_eq!(published.status, AnnouncementStatus::Published);

    catalog
        .create_announcement(&common::new_announcement(2))
        .unwrap();

    let (total, drafts) = catalog
        .list_announcements(AnnouncementListQuery::new().status(AnnouncementStatus::Draft))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(drafts[0].title, "Ad #2");

    catalog.delete_announcement(created.id).unwrap();
    assert!(catalog.get_announcement_by_id(created.id).unwrap().is_none());

    let missing = AnnouncementId::new(44).unwrap();
    assert!(matches!(
        catalog.delete_announcement(missing),
        Err(RepositoryError::NotFound)
    ));
}

#[test]
fn test_media_attachment_round_trip() {
    let catalog = common::seeded_catalog();
    let (_, items) = catalog.list_properties(PropertyListQuery::new()).unwrap();
    let first = &items[0];

    assert!(catalog.list_media(first.public_id).unwrap().is_empty());

    catalog
        .attach_media(
            first.public_id,
            vec![common::photo("https://cdn.example.com/a.jpg")],
        )
        .unwrap();

    let media = catalog.list_media(first.public_id).unwrap();
    assert_eq!(media.len(), 1);
    assert_eq!(media[0].url, "https://cdn.example.com/a.jpg");

    // Deleting the record drops its media.
    catalog.delete_property(first.id).unwrap();
    assert!(catalog.list_media(first.public_id).unwrap().is_empty());
}
