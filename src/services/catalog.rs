//! Services assembling the catalog pages and their CRUD operations.

use validator::Validate;

use crate::config::CatalogConfig;
use crate::domain::announcement::{Announcement, AnnouncementStatus};
use crate::domain::media::MediaRef;
use crate::domain::property::Property;
use crate::domain::types::{AnnouncementId, PropertyId, PublicId};
use crate::dto::catalog::{
    AnnouncementCard, AnnouncementsPageData, CatalogQuery, PropertiesPageData, PropertyCard,
};
use crate::forms::announcement::{AddAnnouncementForm, SaveAnnouncementForm};
use crate::forms::filters::FilterForm;
use crate::forms::property::{AddPropertyForm, SavePropertyForm};
use crate::pagination::{Paginated, Viewport, page_count};
use crate::repository::{
    AnnouncementListQuery, AnnouncementReader, AnnouncementWriter, MediaReader,
    PropertyListQuery, PropertyReader, PropertyWriter,
};
use crate::services::pricing::price_guidance;
use crate::services::{ServiceError, ServiceResult};

/// Validates the filter panel input and loads the matching properties page.
pub fn filter_properties<R>(
    repo: &R,
    config: &CatalogConfig,
    form: FilterForm,
    viewport: Viewport,
) -> ServiceResult<PropertiesPageData>
where
    R: PropertyReader + MediaReader + ?Sized,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate filter form: {err}");
        return Err(ServiceError::Form("Invalid filter parameters".to_string()));
    }

    let query = form.into_catalog_query(config)?;
    load_properties_page(repo, config, query, viewport)
}

/// Loads one page of property cards for the catalog screen.
pub fn load_properties_page<R>(
    repo: &R,
    config: &CatalogConfig,
    query: CatalogQuery,
    viewport: Viewport,
) -> ServiceResult<PropertiesPageData>
where
    R: PropertyReader + MediaReader + ?Sized,
{
    let layout = config.layout(viewport);
    let page = query.page.unwrap_or(1);

    let search_query = query
        .search
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let mut list_query = PropertyListQuery::new()
        .filter(query.filter.clone())
        .paginate(page, layout.per_page);
    if let Some(term) = &search_query {
        list_query = list_query.search(term.clone());
    }

    let (total, properties) = repo.list_properties(list_query).map_err(|err| {
        log::error!("Failed to list properties: {err}");
        ServiceError::from(err)
    })?;

    let cards = properties
        .into_iter()
        .map(|property| property_card(repo, property))
        .collect();

    let total_pages = page_count(total, layout.per_page);
    let properties = Paginated::new(cards, page, total_pages, layout.window);

    Ok(PropertiesPageData {
        properties,
        search_query,
        filter: query.filter,
    })
}

/// Validates the filter panel input and loads the matching announcements page.
pub fn filter_announcements<R>(
    repo: &R,
    config: &CatalogConfig,
    form: FilterForm,
    status: Option<AnnouncementStatus>,
    viewport: Viewport,
) -> ServiceResult<AnnouncementsPageData>
where
    R: AnnouncementReader + MediaReader + ?Sized,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate filter form: {err}");
        return Err(ServiceError::Form("Invalid filter parameters".to_string()));
    }

    let query = form.into_catalog_query(config)?;
    load_announcements_page(repo, config, query, status, viewport)
}

/// Loads one page of announcement cards.
pub fn load_announcements_page<R>(
    repo: &R,
    config: &CatalogConfig,
    query: CatalogQuery,
    status: Option<AnnouncementStatus>,
    viewport: Viewport,
) -> ServiceResult<AnnouncementsPageData>
where
    R: AnnouncementReader + MediaReader + ?Sized,
{
    let layout = config.layout(viewport);
    let page = query.page.unwrap_or(1);

    let search_query = query
        .search
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let mut list_query = AnnouncementListQuery::new()
        .filter(query.filter.clone())
        .paginate(page, layout.per_page);
    if let Some(term) = &search_query {
        list_query = list_query.search(term.clone());
    }
    if let Some(status) = status {
        list_query = list_query.status(status);
    }

    let (total, announcements) = repo.list_announcements(list_query).map_err(|err| {
        log::error!("Failed to list announcements: {err}");
        ServiceError::from(err)
    })?;

    let cards = announcements
        .into_iter()
        .map(|announcement| announcement_card(repo, announcement))
        .collect();

    let total_pages = page_count(total, layout.per_page);
    let announcements = Paginated::new(cards, page, total_pages, layout.window);

    Ok(AnnouncementsPageData {
        announcements,
        search_query,
        filter: query.filter,
    })
}

/// A failed media lookup degrades to an empty gallery; the card still renders.
fn card_media<R>(repo: &R, item: PublicId) -> Vec<MediaRef>
where
    R: MediaReader + ?Sized,
{
    repo.list_media(item).unwrap_or_else(|err| {
        log::warn!("Failed to load media for {item}: {err}");
        Vec::new()
    })
}

fn property_card<R>(repo: &R, property: Property) -> PropertyCard
where
    R: MediaReader + ?Sized,
{
    let media = card_media(repo, property.public_id);
    let guidance = property
        .market_range
        .as_ref()
        .and_then(|range| price_guidance(Some(property.price.get()), range));

    PropertyCard {
        id: property.id,
        public_id: property.public_id,
        title: property.title,
        district: property.district,
        area_m2: property.area_m2,
        price: property.price.get(),
        media,
        guidance,
    }
}

fn announcement_card<R>(repo: &R, announcement: Announcement) -> AnnouncementCard
where
    R: MediaReader + ?Sized,
{
    let media = card_media(repo, announcement.public_id);

    AnnouncementCard {
        id: announcement.id,
        public_id: announcement.public_id,
        title: announcement.title,
        district: announcement.district,
        price: announcement.price.get(),
        status: announcement.status.to_string(),
        media,
    }
}

/// Validates the add-property form and persists a new catalog record.
pub fn add_property<R>(repo: &R, form: AddPropertyForm) -> ServiceResult<()>
where
    R: PropertyWriter + ?Sized,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate property form: {err}");
        return Err(ServiceError::Form("Invalid property data".to_string()));
    }

    let new_property = form.into_new_property()?;

    repo.create_properties(&[new_property]).map_err(|err| {
        log::error!("Failed to add a property: {err}");
        ServiceError::from(err)
    })?;

    Ok(())
}

/// Applies the validated updates to an existing property.
pub fn save_property<R>(repo: &R, form: SavePropertyForm) -> ServiceResult<Property>
where
    R: PropertyWriter + ?Sized,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate property form: {err}");
        return Err(ServiceError::Form("Invalid property data".to_string()));
    }

    let (id, updates) = form.into_update()?;

    repo.update_property(id, &updates).map_err(|err| {
        log::error!("Failed to save property {id}: {err}");
        ServiceError::from(err)
    })
}

pub fn delete_property<R>(repo: &R, property_id: PropertyId) -> ServiceResult<()>
where
    R: PropertyWriter + ?Sized,
{
    repo.delete_property(property_id).map_err(|err| {
        log::error!("Failed to delete property {property_id}: {err}");
        ServiceError::from(err)
    })
}

/// Validates the announcement form and creates the record in `Draft` status.
pub fn add_announcement<R>(repo: &R, form: AddAnnouncementForm) -> ServiceResult<Announcement>
where
    R: AnnouncementWriter + ?Sized,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate announcement form: {err}");
        return Err(ServiceError::Form("Invalid announcement data".to_string()));
    }

    let new_announcement = form.into_new_announcement()?;

    repo.create_announcement(&new_announcement).map_err(|err| {
        log::error!("Failed to add an announcement: {err}");
        ServiceError::from(err)
    })
}

/// Applies the validated updates to an existing announcement.
pub fn save_announcement<R>(repo: &R, form: SaveAnnouncementForm) -> ServiceResult<Announcement>
where
    R: AnnouncementWriter + ?Sized,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate announcement form: {err}");
        return Err(ServiceError::Form("Invalid announcement data".to_string()));
    }

    let (id, updates) = form.into_update()?;

    repo.update_announcement(id, &updates).map_err(|err| {
        log::error!("Failed to save announcement {id}: {err}");
        ServiceError::from(err)
    })
}

pub fn set_announcement_status<R>(
    repo: &R,
    announcement_id: AnnouncementId,
    status: AnnouncementStatus,
) -> ServiceResult<Announcement>
where
    R: AnnouncementWriter + ?Sized,
{
    repo.set_announcement_status(announcement_id, status)
        .map_err(|err| {
            log::error!("Failed to update announcement {announcement_id} status: {err}");
            ServiceError::from(err)
        })
}

pub fn delete_announcement<R>(repo: &R, announcement_id: AnnouncementId) -> ServiceResult<()>
where
    R: AnnouncementWriter + ?Sized,
{
    repo.delete_announcement(announcement_id).map_err(|err| {
        log::error!("Failed to delete announcement {announcement_id}: {err}");
        ServiceError::from(err)
    })
}
