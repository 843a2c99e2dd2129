//! In-memory catalog store.
//!
//! The marketplace shell fetches flat record lists and hands them to this
//! store; filtering, searching and pagination then run entirely client-side.
//! Insertion order is preserved and is the order every list operation
//! returns.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::Utc;

use crate::domain::announcement::{Announcement, AnnouncementStatus, NewAnnouncement, UpdateAnnouncement};
use crate::domain::filter::ItemFilter;
use crate::domain::item::CatalogItem;
use crate::domain::media::MediaRef;
use crate::domain::property::{NewProperty, Property, UpdateProperty};
use crate::domain::types::{AnnouncementId, PropertyId, PublicId};
use crate::pagination::visible_slice;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    AnnouncementListQuery, AnnouncementReader, AnnouncementWriter, MediaReader, Pagination,
    PropertyListQuery, PropertyReader, PropertyWriter,
};

/// Implements every repository trait over lock-guarded vectors.
#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    inner: Arc<RwLock<CatalogState>>,
}

struct CatalogState {
    properties: Vec<Property>,
    announcements: Vec<Announcement>,
    media: HashMap<PublicId, Vec<MediaRef>>,
    next_property_id: i32,
    next_announcement_id: i32,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            properties: Vec::new(),
            announcements: Vec::new(),
            media: HashMap::new(),
            next_property_id: 1,
            next_announcement_id: 1,
        }
    }
}

/// Filter, search and slice one record list, returning the filtered total
/// with the requested page.
fn filtered_page<T, F>(
    items: &[T],
    filter: &ItemFilter,
    search: &Option<String>,
    accept: F,
    pagination: &Option<Pagination>,
) -> (usize, Vec<T>)
where
    T: CatalogItem + Clone,
    F: Fn(&T) -> bool,
{
    let term = search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    let matches: Vec<&T> = items
        .iter()
        .filter(|item| accept(item))
        .filter(|item| filter.matches(*item))
        .filter(|item| {
            term.as_deref()
                .is_none_or(|t| item.search_haystack().to_lowercase().contains(t))
        })
        .collect();

    let total = matches.len();
    let page_items = match pagination {
        Some(p) => visible_slice(&matches, p.page, p.per_page)
            .iter()
            .map(|item| (*item).clone())
            .collect(),
        None => matches.into_iter().cloned().collect(),
    };

    (total, page_items)
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the media attached to one catalog record.
    pub fn attach_media(&self, item: PublicId, media: Vec<MediaRef>) -> RepositoryResult<()> {
        let mut state = self.inner.write()?;
        state.media.insert(item, media);
        Ok(())
    }
}

impl PropertyReader for InMemoryCatalog {
    fn get_property_by_id(&self, id: PropertyId) -> RepositoryResult<Option<Property>> {
        let state = self.inner.read()?;
        Ok(state.properties.iter().find(|p| p.id == id).cloned())
    }

    fn list_properties(
        &self,
        query: PropertyListQuery,
    ) -> RepositoryResult<(usize, Vec<Property>)> {
        let state = self.inner.read()?;
        Ok(filtered_page(
            &state.properties,
            &query.filter,
            &query.search,
            |_| true,
            &query.pagination,
        ))
    }
}

impl PropertyWriter for InMemoryCatalog {
    fn create_properties(&self, new_properties: &[NewProperty]) -> RepositoryResult<usize> {
        let mut state = self.inner.write()?;
        let now = Utc::now().naive_utc();

        for new_property in new_properties {
            let id = PropertyId::new(state.next_property_id)?;
            state.next_property_id += 1;
            state.properties.push(Property {
                id,
                public_id: PublicId::new(),
                title: new_property.title.clone(),
                district: new_property.district.clone(),
                area_m2: new_property.area_m2,
                price: new_property.price,
                market_range: new_property.market_range,
                extras: new_property.extras.clone(),
                attributes: new_property.attributes.clone(),
                created_at: now,
                updated_at: now,
            });
        }

        Ok(new_properties.len())
    }

    fn update_property(
        &self,
        property_id: PropertyId,
        updates: &UpdateProperty,
    ) -> RepositoryResult<Property> {
        let mut state = self.inner.write()?;
        let property = state
            .properties
            .iter_mut()
            .find(|p| p.id == property_id)
            .ok_or(RepositoryError::NotFound)?;

        property.title = updates.title.clone();
        property.district = updates.district.clone();
        property.area_m2 = updates.area_m2;
        property.price = updates.price;
        property.market_range = updates.market_range;
        property.extras = updates.extras.clone();
        property.attributes = updates.attributes.clone();
        property.updated_at = Utc::now().naive_utc();

        Ok(property.clone())
    }

    fn delete_property(&self, property_id: PropertyId) -> RepositoryResult<()> {
        let mut state = self.inner.write()?;
        let index = state
            .properties
            .iter()
            .position(|p| p.id == property_id)
            .ok_or(RepositoryError::NotFound)?;

        let removed = state.properties.remove(index);
        state.media.remove(&removed.public_id);
        Ok(())
    }
}

impl AnnouncementReader for InMemoryCatalog {
    fn get_announcement_by_id(
        &self,
        id: AnnouncementId,
    ) -> RepositoryResult<Option<Announcement>> {
        let state = self.inner.read()?;
        Ok(state.announcements.iter().find(|a| a.id == id).cloned())
    }

    fn list_announcements(
        &self,
        query: AnnouncementListQuery,
    ) -> RepositoryResult<(usize, Vec<Announcement>)> {
        let state = self.inner.read()?;
        Ok(filtered_page(
            &state.announcements,
            &query.filter,
            &query.search,
            |announcement| {
                query
                    .status
                    .as_ref()
                    .is_none_or(|status| &announcement.status == status)
            },
            &query.pagination,
        ))
    }
}

impl AnnouncementWriter for InMemoryCatalog {
    fn create_announcement(
        &self,
        new_announcement: &NewAnnouncement,
    ) -> RepositoryResult<Announcement> {
        let mut state = self.inner.write()?;
        let now = Utc::now().naive_utc();

        let id = AnnouncementId::new(state.next_announcement_id)?;
        state.next_announcement_id += 1;

        let announcement = Announcement {
            id,
            public_id: PublicId::new(),
            title: new_announcement.title.clone(),
            district: new_announcement.district.clone(),
            price: new_announcement.price,
            status: AnnouncementStatus::Draft,
            extras: new_announcement.extras.clone(),
            attributes: new_announcement.attributes.clone(),
            created_at: now,
            updated_at: now,
        };
        state.announcements.push(announcement.clone());

        Ok(announcement)
    }

    fn update_announcement(
        &self,
        announcement_id: AnnouncementId,
        updates: &UpdateAnnouncement,
    ) -> RepositoryResult<Announcement> {
        let mut state = self.inner.write()?;
        let announcement = state
            .announcements
            .iter_mut()
            .find(|a| a.id == announcement_id)
            .ok_or(RepositoryError::NotFound)?;

        announcement.title = updates.title.clone();
        announcement.district = updates.district.clone();
        announcement.price = updates.price;
        announcement.extras = updates.extras.clone();
        announcement.attributes = updates.attributes.clone();
        announcement.updated_at = Utc::now().naive_utc();

        Ok(announcement.clone())
    }

    fn set_announcement_status(
        &self,
        announcement_id: AnnouncementId,
        status: AnnouncementStatus,
    ) -> RepositoryResult<Announcement> {
        let mut state = self.inner.write()?;
        let announcement = state
            .announcements
            .iter_mut()
            .find(|a| a.id == announcement_id)
            .ok_or(RepositoryError::NotFound)?;

        announcement.status = status;
        announcement.updated_at = Utc::now().naive_utc();

        Ok(announcement.clone())
    }

    fn delete_announcement(&self, announcement_id: AnnouncementId) -> RepositoryResult<()> {
        let mut state = self.inner.write()?;
        let index = state
            .announcements
            .iter()
            .position(|a| a.id == announcement_id)
            .ok_or(RepositoryError::NotFound)?;

        let removed = state.announcements.remove(index);
        state.media.remove(&removed.public_id);
        Ok(())
    }
}

impl MediaReader for InMemoryCatalog {
    fn list_media(&self, item: PublicId) -> RepositoryResult<Vec<MediaRef>> {
        let state = self.inner.read()?;
        Ok(state.media.get(&item).cloned().unwrap_or_default())
    }
}
