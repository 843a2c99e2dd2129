use crate::{
    domain::{
        announcement::{Announcement, AnnouncementStatus, NewAnnouncement, UpdateAnnouncement},
        filter::ItemFilter,
        media::MediaRef,
        property::{NewProperty, Property, UpdateProperty},
        types::{AnnouncementId, PropertyId, PublicId},
    },
    repository::errors::RepositoryResult,
};

pub mod errors;
pub mod memory;
#[cfg(feature = "test-mocks")]
pub mod mock;

#[derive(Debug, Clone)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

#[derive(Debug, Clone, Default)]
pub struct PropertyListQuery {
    pub filter: ItemFilter,
    pub search: Option<String>,
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, Default)]
pub struct AnnouncementListQuery {
    pub filter: ItemFilter,
    pub search: Option<String>,
    pub status: Option<AnnouncementStatus>,
    pub pagination: Option<Pagination>,
}

impl PropertyListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, filter: ItemFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

impl AnnouncementListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, filter: ItemFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn status(mut self, status: AnnouncementStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait PropertyReader {
    fn get_property_by_id(&self, id: PropertyId) -> RepositoryResult<Option<Property>>;
    /// Returns the filtered total alongside the requested page slice.
    fn list_properties(&self, query: PropertyListQuery)
    -> RepositoryResult<(usize, Vec<Property>)>;
}

pub trait PropertyWriter {
    fn create_properties(&self, new_properties: &[NewProperty]) -> RepositoryResult<usize>;
    fn update_property(
        &self,
        property_id: PropertyId,
        updates: &UpdateProperty,
    ) -> RepositoryResult<Property>;
    fn delete_property(&self, property_id: PropertyId) -> RepositoryResult<()>;
}

pub trait AnnouncementReader {
    fn get_announcement_by_id(
        &self,
        id: AnnouncementId,
    ) -> RepositoryResult<Option<Announcement>>;
    /// Returns the filtered total alongside the requested page slice.
    fn list_announcements(
        &self,
        query: AnnouncementListQuery,
    ) -> RepositoryResult<(usize, Vec<Announcement>)>;
}

pub trait AnnouncementWriter {
    fn create_announcement(
        &self,
        new_announcement: &NewAnnouncement,
    ) -> RepositoryResult<Announcement>;
    fn update_announcement(
        &self,
        announcement_id: AnnouncementId,
        updates: &UpdateAnnouncement,
    ) -> RepositoryResult<Announcement>;
    fn set_announcement_status(
        &self,
        announcement_id: AnnouncementId,
        status: AnnouncementStatus,
    ) -> RepositoryResult<Announcement>;
    fn delete_announcement(&self, announcement_id: AnnouncementId) -> RepositoryResult<()>;
}

pub trait MediaReader {
    fn list_media(&self, item: PublicId) -> RepositoryResult<Vec<MediaRef>>;
}
