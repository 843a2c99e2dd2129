//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::announcement::{Announcement, AnnouncementStatus, NewAnnouncement, UpdateAnnouncement};
use crate::domain::media::MediaRef;
use crate::domain::property::{NewProperty, Property, UpdateProperty};
use crate::domain::types::{AnnouncementId, PropertyId, PublicId};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    AnnouncementListQuery, AnnouncementReader, AnnouncementWriter, MediaReader,
    PropertyListQuery, PropertyReader, PropertyWriter,
};

mock! {
    pub Repository {}

    impl PropertyReader for Repository {
        fn get_property_by_id(&self, id: PropertyId) -> RepositoryResult<Option<Property>>;
        fn list_properties(
            &self,
            query: PropertyListQuery,
        ) -> RepositoryResult<(usize, Vec<Property>)>;
    }

    impl PropertyWriter for Repository {
        fn create_properties(&self, new_properties: &[NewProperty]) -> RepositoryResult<usize>;
        fn update_property(
            &self,
            property_id: PropertyId,
            updates: &UpdateProperty,
        ) -> RepositoryResult<Property>;
        fn delete_property(&self, property_id: PropertyId) -> RepositoryResult<()>;
    }

    impl AnnouncementReader for Repository {
        fn get_announcement_by_id(
            &self,
            id: AnnouncementId,
        ) -> RepositoryResult<Option<Announcement>>;
        fn list_announcements(
            &self,
            query: AnnouncementListQuery,
        ) -> RepositoryResult<(usize, Vec<Announcement>)>;
    }

    impl AnnouncementWriter for Repository {
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

    impl MediaReader for Repository {
        fn list_media(&self, item: PublicId) -> RepositoryResult<Vec<MediaRef>>;
    }
}
