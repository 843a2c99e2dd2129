//! Generic paginated, selectable list over already-fetched catalog items.
//!
//! One `ListView` replaces the per-entity list screens: it owns the fetched
//! items, the current page and the single-selection mark, and renders a page
//! of cards through whatever mapping the caller supplies. Every navigation
//! input is clamped; none of the operations can fail.

use crate::domain::item::CatalogItem;
use crate::pagination::{self, PageLayout, Paginated, Viewport};

/// Interactions a rendered card can emit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListAction {
    Select,
    View,
    Edit,
    Delete,
}

/// Caller-supplied hooks invoked synchronously on card interaction.
///
/// The view makes no assumption about what a hook does and does not wait on
/// any effect it triggers.
pub trait ListActions<T> {
    fn on_select(&mut self, _item: &T) {}
    fn on_view(&mut self, _item: &T) {}
    fn on_edit(&mut self, _item: &T) {}
    fn on_delete(&mut self, _item: &T) {}
}

/// Outcome of a selection toggle reported back to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionChange<Id> {
    Selected(Id),
    Cleared(Id),
    /// The id is not in the current item set; state untouched.
    Ignored,
}

#[derive(Debug)]
pub struct ListView<T: CatalogItem> {
    items: Vec<T>,
    layout: PageLayout,
    page: usize,
    selected: Option<T::Id>,
}

impl<T: CatalogItem> ListView<T> {
    pub fn new(viewport: Viewport) -> Self {
        Self::with_layout(viewport.layout())
    }

    /// For shells that resolve layouts through [`crate::config::CatalogConfig`].
    pub fn with_layout(layout: PageLayout) -> Self {
        Self {
            items: Vec::new(),
            layout,
            page: 1,
            selected: None,
        }
    }

    pub fn with_items(items: Vec<T>, viewport: Viewport) -> Self {
        let mut view = Self::new(viewport);
        view.set_items(items);
        view
    }

    /// Replaces the backing list, in caller-defined order.
    ///
    /// A changed item count means the filter or search changed, so the user
    /// goes back to page 1 rather than being clamped onto a leftover page. A
    /// selection pointing at a vanished item is dropped.
    pub fn set_items(&mut self, items: Vec<T>) {
        if items.len() != self.items.len() {
            self.page = 1;
        }
        if let Some(id) = self.selected {
            if !items.iter().any(|item| item.item_id() == id) {
                self.selected = None;
            }
        }
        self.items = items;
    }

    /// Switches page sizing on a viewport change; page resets to 1 when the
    /// per-page count actually changed.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.set_layout(viewport.layout());
    }

    pub fn set_layout(&mut self, layout: PageLayout) {
        if layout.per_page != self.layout.per_page {
            self.page = 1;
        }
        self.layout = layout;
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn total_pages(&self) -> usize {
        pagination::page_count(self.items.len(), self.layout.per_page)
    }

    /// Clamped navigation; returns the page actually landed on.
    pub fn goto(&mut self, page: usize) -> usize {
        self.page = pagination::clamp_page(page, self.total_pages());
        self.page
    }

    pub fn next(&mut self) -> usize {
        self.goto(self.page + 1)
    }

    pub fn prev(&mut self) -> usize {
        self.goto(self.page.saturating_sub(1))
    }

    /// Items on the current page; empty is a valid render state.
    pub fn visible(&self) -> &[T] {
        pagination::visible_slice(&self.items, self.page, self.layout.per_page)
    }

    /// Renders the current page through an item-to-card mapping.
    pub fn render<C>(&self, f: impl FnMut(&T) -> C) -> Paginated<C> {
        let items = self.visible().iter().map(f).collect();
        Paginated::new(items, self.page, self.total_pages(), self.layout.window)
    }

    pub fn selected_id(&self) -> Option<T::Id> {
        self.selected
    }

    pub fn selected(&self) -> Option<&T> {
        let id = self.selected?;
        self.items.iter().find(|item| item.item_id() == id)
    }

    /// Toggles the at-most-one selection mark.
    ///
    /// The confirmed selection belongs to the caller; the view only tracks
    /// which card is currently marked.
    pub fn select(&mut self, id: T::Id) -> SelectionChange<T::Id> {
        if !self.items.iter().any(|item| item.item_id() == id) {
            return SelectionChange::Ignored;
        }

        if self.selected == Some(id) {
            self.selected = None;
            SelectionChange::Cleared(id)
        } else {
            self.selected = Some(id);
            SelectionChange::Selected(id)
        }
    }

    /// Routes a card interaction to the caller-supplied hooks.
    pub fn dispatch(&mut self, action: ListAction, id: T::Id, actions: &mut impl ListActions<T>) {
        match action {
            ListAction::Select => {
                if let SelectionChange::Selected(id) = self.select(id) {
                    if let Some(item) = self.items.iter().find(|item| item.item_id() == id) {
                        actions.on_select(item);
                    }
                }
            }
            ListAction::View => {
                if let Some(item) = self.items.iter().find(|item| item.item_id() == id) {
                    actions.on_view(item);
                }
            }
            ListAction::Edit => {
                if let Some(item) = self.items.iter().find(|item| item.item_id() == id) {
                    actions.on_edit(item);
                }
            }
            ListAction::Delete => {
                if let Some(item) = self.items.iter().find(|item| item.item_id() == id) {
                    actions.on_delete(item);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use chrono::NaiveDateTime;
    use serde_json::Value;

    use super::*;
    use crate::domain::property::Property;
    use crate::domain::types::{Price, PropertyId, PublicId};

    fn properties(count: usize) -> Vec<Property> {
        (1..=count as i32)
            .map(|id| Property {
                id: PropertyId::new(id).unwrap(),
                public_id: PublicId::new(),
                title: format!("Listing #{id}"),
                district: Some("Centro".to_string()),
                area_m2: None,
                price: Price::new(100_000.0 + f64::from(id)).unwrap(),
                market_range: None,
                extras: BTreeSet::new(),
                attributes: Value::Null,
                created_at: NaiveDateTime::default(),
                updated_at: NaiveDateTime::default(),
            })
            .collect()
    }

    #[derive(Default)]
    struct Recorder {
        selected: Vec<i32>,
        viewed: Vec<i32>,
        deleted: Vec<i32>,
    }

    impl ListActions<Property> for Recorder {
        fn on_select(&mut self, item: &Property) {
            self.selected.push(item.id.get());
        }

        fn on_view(&mut self, item: &Property) {
            self.viewed.push(item.id.get());
        }

        fn on_delete(&mut self, item: &Property) {
            self.deleted.push(item.id.get());
        }
    }

    #[test]
    fn mobile_viewport_shows_four_per_page() {
        let view = ListView::with_items(properties(13), Viewport::Mobile);
        assert_eq!(view.total_pages(), 4);
        assert_eq!(view.visible().len(), 4);
    }

    #[test]
    fn navigation_is_clamped() {
        let mut view = ListView::with_items(properties(13), Viewport::Desktop);
        assert_eq!(view.goto(99), 3);
        assert_eq!(view.next(), 3);
        assert_eq!(view.goto(0), 1);
        assert_eq!(view.prev(), 1);
    }

    #[test]
    fn changed_item_count_resets_to_the_first_page() {
        let mut view = ListView::with_items(properties(16), Viewport::Mobile);
        view.goto(4);
        assert_eq!(view.page(), 4);

        // A narrower filter result must land on page 1, not on a clamped page 3.
        view.set_items(properties(12));
        assert_eq!(view.page(), 1);
        assert_eq!(view.total_pages(), 3);
    }

    #[test]
    fn same_item_count_keeps_the_page() {
        let mut view = ListView::with_items(properties(13), Viewport::Desktop);
        view.goto(2);
        view.set_items(properties(13));
        assert_eq!(view.page(), 2);
    }

    #[test]
    fn viewport_flip_resets_to_the_first_page() {
        let mut view = ListView::with_items(properties(13), Viewport::Desktop);
        view.goto(3);
        view.set_viewport(Viewport::Mobile);
        assert_eq!(view.page(), 1);
        assert_eq!(view.total_pages(), 4);

        // Re-applying the same viewport is a no-op.
        view.goto(2);
        view.set_viewport(Viewport::Mobile);
        assert_eq!(view.page(), 2);
    }

    #[test]
    fn selection_toggles_and_ignores_unknown_ids() {
        let mut view = ListView::with_items(properties(3), Viewport::Desktop);
        let id = PropertyId::new(2).unwrap();

        assert_eq!(view.select(id), SelectionChange::Selected(id));
        assert_eq!(view.selected().map(|p| p.id), Some(id));

        assert_eq!(view.select(id), SelectionChange::Cleared(id));
        assert_eq!(view.selected_id(), None);

        let unknown = PropertyId::new(9).unwrap();
        assert_eq!(view.select(unknown), SelectionChange::Ignored);
        assert_eq!(view.selected_id(), None);
    }

    #[test]
    fn vanished_selection_is_dropped() {
        let mut view = ListView::with_items(properties(5), Viewport::Desktop);
        view.select(PropertyId::new(5).unwrap());
        view.set_items(properties(3));
        assert_eq!(view.selected_id(), None);
    }

    #[test]
    fn dispatch_routes_to_the_caller_hooks() {
        let mut view = ListView::with_items(properties(3), Viewport::Desktop);
        let mut recorder = Recorder::default();
        let id = PropertyId::new(1).unwrap();

        view.dispatch(ListAction::Select, id, &mut recorder);
        view.dispatch(ListAction::View, id, &mut recorder);
        view.dispatch(ListAction::Delete, id, &mut recorder);
        view.dispatch(ListAction::View, PropertyId::new(7).unwrap(), &mut recorder);

        assert_eq!(recorder.selected, vec![1]);
        assert_eq!(recorder.viewed, vec![1]);
        assert_eq!(recorder.deleted, vec![1]);

        // Toggling off does not re-fire the selection hook.
        view.dispatch(ListAction::Select, id, &mut recorder);
        assert_eq!(recorder.selected, vec![1]);
    }

    #[test]
    fn render_maps_the_visible_page() {
        let mut view = ListView::with_items(properties(13), Viewport::Desktop);
        view.goto(3);
        let page = view.render(|p| p.title.clone());
        assert_eq!(page.items, vec!["Listing #13".to_string()]);
        assert_eq!(page.page, 3);
        assert_eq!(page.total_pages, 3);
    }
}
