//! Page math shared by every catalog list.
//!
//! All functions are pure and total: degenerate inputs (empty lists, pages
//! past the end, zero-sized windows) are normalized by clamping instead of
//! surfacing errors.

use serde::Serialize;

pub const ITEMS_PER_PAGE_MOBILE: usize = 4;
pub const ITEMS_PER_PAGE_DESKTOP: usize = 6;
pub const VISIBLE_PAGES_MOBILE: usize = 3;
pub const VISIBLE_PAGES_DESKTOP: usize = 5;

/// Viewport class reported by the embedding shell.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, Hash)]
pub enum Viewport {
    Mobile,
    Desktop,
}

/// Page size and pager window resolved for one viewport.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct PageLayout {
    /// Cards rendered per page.
    pub per_page: usize,
    /// Maximum page numbers shown in the pager.
    pub window: usize,
}

impl Viewport {
    /// Default layout for this viewport class.
    pub const fn layout(self) -> PageLayout {
        match self {
            Viewport::Mobile => PageLayout {
                per_page: ITEMS_PER_PAGE_MOBILE,
                window: VISIBLE_PAGES_MOBILE,
            },
            Viewport::Desktop => PageLayout {
                per_page: ITEMS_PER_PAGE_DESKTOP,
                window: VISIBLE_PAGES_DESKTOP,
            },
        }
    }
}

/// Number of pages needed for `len` items; 0 only when the list is empty.
pub fn page_count(len: usize, per_page: usize) -> usize {
    len.div_ceil(per_page.max(1))
}

/// Clamps a requested page into `[1, max(1, total_pages)]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// The slice of `items` shown on `page`; empty past the end.
pub fn visible_slice<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    let per_page = per_page.max(1);
    let start = (page.max(1) - 1).saturating_mul(per_page);
    if start >= items.len() {
        return &[];
    }
    let end = (start + per_page).min(items.len());
    &items[start..end]
}

/// Contiguous run of page numbers the pager renders.
///
/// Everything fits when `total_pages <= window`; otherwise the window is
/// centered on `current` and shifted back inside `[1, total_pages]`, so it
/// always contains the current page.
pub fn visible_pages(current: usize, total_pages: usize, window: usize) -> Vec<usize> {
    if total_pages == 0 {
        return Vec::new();
    }
    let window = window.max(1);
    if total_pages <= window {
        return (1..=total_pages).collect();
    }

    let current = clamp_page(current, total_pages);
    let start = current
        .saturating_sub(window / 2)
        .max(1)
        .min(total_pages - window + 1);

    (start..start + window).collect()
}

/// One page of items together with the pager state a template needs.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub pages: Vec<usize>,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total_pages: usize, window: usize) -> Self {
        let page = clamp_page(current_page, total_pages);
        let pages = visible_pages(page, total_pages, window);

        Self {
            items,
            page,
            total_pages,
            pages,
        }
    }

    /// Zero and one total pages render identically: no pager.
    pub fn show_pager(&self) -> bool {
        self.total_pages > 1
    }

    /// Re-wraps the items through a card mapping, keeping the page state.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            total_pages: self.total_pages,
            pages: self.pages,
        }
    }
}
