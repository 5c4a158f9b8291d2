//! Pagination over an in-memory collection.
//!
//! The list view fetches the full product collection once per request and
//! slices the requested page out of it; everything here is a pure computation
//! over that collection.

use serde::Serialize;

/// Number of products shown per page.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 8;

/// One entry in the pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageItem {
    /// A numbered page link.
    Page { number: usize, current: bool },
    /// A collapsed run of pages.
    Gap,
}

/// A page slice of a larger collection together with navigation state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    /// Current page, 1-based.
    pub page: usize,
    pub total_pages: usize,
    /// False on the first page; the previous control renders disabled.
    pub has_prev: bool,
    /// False on the last page; the next control renders disabled.
    pub has_next: bool,
}

impl<T> Paginated<T> {
    /// Slice `collection` down to the requested page.
    ///
    /// `page` is 1-based and clamped into `[1, total_pages]`. An empty
    /// collection produces a single empty page.
    pub fn new(collection: Vec<T>, page: usize, per_page: usize) -> Self {
        let total_pages = collection.len().div_ceil(per_page).max(1);
        let page = page.clamp(1, total_pages);
        let items: Vec<T> = collection
            .into_iter()
            .skip((page - 1) * per_page)
            .take(per_page)
            .collect();

        Self {
            items,
            page,
            total_pages,
            has_prev: page > 1,
            has_next: page < total_pages,
        }
    }

    /// Convert the items while keeping the navigation state.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            total_pages: self.total_pages,
            has_prev: self.has_prev,
            has_next: self.has_next,
        }
    }

    /// Entries for the pagination control; see [`page_items`].
    pub fn page_items(&self) -> Vec<PageItem> {
        page_items(self.page, self.total_pages)
    }
}

/// Computes the visible entries of the pagination control: always page 1, the
/// last page, the current page and its immediate neighbors; every other run
/// of pages collapses into a single [`PageItem::Gap`].
pub fn page_items(current: usize, total: usize) -> Vec<PageItem> {
    let mut items = Vec::new();
    let mut gap_pending = false;

    for number in 1..=total {
        let near = number == 1 || number == total || number.abs_diff(current) <= 1;
        if near {
            if gap_pending {
                items.push(PageItem::Gap);
                gap_pending = false;
            }
            items.push(PageItem::Page {
                number,
                current: number == current,
            });
        } else {
            gap_pending = true;
        }
    }

    items
}
