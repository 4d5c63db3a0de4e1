use crate::error::LoadError;

/// Requests and loader results fed to [`PagedListReducer`](super::PagedListReducer).
#[derive(Debug, Clone)]
pub enum PagedListIntent<Item> {
    /// Discard everything and load the first page.
    LoadInitial,
    /// Load the next page. Ignored while loading or when the list is exhausted.
    LoadMore,
    /// A page arrived.
    PageLoaded { items: Vec<Item>, has_more: bool },
    /// The pending load failed.
    LoadFailed(LoadError),
}
