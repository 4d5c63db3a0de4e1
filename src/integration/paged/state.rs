use crate::error::LoadError;

/// State of a paginated list.
#[derive(Debug, Clone, PartialEq)]
pub struct PagedListState<Item> {
    pub items: Vec<Item>,
    pub is_loading_initial: bool,
    pub is_loading_more: bool,
    pub can_load_more: bool,
    pub error: Option<LoadError>,
}

impl<Item> PagedListState<Item> {
    pub fn is_loading(&self) -> bool {
        self.is_loading_initial || self.is_loading_more
    }
}

impl<Item> Default for PagedListState<Item> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            is_loading_initial: false,
            is_loading_more: false,
            can_load_more: true,
            error: None,
        }
    }
}
