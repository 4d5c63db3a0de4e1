use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::LoadError;
use crate::integration::ErrorPresentable;

use super::intent::PagedListIntent;
use super::reducer::{PagedListReducer, Reducer};
use super::state::PagedListState;

/// One page of results.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<Item> {
    pub items: Vec<Item>,
    pub has_more: bool,
}

/// Data source for a paginated list. Pages are numbered from zero.
pub trait PageLoader: Send + Sync {
    type Item;

    fn load_page(&self, page: usize) -> Result<Page<Self::Item>, LoadError>;
}

/// View model driving a paginated list.
pub trait PagedListViewModel {
    type Item;

    fn state(&self) -> PagedListState<Self::Item>;

    fn load_initial(&self);

    fn load_more(&self);
}

/// [`PagedListViewModel`] backed by a [`PageLoader`].
///
/// Loads run synchronously on the caller; schedule them on an executor
/// from the environment when the loader blocks.
pub struct PagedList<L: PageLoader> {
    loader: L,
    inner: Mutex<PagedInner<L::Item>>,
    error_presenter: Option<Arc<dyn ErrorPresentable>>,
}

struct PagedInner<Item> {
    state: PagedListState<Item>,
    next_page: usize,
}

impl<L> PagedList<L>
where
    L: PageLoader,
    L::Item: Clone + PartialEq + Send + 'static,
{
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            inner: Mutex::new(PagedInner {
                state: PagedListState::default(),
                next_page: 0,
            }),
            error_presenter: None,
        }
    }

    /// Show load failures through `presenter` as well as storing them.
    pub fn with_error_presenter(mut self, presenter: Arc<dyn ErrorPresentable>) -> Self {
        self.error_presenter = Some(presenter);
        self
    }

    fn dispatch(&self, intent: PagedListIntent<L::Item>) -> PagedListState<L::Item> {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;
        inner.state = PagedListReducer::<L::Item>::reduce(std::mem::take(&mut inner.state), intent);
        inner.state.clone()
    }

    fn load(&self, page: usize) {
        match self.loader.load_page(page) {
            Ok(Page { items, has_more }) => {
                tracing::debug!(page, count = items.len(), has_more, "Page loaded");
                self.dispatch(PagedListIntent::PageLoaded { items, has_more });
                self.inner.lock().next_page = page + 1;
            }
            Err(error) => {
                tracing::warn!(page, error = %error, "Page load failed");
                if let Some(presenter) = &self.error_presenter {
                    presenter.show_error(&error, None);
                }
                self.dispatch(PagedListIntent::LoadFailed(error));
            }
        }
    }
}

impl<L> PagedListViewModel for PagedList<L>
where
    L: PageLoader,
    L::Item: Clone + PartialEq + Send + 'static,
{
    type Item = L::Item;

    fn state(&self) -> PagedListState<L::Item> {
        self.inner.lock().state.clone()
    }

    fn load_initial(&self) {
        self.dispatch(PagedListIntent::LoadInitial);
        self.inner.lock().next_page = 0;
        self.load(0);
    }

    fn load_more(&self) {
        let page = {
            let mut guard = self.inner.lock();
            let inner = &mut *guard;
            if inner.state.is_loading() || !inner.state.can_load_more {
                return;
            }
            inner.state = PagedListReducer::<L::Item>::reduce(
                std::mem::take(&mut inner.state),
                PagedListIntent::LoadMore,
            );
            inner.next_page
        };
        self.load(page);
    }
}
