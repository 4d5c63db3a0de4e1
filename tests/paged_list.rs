use flowkit::error::LoadError;
use flowkit::integration::paged::{Page, PageLoader, PagedList, PagedListViewModel};
use flowkit::integration::{DefaultErrorPresenter, DefaultLoadingPresenter, LoadingPresentable};
use flowkit::navigation::ScreenHandle;
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;

/// Serves `pages` pages of three items; pages listed in `failing` fail once.
struct FakeLoader {
    pages: usize,
    failing: Mutex<HashSet<usize>>,
    requested: Arc<Mutex<Vec<usize>>>,
}

impl FakeLoader {
    fn new(pages: usize) -> (Self, Arc<Mutex<Vec<usize>>>) {
        let requested = Arc::new(Mutex::new(Vec::new()));
        let loader = Self {
            pages,
            failing: Mutex::new(HashSet::new()),
            requested: requested.clone(),
        };
        (loader, requested)
    }

    fn failing_once(self, page: usize) -> Self {
        self.failing.lock().insert(page);
        self
    }
}

impl PageLoader for FakeLoader {
    type Item = String;

    fn load_page(&self, page: usize) -> Result<Page<String>, LoadError> {
        self.requested.lock().push(page);
        if self.failing.lock().remove(&page) {
            return Err(LoadError::new(format!("page {page} unavailable")));
        }
        let items = (0..3).map(|i| format!("item {}", page * 3 + i)).collect();
        Ok(Page {
            items,
            has_more: page + 1 < self.pages,
        })
    }
}

#[test]
fn initial_load_fills_first_page() {
    let (loader, requested) = FakeLoader::new(3);
    let list = PagedList::new(loader);

    list.load_initial();

    let state = list.state();
    assert_eq!(state.items, vec!["item 0", "item 1", "item 2"]);
    assert!(!state.is_loading());
    assert!(state.can_load_more);
    assert!(state.error.is_none());
    assert_eq!(*requested.lock(), vec![0]);
}

#[test]
fn load_more_appends_until_exhausted() {
    let (loader, requested) = FakeLoader::new(3);
    let list = PagedList::new(loader);

    list.load_initial();
    list.load_more();
    list.load_more();

    let state = list.state();
    assert_eq!(state.items.len(), 9);
    assert_eq!(state.items.last().map(String::as_str), Some("item 8"));
    assert!(!state.can_load_more);

    // Exhausted: no further requests reach the loader.
    list.load_more();
    assert_eq!(*requested.lock(), vec![0, 1, 2]);
    assert_eq!(list.state().items.len(), 9);
}

#[test]
fn failed_page_keeps_items_and_is_presented() {
    let (loader, _requested) = FakeLoader::new(3);
    let presenter = Arc::new(DefaultErrorPresenter::new());
    let list = PagedList::new(loader.failing_once(1)).with_error_presenter(presenter.clone());

    list.load_initial();
    list.load_more();

    let state = list.state();
    assert_eq!(state.items.len(), 3);
    assert!(!state.is_loading());
    assert_eq!(state.error, Some(LoadError::new("page 1 unavailable")));

    let alert = presenter.last().unwrap();
    assert_eq!(alert.message, "page 1 unavailable");
    assert!(alert.screen.is_none());
}

#[test]
fn retry_after_failure_loads_same_page() {
    let (loader, requested) = FakeLoader::new(3);
    let list = PagedList::new(loader.failing_once(1));

    list.load_initial();
    list.load_more();
    list.load_more();

    let state = list.state();
    assert_eq!(state.items.len(), 6);
    assert!(state.error.is_none());
    assert_eq!(*requested.lock(), vec![0, 1, 1]);
}

#[test]
fn load_initial_resets_the_list() {
    let (loader, requested) = FakeLoader::new(3);
    let list = PagedList::new(loader);

    list.load_initial();
    list.load_more();
    list.load_initial();

    assert_eq!(list.state().items, vec!["item 0", "item 1", "item 2"]);
    assert_eq!(*requested.lock(), vec![0, 1, 0]);
}

#[test]
fn loading_overlay_is_shown_once_per_screen() {
    let presenter = DefaultLoadingPresenter::new();
    let list_screen = ScreenHandle::new("List");
    let detail_screen = ScreenHandle::new("Detail");

    presenter.show_loading(&list_screen);
    presenter.show_loading(&list_screen);
    presenter.show_loading(&detail_screen);

    assert_eq!(presenter.overlay_count(), 2);
    assert!(presenter.is_loading(&list_screen));

    presenter.hide_loading(&list_screen);
    presenter.hide_loading(&list_screen);

    assert!(!presenter.is_loading(&list_screen));
    assert!(presenter.is_loading(&detail_screen));
    assert_eq!(presenter.overlay_count(), 1);
}
