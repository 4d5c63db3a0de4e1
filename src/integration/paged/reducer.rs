use std::marker::PhantomData;

use super::intent::PagedListIntent;
use super::state::PagedListState;

/// Pure state transition: `(State, Intent) -> State`.
///
/// The only place list state changes; the view model feeds it intents.
pub trait Reducer {
    type State: Clone + PartialEq + Default;
    type Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

/// Reducer for paginated list state.
pub struct PagedListReducer<Item>(PhantomData<fn() -> Item>);

impl<Item> Reducer for PagedListReducer<Item>
where
    Item: Clone + PartialEq,
{
    type State = PagedListState<Item>;
    type Intent = PagedListIntent<Item>;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PagedListIntent::LoadInitial => PagedListState {
                is_loading_initial: true,
                ..PagedListState::default()
            },

            PagedListIntent::LoadMore => {
                if state.is_loading() || !state.can_load_more {
                    return state;
                }
                PagedListState {
                    is_loading_more: true,
                    error: None,
                    ..state
                }
            }

            PagedListIntent::PageLoaded { items, has_more } => {
                if !state.is_loading() {
                    // Nothing was requested; drop the stale page.
                    return state;
                }
                let mut next = state;
                next.items.extend(items);
                next.is_loading_initial = false;
                next.is_loading_more = false;
                next.can_load_more = has_more;
                next.error = None;
                next
            }

            PagedListIntent::LoadFailed(error) => PagedListState {
                is_loading_initial: false,
                is_loading_more: false,
                error: Some(error),
                ..state
            },
        }
    }
}
