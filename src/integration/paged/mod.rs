//! Paginated list state.
//!
//! # Architecture
//!
//! Unidirectional: intents go through a pure [`Reducer`] into new state.
//! - `state.rs` - Items plus loading flags and the last error
//! - `intent.rs` - User requests and loader results
//! - `reducer.rs` - The `Reducer` contract and the list's transitions
//! - `model.rs` - View model running a [`PageLoader`] around the reducer

mod intent;
mod model;
mod reducer;
mod state;

pub use intent::PagedListIntent;
pub use model::{Page, PageLoader, PagedList, PagedListViewModel};
pub use reducer::{PagedListReducer, Reducer};
pub use state::PagedListState;
