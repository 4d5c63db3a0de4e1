//! Building blocks flows use to assemble and present screens.

mod factory;
mod module;
pub mod paged;
mod presentation;

pub use factory::ScreenFactory;
pub use module::{Companion, ScreenModule};
pub use presentation::{
    DefaultErrorPresenter, DefaultLoadingPresenter, ErrorPresentable, LoadingPresentable,
    PresentedError,
};
