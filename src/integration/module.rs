use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::navigation::ScreenHandle;

/// Object kept alive on behalf of a screen, typically its view model.
pub type Companion = Arc<dyn Any + Send + Sync>;

/// A screen paired with an optional companion.
///
/// The screen does not own its companion; the flow that pushes or presents
/// the module retains it instead.
#[derive(Clone)]
pub struct ScreenModule {
    screen: ScreenHandle,
    companion: Option<Companion>,
}

impl ScreenModule {
    pub fn new(screen: ScreenHandle) -> Self {
        Self {
            screen,
            companion: None,
        }
    }

    pub fn with_companion<T>(screen: ScreenHandle, companion: Arc<T>) -> Self
    where
        T: Any + Send + Sync,
    {
        Self {
            screen,
            companion: Some(companion),
        }
    }

    pub fn screen(&self) -> &ScreenHandle {
        &self.screen
    }

    pub fn companion(&self) -> Option<&Companion> {
        self.companion.as_ref()
    }
}

impl fmt::Debug for ScreenModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScreenModule")
            .field("screen", &self.screen)
            .field("has_companion", &self.companion.is_some())
            .finish()
    }
}
