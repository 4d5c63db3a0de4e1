use super::screen::ScreenHandle;

/// Navigation-stack collaborator driven by flow coordinators.
pub trait NavigationStack: Send {
    /// The container handle that hosts the stack.
    fn root(&self) -> ScreenHandle;

    fn push(&mut self, screen: ScreenHandle, animated: bool);

    fn present(&mut self, screen: ScreenHandle, animated: bool);

    /// Remove the top screen. Returns the removed screen, if any.
    fn pop(&mut self, animated: bool) -> Option<ScreenHandle>;

    /// The topmost visible screen on the stack.
    fn top(&self) -> Option<ScreenHandle>;

    /// Dismiss the modally presented screen.
    fn dismiss(&mut self, _animated: bool) -> Option<ScreenHandle> {
        self.root().dismiss()
    }
}

/// In-memory navigation stack.
///
/// Like the platform navigation controller it stands in for, the bottom
/// screen is never popped.
#[derive(Debug)]
pub struct NavigationController {
    root: ScreenHandle,
    screens: Vec<ScreenHandle>,
}

impl NavigationController {
    pub fn new() -> Self {
        Self {
            root: ScreenHandle::stack("NavigationController"),
            screens: Vec::new(),
        }
    }

    /// Create a stack with `screen` as its bottom screen.
    pub fn with_root(screen: ScreenHandle) -> Self {
        let mut controller = Self::new();
        controller.screens.push(screen);
        controller
    }

    /// Screens currently on the stack, bottom first.
    pub fn screens(&self) -> &[ScreenHandle] {
        &self.screens
    }

    /// Replace the whole stack.
    pub fn set_screens(&mut self, screens: Vec<ScreenHandle>) {
        self.screens = screens;
    }
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationStack for NavigationController {
    fn root(&self) -> ScreenHandle {
        self.root.clone()
    }

    fn push(&mut self, screen: ScreenHandle, _animated: bool) {
        self.screens.push(screen);
    }

    fn present(&mut self, screen: ScreenHandle, _animated: bool) {
        self.root.present(screen);
    }

    fn pop(&mut self, _animated: bool) -> Option<ScreenHandle> {
        if self.screens.len() <= 1 {
            return None;
        }
        self.screens.pop()
    }

    fn top(&self) -> Option<ScreenHandle> {
        self.screens.last().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_a_stack_container() {
        let controller = NavigationController::new();
        assert!(controller.root().is_stack());
        assert!(controller.top().is_none());
    }

    #[test]
    fn pop_keeps_bottom_screen() {
        let bottom = ScreenHandle::new("Bottom");
        let mut controller = NavigationController::with_root(bottom.clone());
        let detail = ScreenHandle::new("Detail");

        controller.push(detail.clone(), true);
        assert_eq!(controller.top(), Some(detail.clone()));

        assert_eq!(controller.pop(true), Some(detail));
        assert_eq!(controller.pop(true), None);
        assert_eq!(controller.top(), Some(bottom));
    }

    #[test]
    fn present_and_dismiss_go_through_root() {
        let mut controller = NavigationController::new();
        let modal = ScreenHandle::new("Modal");

        controller.present(modal.clone(), true);
        assert_eq!(controller.root().presented(), Some(modal.clone()));

        assert_eq!(controller.dismiss(true), Some(modal));
        assert!(controller.root().presented().is_none());
    }
}
