use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use uuid::Uuid;

/// Stable identity of a screen container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScreenId(Uuid);

impl ScreenId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a screen container is able to host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    /// A single screen.
    Content,
    /// A navigation-stack container that other screens are pushed onto.
    Stack,
}

/// Reference-counted handle to a screen container.
///
/// Cloning a handle never creates a new screen; both clones refer to the
/// same container and compare equal.
#[derive(Clone)]
pub struct ScreenHandle {
    inner: Arc<ScreenNode>,
}

struct ScreenNode {
    id: ScreenId,
    title: String,
    kind: ScreenKind,
    presented: Mutex<Option<ScreenHandle>>,
}

impl ScreenHandle {
    /// Create a content screen.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_kind(title, ScreenKind::Content)
    }

    /// Create a navigation-stack container.
    pub fn stack(title: impl Into<String>) -> Self {
        Self::with_kind(title, ScreenKind::Stack)
    }

    pub fn with_kind(title: impl Into<String>, kind: ScreenKind) -> Self {
        Self {
            inner: Arc::new(ScreenNode {
                id: ScreenId::new(),
                title: title.into(),
                kind,
                presented: Mutex::new(None),
            }),
        }
    }

    pub fn id(&self) -> ScreenId {
        self.inner.id
    }

    pub fn title(&self) -> &str {
        &self.inner.title
    }

    pub fn kind(&self) -> ScreenKind {
        self.inner.kind
    }

    pub fn is_stack(&self) -> bool {
        self.inner.kind == ScreenKind::Stack
    }

    /// True when both handles refer to the same container.
    pub fn ptr_eq(&self, other: &ScreenHandle) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// The container this one presents directly, if any.
    pub fn presented(&self) -> Option<ScreenHandle> {
        self.inner.presented.lock().clone()
    }

    /// The last container in the chain of presentations starting here.
    pub fn topmost_presented(&self) -> Option<ScreenHandle> {
        let mut current = self.presented()?;
        while let Some(next) = current.presented() {
            current = next;
        }
        Some(current)
    }

    /// Present `screen` modally.
    ///
    /// When this container already presents something, the new screen is
    /// presented from the topmost presented container instead.
    pub fn present(&self, screen: ScreenHandle) {
        let host = self.topmost_presented().unwrap_or_else(|| self.clone());
        *host.inner.presented.lock() = Some(screen);
    }

    /// Dismiss whatever this container presents, including anything
    /// presented on top of it. Returns the directly presented container.
    pub fn dismiss(&self) -> Option<ScreenHandle> {
        self.inner.presented.lock().take()
    }
}

impl PartialEq for ScreenHandle {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for ScreenHandle {}

impl fmt::Debug for ScreenHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScreenHandle")
            .field("id", &self.inner.id)
            .field("title", &self.inner.title)
            .field("kind", &self.inner.kind)
            .finish()
    }
}
