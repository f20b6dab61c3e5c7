//! Tab descriptors
//!
//! A [`Tab`] is the leaf content of the tree: an ID, a title, a factory
//! producing the tab's content view, and four optional lifecycle hooks.

use std::fmt;
use std::rc::Rc;

use super::tab_group::TabGroup;
use super::types::TabId;

/// Produces a fresh content view each time a tab becomes visible.
pub type ContentFactory<V> = Rc<dyn Fn() -> V>;

/// Lifecycle hook attached to a tab. Receives the owning group.
pub type TabHook<V> = Rc<dyn Fn(&TabGroup<V>)>;

/// Lifecycle extension points of a tab, in the order a full
/// mount/unmount cycle visits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabHookPoint {
    /// The tab is about to become the visible tab.
    BeforeMount,
    /// The tab became the visible tab.
    Mounted,
    /// The tab is about to stop being visible.
    BeforeUnmount,
    /// The tab stopped being visible.
    Unmounted,
}

/// A tab owned by exactly one [`TabGroup`] at a time.
pub struct Tab<V> {
    id: TabId,
    title: String,
    content: ContentFactory<V>,
    before_mount: Option<TabHook<V>>,
    mounted: Option<TabHook<V>>,
    before_unmount: Option<TabHook<V>>,
    unmounted: Option<TabHook<V>>,
}

impl<V> Tab<V> {
    /// Creates a tab without lifecycle hooks.
    pub fn new(
        id: impl Into<TabId>,
        title: impl Into<String>,
        content: impl Fn() -> V + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: Rc::new(content),
            before_mount: None,
            mounted: None,
            before_unmount: None,
            unmounted: None,
        }
    }

    /// Attaches a hook for the given extension point, replacing any
    /// previous one.
    #[must_use]
    pub fn with_hook(mut self, point: TabHookPoint, hook: impl Fn(&TabGroup<V>) + 'static) -> Self {
        let hook: TabHook<V> = Rc::new(hook);
        match point {
            TabHookPoint::BeforeMount => self.before_mount = Some(hook),
            TabHookPoint::Mounted => self.mounted = Some(hook),
            TabHookPoint::BeforeUnmount => self.before_unmount = Some(hook),
            TabHookPoint::Unmounted => self.unmounted = Some(hook),
        }
        self
    }

    /// Attaches an `on_before_mount` hook.
    #[must_use]
    pub fn on_before_mount(self, hook: impl Fn(&TabGroup<V>) + 'static) -> Self {
        self.with_hook(TabHookPoint::BeforeMount, hook)
    }

    /// Attaches an `on_mounted` hook.
    #[must_use]
    pub fn on_mounted(self, hook: impl Fn(&TabGroup<V>) + 'static) -> Self {
        self.with_hook(TabHookPoint::Mounted, hook)
    }

    /// Attaches an `on_before_unmount` hook.
    #[must_use]
    pub fn on_before_unmount(self, hook: impl Fn(&TabGroup<V>) + 'static) -> Self {
        self.with_hook(TabHookPoint::BeforeUnmount, hook)
    }

    /// Attaches an `on_unmounted` hook.
    #[must_use]
    pub fn on_unmounted(self, hook: impl Fn(&TabGroup<V>) + 'static) -> Self {
        self.with_hook(TabHookPoint::Unmounted, hook)
    }

    /// Returns the tab ID.
    pub fn id(&self) -> &TabId {
        &self.id
    }

    /// Returns the display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Produces a fresh content view.
    pub fn render_content(&self) -> V {
        (self.content)()
    }

    /// Returns true if a hook is attached to the given point.
    pub fn has_hook(&self, point: TabHookPoint) -> bool {
        self.hook(point).is_some()
    }

    fn hook(&self, point: TabHookPoint) -> Option<&TabHook<V>> {
        match point {
            TabHookPoint::BeforeMount => self.before_mount.as_ref(),
            TabHookPoint::Mounted => self.mounted.as_ref(),
            TabHookPoint::BeforeUnmount => self.before_unmount.as_ref(),
            TabHookPoint::Unmounted => self.unmounted.as_ref(),
        }
    }

    /// Invokes the hook attached to `point`, if any.
    pub(crate) fn fire(&self, point: TabHookPoint, group: &TabGroup<V>) {
        if let Some(hook) = self.hook(point) {
            hook(group);
        }
    }
}

impl<V> fmt::Debug for Tab<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tab")
            .field("id", &self.id)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}
