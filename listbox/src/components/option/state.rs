//! List option component state.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

/// Auto-deselect delay used when an option is marked timed without an
/// explicit duration.
pub const DEFAULT_SELECT_TIMEOUT: Duration = Duration::from_millis(200);

/// Presentation context of an option, assigned by the owning container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionKind {
    /// Option inside a listbox container
    #[default]
    ListboxOption,
    /// Option inside a grid container
    GridOption,
}

impl OptionKind {
    /// The attribute value reflected for test harnesses.
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKind::ListboxOption => "listbox-option",
            OptionKind::GridOption => "grid-option",
        }
    }

    /// The role reflected for assistive technology.
    pub fn role(&self) -> &'static str {
        match self {
            OptionKind::ListboxOption => "option",
            OptionKind::GridOption => "gridcell",
        }
    }
}

/// A confirmed selection state change published by an option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionChange<T> {
    /// The option's selection flag after the change.
    pub selected: bool,
    /// The option's value at the time of the change.
    pub value: Option<T>,
}

/// Unique identifier for a ListOption component instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OptionId(usize);

impl OptionId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__option_{}", self.0)
    }
}

/// Identifier handed out by [`ListOption::subscribe`], used to remove the
/// subscriber again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Subscriber<T> = Arc<dyn Fn(&SelectionChange<T>) + Send + Sync>;

/// Internal state for a ListOption component.
struct OptionInner<T> {
    /// Identity/payload carried by the option
    value: Option<T>,
    /// Current selection flag
    selected: bool,
    /// Disabled affordance; interaction still runs (see `ComponentEvents` impl)
    disabled: bool,
    /// Presentation context, stamped by the owning container
    kind: OptionKind,
    /// If set, selecting schedules an automatic deselect after this delay
    select_timeout: Option<Duration>,
    /// Registered selection-change subscribers
    subscribers: Vec<(SubscriberId, Subscriber<T>)>,
    /// Next subscriber id to hand out
    next_subscriber: u64,
}

impl<T> Default for OptionInner<T> {
    fn default() -> Self {
        Self {
            value: None,
            selected: false,
            disabled: false,
            kind: OptionKind::default(),
            select_timeout: None,
            subscribers: Vec::new(),
            next_subscriber: 0,
        }
    }
}

/// An individually selectable element with reactive state.
///
/// # Example
///
/// ```
/// use listbox::components::ListOption;
///
/// let option = ListOption::with_value(42);
/// option.select();
/// assert!(option.is_selected());
/// option.toggle();
/// assert!(!option.is_selected());
/// ```
pub struct ListOption<T> {
    /// Unique identifier for this option instance
    id: OptionId,
    /// Internal state
    inner: Arc<RwLock<OptionInner<T>>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
}

impl<T: Clone + Send + Sync + 'static> ListOption<T> {
    /// Create a new option without a value.
    pub fn new() -> Self {
        Self {
            id: OptionId::new(),
            inner: Arc::new(RwLock::new(OptionInner::default())),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create an option carrying a value.
    pub fn with_value(value: T) -> Self {
        let option = Self::new();
        if let Ok(mut guard) = option.inner.write() {
            guard.value = Some(value);
        }
        option
    }

    /// Mark the option as initially selected, without publishing a change.
    ///
    /// This mirrors markup-declared initial selection: the containing list
    /// picks the flag up when it seeds its model.
    pub fn selected(self) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.selected = true;
        }
        self
    }

    /// Mark the option as disabled.
    pub fn disabled(self) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.disabled = true;
        }
        self
    }

    /// Make the option self-expiring with the default delay.
    pub fn timed(self) -> Self {
        self.timed_after(DEFAULT_SELECT_TIMEOUT)
    }

    /// Make the option self-expiring with an explicit delay.
    pub fn timed_after(self, delay: Duration) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.select_timeout = Some(delay);
        }
        self
    }

    /// Get the unique ID for this option.
    pub fn id(&self) -> OptionId {
        self.id
    }

    /// Get the ID as a string (for node binding).
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Get the option's value.
    pub fn value(&self) -> Option<T> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.value.clone())
    }

    /// Check if the option is selected.
    pub fn is_selected(&self) -> bool {
        self.inner.read().map(|guard| guard.selected).unwrap_or(false)
    }

    /// Check if the option is disabled.
    pub fn is_disabled(&self) -> bool {
        self.inner.read().map(|guard| guard.disabled).unwrap_or(false)
    }

    /// Get the presentation kind.
    pub fn kind(&self) -> OptionKind {
        self.inner
            .read()
            .map(|guard| guard.kind)
            .unwrap_or_default()
    }

    /// Get the configured auto-deselect delay, if any.
    pub fn select_timeout(&self) -> Option<Duration> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.select_timeout)
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Set the option's value.
    pub fn set_value(&self, value: Option<T>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value = value;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Set the disabled flag.
    pub fn set_disabled(&self, disabled: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.disabled = disabled;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Set the presentation kind. Called by the owning container.
    pub fn set_kind(&self, kind: OptionKind) {
        if let Ok(mut guard) = self.inner.write()
            && guard.kind != kind
        {
            guard.kind = kind;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Set or clear the auto-deselect delay.
    pub fn set_select_timeout(&self, delay: Option<Duration>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.select_timeout = delay;
        }
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Select the option.
    pub fn select(&self) {
        self.update_selected(true);
    }

    /// Deselect the option.
    pub fn deselect(&self) {
        self.update_selected(false);
    }

    /// Invert the current selection flag.
    pub fn toggle(&self) {
        self.update_selected(!self.is_selected());
    }

    /// Shared update path for every selection transition.
    ///
    /// The flag is written unconditionally, then a timer is scheduled for
    /// timed selects, then the change is published. Options with a positive
    /// timeout are momentary triggers: their reversion to unselected is
    /// never published. A zero timeout schedules nothing and publishes both
    /// transitions like a plain toggle.
    fn update_selected(&self, selected: bool) {
        let (change, timeout, subscribers) = {
            let Ok(mut guard) = self.inner.write() else {
                return;
            };
            guard.selected = selected;
            let timeout = guard.select_timeout;
            let timed = timeout.is_some_and(|delay| !delay.is_zero());
            let emit = !(timed && !selected);
            let subscribers: Vec<Subscriber<T>> = if emit {
                guard.subscribers.iter().map(|(_, s)| Arc::clone(s)).collect()
            } else {
                Vec::new()
            };
            let change = SelectionChange {
                selected,
                value: guard.value.clone(),
            };
            (change, timeout, subscribers)
        };
        trace!("{}: selected={}", self.id, selected);

        if selected
            && let Some(delay) = timeout
            && !delay.is_zero()
        {
            self.schedule_deselect(delay);
        }

        // Callbacks run with no internal lock held, so a subscriber may call
        // back into this option.
        for subscriber in &subscribers {
            subscriber(&change);
        }
        self.dirty.store(true, Ordering::SeqCst);
    }

    /// Spawn a fire-and-forget timer that deselects this option.
    ///
    /// Repeated selects spawn fresh timers; superseded timers are not
    /// cancelled and re-assert an already-false flag when they land.
    fn schedule_deselect(&self, delay: Duration) {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            warn!("{}: no async runtime, skipping auto-deselect", self.id);
            return;
        };
        let id = self.id;
        let inner = Arc::downgrade(&self.inner);
        let dirty = Arc::downgrade(&self.dirty);
        handle.spawn(async move {
            tokio::time::sleep(delay).await;
            // The timer is not owned by any container; it only needs the
            // option itself to still be alive.
            if let (Some(inner), Some(dirty)) = (inner.upgrade(), dirty.upgrade()) {
                debug!("{id}: auto-deselect after {delay:?}");
                ListOption { id, inner, dirty }.deselect();
            }
        });
    }

    // -------------------------------------------------------------------------
    // Subscriptions
    // -------------------------------------------------------------------------

    /// Register a selection-change subscriber.
    pub fn subscribe(
        &self,
        subscriber: impl Fn(&SelectionChange<T>) + Send + Sync + 'static,
    ) -> SubscriberId {
        let Ok(mut guard) = self.inner.write() else {
            return SubscriberId(u64::MAX);
        };
        let id = SubscriberId(guard.next_subscriber);
        guard.next_subscriber += 1;
        guard.subscribers.push((id, Arc::new(subscriber)));
        id
    }

    /// Remove a previously registered subscriber.
    pub fn unsubscribe(&self, id: SubscriberId) {
        if let Ok(mut guard) = self.inner.write() {
            guard.subscribers.retain(|(sid, _)| *sid != id);
        }
    }

    // -------------------------------------------------------------------------
    // Accessibility
    // -------------------------------------------------------------------------

    /// Attribute pairs reflected for assistive technology and for test
    /// harnesses that query by role.
    pub fn a11y(&self) -> Vec<(&'static str, String)> {
        vec![
            ("role", self.kind().role().to_string()),
            ("aria-selected", self.is_selected().to_string()),
            ("aria-disabled", self.is_disabled().to_string()),
        ]
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the option has changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl<T: Clone + Send + Sync + 'static> Default for ListOption<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for ListOption<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ListOption<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("ListOption");
        s.field("id", &self.id);
        if let Ok(guard) = self.inner.read() {
            s.field("value", &guard.value)
                .field("selected", &guard.selected)
                .field("disabled", &guard.disabled)
                .field("kind", &guard.kind);
        }
        s.finish()
    }
}
