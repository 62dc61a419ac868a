//! Selection list component state.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::components::option::{ListOption, OptionKind, SelectionChange, SubscriberId};
use crate::components::selection::{SelectionMode, SelectionModel};
use crate::forms::ValueAccessor;
use crate::utils::{self, OnceLatch};

/// Presentation context of a selection list container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListKind {
    /// Flat listbox presentation
    #[default]
    Listbox,
    /// Grid presentation
    Grid,
}

impl ListKind {
    /// The role reflected for assistive technology.
    pub fn as_str(&self) -> &'static str {
        match self {
            ListKind::Listbox => "listbox",
            ListKind::Grid => "grid",
        }
    }

    /// The kind stamped onto child options.
    pub fn option_kind(&self) -> OptionKind {
        match self {
            ListKind::Listbox => OptionKind::ListboxOption,
            ListKind::Grid => OptionKind::GridOption,
        }
    }
}

/// Derived value of a selection list.
///
/// A multi-selection list never yields `Multiple` with an empty vec; an empty
/// selection is `None` at the `value()` call site in both arities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ListValue<T> {
    /// The sole selected value of a single-selection list
    Single(T),
    /// The selected values of a multi-selection list, in selection order
    Multiple(Vec<T>),
}

/// Unique identifier for a SelectionList component instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectionListId(usize);

impl SelectionListId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for SelectionListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__selection_list_{}", self.0)
    }
}

type ValueCallback<T> = Arc<dyn Fn(Option<ListValue<T>>) + Send + Sync>;
type ElementCallback<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Internal state for a SelectionList component.
struct ListInner<T> {
    /// Presentation context, propagated to child options
    kind: ListKind,
    /// The authoritative selection model; arity fixed at construction
    model: SelectionModel<T>,
    /// The observed option collection, in order; not owned
    options: Vec<ListOption<T>>,
    /// Active per-option subscriptions for the current generation
    subscriptions: Vec<(ListOption<T>, SubscriberId)>,
    /// Form-side change notification
    on_change: Option<ValueCallback<T>>,
    /// Fires with the first value added to the model in a change
    on_selected: Option<ElementCallback<T>>,
    /// Fires with the first value removed from the model in a change
    on_deselected: Option<ElementCallback<T>>,
}

impl<T: Clone + PartialEq> ListInner<T> {
    fn new(mode: SelectionMode) -> Self {
        Self {
            kind: ListKind::default(),
            model: SelectionModel::new(mode),
            options: Vec::new(),
            subscriptions: Vec::new(),
            on_change: None,
            on_selected: None,
            on_deselected: None,
        }
    }
}

/// A container aggregating options into a single/multi-valued selection.
///
/// The list discovers options structurally via [`set_options`](Self::set_options)
/// and friends; options never point back at the list. Every child-set change
/// runs one reconciliation pass: seed (first pass only), stamp the
/// presentation kind, align option flags with the model, and replace the
/// event subscriptions of the previous generation.
pub struct SelectionList<T> {
    /// Unique identifier for this list instance
    id: SelectionListId,
    /// Internal state
    inner: Arc<RwLock<ListInner<T>>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
    /// One-shot latch guarding the model seed pass
    seeded: Arc<OnceLatch>,
}

impl<T: Clone + PartialEq + Send + Sync + 'static> SelectionList<T> {
    /// Create a new single-selection listbox.
    pub fn new() -> Self {
        Self::with_selection_mode(SelectionMode::Single)
    }

    /// Create a new multi-selection listbox.
    pub fn multiple() -> Self {
        Self::with_selection_mode(SelectionMode::Multiple)
    }

    /// Create a list with the given selection arity.
    ///
    /// The arity is fixed for the lifetime of the internal model.
    pub fn with_selection_mode(mode: SelectionMode) -> Self {
        Self {
            id: SelectionListId::new(),
            inner: Arc::new(RwLock::new(ListInner::new(mode))),
            dirty: Arc::new(AtomicBool::new(false)),
            seeded: Arc::new(OnceLatch::new()),
        }
    }

    /// Get the unique ID for this list.
    pub fn id(&self) -> SelectionListId {
        self.id
    }

    /// Get the ID as a string (for node binding).
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Option collection
    // -------------------------------------------------------------------------

    /// Replace the observed option collection.
    pub fn set_options(&self, options: Vec<ListOption<T>>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.options = options;
        }
        self.child_set_changed();
    }

    /// Append an option to the observed collection.
    pub fn push_option(&self, option: ListOption<T>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.options.push(option);
        }
        self.child_set_changed();
    }

    /// Remove an option from the observed collection, matched by identity.
    pub fn remove_option(&self, option: &ListOption<T>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.options.retain(|o| o.id() != option.id());
        }
        self.child_set_changed();
    }

    /// Get the observed options in order.
    pub fn options(&self) -> Vec<ListOption<T>> {
        self.inner
            .read()
            .map(|guard| guard.options.clone())
            .unwrap_or_default()
    }

    /// Get the number of observed options.
    pub fn len(&self) -> usize {
        self.inner
            .read()
            .map(|guard| guard.options.len())
            .unwrap_or(0)
    }

    /// Check if no options are observed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the presentation kind.
    pub fn kind(&self) -> ListKind {
        self.inner
            .read()
            .map(|guard| guard.kind)
            .unwrap_or_default()
    }

    /// Set the presentation kind and restamp the current options.
    pub fn set_kind(&self, kind: ListKind) {
        let options = {
            let Ok(mut guard) = self.inner.write() else {
                return;
            };
            guard.kind = kind;
            guard.options.clone()
        };
        for option in &options {
            option.set_kind(kind.option_kind());
        }
        self.dirty.store(true, Ordering::SeqCst);
    }

    // -------------------------------------------------------------------------
    // Reconciliation
    // -------------------------------------------------------------------------

    /// React to a change in the observed option collection.
    ///
    /// Runs only when the resulting collection is non-empty. The previous
    /// generation's subscriptions stay live until the final step, so events
    /// published while flags are aligned still reach the handler for options
    /// that were already observed.
    fn child_set_changed(&self) {
        let (options, kind) = {
            let Ok(guard) = self.inner.read() else {
                return;
            };
            (guard.options.clone(), guard.kind)
        };
        if options.is_empty() {
            trace!("{}: child set empty, skipping reconcile", self.id);
            return;
        }
        debug!("{}: reconciling {} option(s)", self.id, options.len());

        // Seed once per lifetime, on the first non-empty child set.
        if self.seeded.fire() {
            self.seed_model(&options);
        }

        for option in &options {
            option.set_kind(kind.option_kind());
        }

        self.sync_options(&options);
        self.dirty.store(true, Ordering::SeqCst);

        // Replace the previous generation's subscriptions wholesale so stale
        // options never emit into the new handler.
        self.resubscribe(&options);
    }

    /// Adopt markup-declared initial selection into an empty model.
    fn seed_model(&self, options: &[ListOption<T>]) {
        let seeds = utils::non_nil(
            options
                .iter()
                .filter(|option| option.is_selected())
                .map(|option| option.value()),
        );
        let (added, removed) = {
            let Ok(mut guard) = self.inner.write() else {
                return;
            };
            if !guard.model.is_empty() || seeds.is_empty() {
                return;
            }
            guard.model.select(&seeds)
        };
        debug!("{}: seeded {} initial value(s)", self.id, added.len());
        self.model_changed(&added, &removed);
    }

    /// Align each option's flag with the model.
    #[allow(clippy::if_same_then_else)]
    fn sync_options(&self, options: &[ListOption<T>]) {
        for option in options {
            let Some(value) = option.value() else {
                continue;
            };
            let in_model = self.is_selected(&value);
            if in_model && !option.is_selected() {
                option.select();
            } else if !in_model && option.is_selected() {
                // An option that shows up selected outside the model is
                // re-selected; its change event folds the value into the
                // model once the option is subscribed.
                option.select();
            }
        }
    }

    /// Replace the per-option subscriptions with a fresh generation.
    fn resubscribe(&self, options: &[ListOption<T>]) {
        let previous = {
            let Ok(mut guard) = self.inner.write() else {
                return;
            };
            std::mem::take(&mut guard.subscriptions)
        };
        for (option, id) in previous {
            option.unsubscribe(id);
        }

        let mut fresh = Vec::with_capacity(options.len());
        for option in options {
            let id = self.id;
            let inner = Arc::downgrade(&self.inner);
            let dirty = Arc::downgrade(&self.dirty);
            let seeded = Arc::downgrade(&self.seeded);
            let subscription = option.subscribe(move |change| {
                // Holding only weak handles keeps a dropped list from being
                // kept alive by its former options.
                let (Some(inner), Some(dirty), Some(seeded)) =
                    (inner.upgrade(), dirty.upgrade(), seeded.upgrade())
                else {
                    return;
                };
                let list = SelectionList {
                    id,
                    inner,
                    dirty,
                    seeded,
                };
                list.handle_selection_change(change);
            });
            fresh.push((option.clone(), subscription));
        }
        if let Ok(mut guard) = self.inner.write() {
            guard.subscriptions = fresh;
        }
    }

    /// React to one option's published selection change.
    fn handle_selection_change(&self, change: &SelectionChange<T>) {
        // Valueless options never reach the model.
        let Some(value) = change.value.clone() else {
            return;
        };

        if change.selected && self.is_single_selection() && !self.is_selected(&value) {
            // Exclusivity is enforced before the new value is recorded.
            for option in self.selected_options() {
                if option.value().as_ref() == Some(&value) {
                    continue;
                }
                option.deselect();
            }
        }

        let (added, removed) = {
            let Ok(mut guard) = self.inner.write() else {
                return;
            };
            if change.selected {
                guard.model.select(std::slice::from_ref(&value))
            } else {
                (
                    Vec::new(),
                    guard.model.deselect(std::slice::from_ref(&value)),
                )
            }
        };
        self.model_changed(&added, &removed);
    }

    /// Publish a model diff: dirty flag, list events, form notification.
    fn model_changed(&self, added: &[T], removed: &[T]) {
        if added.is_empty() && removed.is_empty() {
            return;
        }
        self.dirty.store(true, Ordering::SeqCst);

        let (on_change, on_selected, on_deselected) = {
            let Ok(guard) = self.inner.read() else {
                return;
            };
            (
                guard.on_change.clone(),
                guard.on_selected.clone(),
                guard.on_deselected.clone(),
            )
        };
        // A batch surfaces only its first element, matching the model-diff
        // behavior this component family settled on.
        if let (Some(callback), Some(value)) = (&on_selected, added.first()) {
            callback(value);
        }
        if let (Some(callback), Some(value)) = (&on_deselected, removed.first()) {
            callback(value);
        }
        if let Some(callback) = &on_change {
            callback(self.value());
        }
    }

    // -------------------------------------------------------------------------
    // Selection operations
    // -------------------------------------------------------------------------

    /// Select the options matching the given values. Unknown values are
    /// silently skipped.
    pub fn select(&self, values: &[T]) {
        for value in values {
            if let Some(option) = self.option_for(value) {
                option.select();
            }
        }
    }

    /// Deselect the option matching the given value, if any.
    pub fn deselect(&self, value: &T) {
        if let Some(option) = self.option_for(value) {
            option.deselect();
        }
    }

    /// Select every observed option.
    pub fn select_all(&self) {
        for option in self.options() {
            option.select();
        }
    }

    /// Select every observed option satisfying the predicate.
    pub fn select_all_where(&self, predicate: impl Fn(&ListOption<T>) -> bool) {
        for option in self.options() {
            if predicate(&option) {
                option.select();
            }
        }
    }

    /// Deselect every observed option.
    pub fn deselect_all(&self) {
        for option in self.options() {
            option.deselect();
        }
    }

    /// Deselect every observed option satisfying the predicate.
    pub fn deselect_all_where(&self, predicate: impl Fn(&ListOption<T>) -> bool) {
        for option in self.options() {
            if predicate(&option) {
                option.deselect();
            }
        }
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Check if the model holds any value.
    pub fn has_value(&self) -> bool {
        self.inner
            .read()
            .map(|guard| !guard.model.is_empty())
            .unwrap_or(false)
    }

    /// Check if a value is recorded as selected in the model.
    pub fn is_selected(&self, value: &T) -> bool {
        self.inner
            .read()
            .map(|guard| guard.model.is_selected(value))
            .unwrap_or(false)
    }

    /// Check if the list allows multiple selection.
    pub fn is_multiple_selection(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.model.is_multiple())
            .unwrap_or(false)
    }

    /// Check if the list allows at most one selection.
    pub fn is_single_selection(&self) -> bool {
        !self.is_multiple_selection()
    }

    /// Derive the list's value from the model.
    ///
    /// Single mode yields the sole selected value; multi mode yields the
    /// selected values in selection order, never as an empty vec.
    pub fn value(&self) -> Option<ListValue<T>> {
        let Ok(guard) = self.inner.read() else {
            return None;
        };
        if guard.model.is_multiple() {
            let values = guard.model.selected();
            if values.is_empty() {
                None
            } else {
                Some(ListValue::Multiple(values))
            }
        } else {
            guard
                .model
                .selected()
                .into_iter()
                .next()
                .map(ListValue::Single)
        }
    }

    /// Find the first observed option carrying the given value.
    fn option_for(&self, value: &T) -> Option<ListOption<T>> {
        self.inner.read().ok().and_then(|guard| {
            guard
                .options
                .iter()
                .find(|option| option.value().as_ref() == Some(value))
                .cloned()
        })
    }

    /// Snapshot the observed options whose own flag is selected.
    fn selected_options(&self) -> Vec<ListOption<T>> {
        self.inner
            .read()
            .map(|guard| {
                guard
                    .options
                    .iter()
                    .filter(|option| option.is_selected())
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Outbound events
    // -------------------------------------------------------------------------

    /// Register the callback fired with the first value a change adds.
    pub fn on_selected(&self, callback: impl Fn(&T) + Send + Sync + 'static) {
        if let Ok(mut guard) = self.inner.write() {
            guard.on_selected = Some(Arc::new(callback));
        }
    }

    /// Register the callback fired with the first value a change removes.
    pub fn on_deselected(&self, callback: impl Fn(&T) + Send + Sync + 'static) {
        if let Ok(mut guard) = self.inner.write() {
            guard.on_deselected = Some(Arc::new(callback));
        }
    }

    // -------------------------------------------------------------------------
    // Teardown
    // -------------------------------------------------------------------------

    /// Tear the list down: drop all subscriptions and release the observed
    /// options. In-flight option timers are not owned here and may still
    /// fire afterwards.
    pub fn detach(&self) {
        debug!("{}: detaching", self.id);
        let (subscriptions, _options) = {
            let Ok(mut guard) = self.inner.write() else {
                return;
            };
            (
                std::mem::take(&mut guard.subscriptions),
                std::mem::take(&mut guard.options),
            )
        };
        for (option, id) in subscriptions {
            option.unsubscribe(id);
        }
    }

    // -------------------------------------------------------------------------
    // Accessibility
    // -------------------------------------------------------------------------

    /// Attribute pairs reflected for assistive technology and for test
    /// harnesses that query by role.
    pub fn a11y(&self) -> Vec<(&'static str, String)> {
        vec![
            ("role", self.kind().as_str().to_string()),
            (
                "aria-multiselectable",
                self.is_multiple_selection().to_string(),
            ),
        ]
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the list has changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl<T: Clone + PartialEq + Send + Sync + 'static> Default for SelectionList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for SelectionList<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
            seeded: Arc::clone(&self.seeded),
        }
    }
}

impl<T: fmt::Debug + Clone + PartialEq> fmt::Debug for SelectionList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("SelectionList");
        s.field("id", &self.id);
        if let Ok(guard) = self.inner.read() {
            s.field("kind", &guard.kind)
                .field("mode", &guard.model.mode())
                .field("selected", &guard.model.selected())
                .field("options", &guard.options.len());
        }
        s.finish()
    }
}

// =============================================================================
// ValueAccessor implementation
// =============================================================================

impl<T: Clone + PartialEq + Send + Sync + 'static> ValueAccessor<T> for SelectionList<T> {
    /// Write a value from the form side.
    ///
    /// Before any options are discovered the values go straight into the
    /// model and are reconciled on the first child-set pass. Afterwards the
    /// write round-trips through the options' own select path.
    fn write_value(&self, value: Option<ListValue<T>>) {
        let values: Vec<T> = match value {
            Some(ListValue::Single(value)) => vec![value],
            Some(ListValue::Multiple(values)) => values,
            None => Vec::new(),
        };
        if self.is_empty() {
            if values.is_empty() {
                return;
            }
            let (added, removed) = {
                let Ok(mut guard) = self.inner.write() else {
                    return;
                };
                guard.model.select(&values)
            };
            self.model_changed(&added, &removed);
        } else {
            self.deselect_all();
            self.select(&values);
        }
    }

    fn register_on_change(&self, callback: Box<dyn Fn(Option<ListValue<T>>) + Send + Sync>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.on_change = Some(Arc::from(callback));
        }
    }

    /// Accepted for the bridge contract; the list never reports touched,
    /// so the callback is dropped.
    fn register_on_touched(&self, _callback: Box<dyn Fn() + Send + Sync>) {}

    fn set_disabled_state(&self, disabled: bool) {
        for option in self.options() {
            option.set_disabled(disabled);
        }
    }
}
