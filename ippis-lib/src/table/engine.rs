//! Table engine state and operations.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use log::{debug, trace};

use crate::config::TableConfig;
use crate::error::ConfigError;
use crate::model::Row;
use crate::source::RowSource;

use super::actions::{Action, TableActions};
use super::column::ColumnSpec;
use super::filter::{ActiveFilters, FilterSpec, matches_filters};
use super::notify::{Change, Listener, Listeners, SubscriptionId};
use super::page::{clamp_page, page_bounds, total_pages};
use super::search::matches_search;
use super::sort::{SortState, next_sort, sort_indices};
use super::view::View;

/// Internal state of a [`TableEngine`].
pub(super) struct EngineInner<T: Row> {
    /// The full row collection, in caller order.
    rows: Vec<T>,
    columns: Vec<ColumnSpec<T>>,
    filter_specs: Vec<FilterSpec>,
    config: TableConfig,
    search_term: String,
    active_filters: ActiveFilters,
    sort: Option<SortState>,
    /// 1-based; clamped again when the view is derived.
    current_page: usize,
    items_per_page: usize,
}

impl<T: Row> EngineInner<T> {
    fn new(
        rows: Vec<T>,
        columns: Vec<ColumnSpec<T>>,
        filter_specs: Vec<FilterSpec>,
        config: TableConfig,
    ) -> Self {
        let items_per_page = config.default_page_size;
        Self {
            rows,
            columns,
            filter_specs,
            config,
            search_term: String::new(),
            active_filters: ActiveFilters::new(),
            sort: None,
            current_page: 1,
            items_per_page,
        }
    }

    /// Puts search, filters, sort and paging back to their initial values.
    fn reset_state(&mut self) {
        self.search_term.clear();
        self.active_filters.clear();
        self.sort = None;
        self.current_page = 1;
        self.items_per_page = self.config.default_page_size;
    }

    fn is_initial_state(&self) -> bool {
        self.search_term.is_empty()
            && self.active_filters.is_empty()
            && self.sort.is_none()
            && self.current_page == 1
            && self.items_per_page == self.config.default_page_size
    }

    fn has_filter(&self, id: &str) -> bool {
        self.filter_specs.iter().any(|f| f.id == id)
    }

    fn is_sortable(&self, key: &str) -> bool {
        self.columns.iter().any(|c| c.key == key && c.sortable)
    }

    /// Indices of the rows passing search and filters, in display order.
    fn filtered_indices(&self) -> Vec<usize> {
        let term = self.search_term.to_lowercase();
        let filters: Vec<(&str, String)> = self
            .active_filters
            .iter()
            .map(|(id, value)| (id.as_str(), value.to_lowercase()))
            .collect();

        let mut indices: Vec<usize> = self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| matches_search(*row, &term) && matches_filters(*row, &filters))
            .map(|(i, _)| i)
            .collect();

        if let Some(sort) = &self.sort {
            sort_indices(&self.rows, &mut indices, sort);
        }
        indices
    }

    fn total_pages(&self) -> usize {
        total_pages(self.filtered_indices().len(), self.items_per_page)
    }

    fn derive_view(&self) -> View<T> {
        let indices = self.filtered_indices();
        let filtered_count = indices.len();
        let pages = total_pages(filtered_count, self.items_per_page);
        let page = clamp_page(self.current_page, pages);
        let bounds = page_bounds(page, self.items_per_page, filtered_count);

        let rows: Vec<T> = indices[bounds]
            .iter()
            .map(|&i| self.rows[i].clone())
            .collect();

        trace!(
            "Derived view: {} of {} rows match, page {}/{} shows {}",
            filtered_count,
            self.rows.len(),
            page,
            pages,
            rows.len()
        );

        View::new(
            rows,
            self.rows.len(),
            filtered_count,
            page,
            pages,
            self.items_per_page,
        )
    }
}

/// Search, filter, sort and pagination state for one table.
///
/// `TableEngine<T>` turns a row collection plus column and filter descriptors
/// into the [`View`] a screen shows, and exposes one operation per user
/// interaction:
/// - free-text search over every field
/// - exact-match filters along declared dimensions
/// - sortable columns (stable, ascending/descending)
/// - pagination with clamped page numbers
/// - add/edit/view/delete routed to the screen's [`TableActions`]
///
/// No operation fails: unknown filter ids and unsortable columns are
/// ignored and page numbers are clamped. Clones share state, so a renderer
/// and an input handler can each hold one. Every effective change marks the
/// engine dirty and is announced to subscribers.
///
/// # Example
///
/// ```
/// use ippis_lib::model::Record;
/// use ippis_lib::table::{ColumnSpec, FilterSpec, TableEngine};
///
/// let rows = vec![
///     Record::new(1).set("name", "Toyota Hilux").set("category", "Vehicles"),
///     Record::new(2).set("name", "Dell Latitude").set("category", "Computers"),
///     Record::new(3).set("name", "HP EliteBook").set("category", "Computers"),
/// ];
/// let engine = TableEngine::new(
///     rows,
///     vec![ColumnSpec::new("name", "Name").sortable()],
///     vec![FilterSpec::select("category", "Category")],
/// );
///
/// engine.set_filter("category", "computers");
/// engine.toggle_sort("name");
///
/// let view = engine.view();
/// assert_eq!(view.filtered_count(), 2);
/// assert_eq!(view.rows()[0].field("name").to_string(), "Dell Latitude");
/// # use ippis_lib::model::Row;
/// ```
pub struct TableEngine<T: Row> {
    inner: Arc<RwLock<EngineInner<T>>>,
    listeners: Arc<RwLock<Listeners>>,
    actions: Arc<RwLock<Option<Arc<dyn TableActions<T::Id>>>>>,
    dirty: Arc<AtomicBool>,
}

impl<T: Row> TableEngine<T> {
    /// Creates an engine with the default [`TableConfig`].
    pub fn new(rows: Vec<T>, columns: Vec<ColumnSpec<T>>, filter_specs: Vec<FilterSpec>) -> Self {
        Self::from_inner(EngineInner::new(
            rows,
            columns,
            filter_specs,
            TableConfig::default(),
        ))
    }

    /// Starts building an engine over `rows`.
    pub fn builder(rows: Vec<T>) -> TableEngineBuilder<T> {
        TableEngineBuilder::new(rows)
    }

    /// Creates an engine over the rows a source currently lists.
    pub fn from_source(
        source: &dyn RowSource<T>,
        columns: Vec<ColumnSpec<T>>,
        filter_specs: Vec<FilterSpec>,
    ) -> Self {
        Self::new(source.list(), columns, filter_specs)
    }

    fn from_inner(inner: EngineInner<T>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(inner)),
            listeners: Arc::new(RwLock::new(Listeners::default())),
            actions: Arc::new(RwLock::new(None)),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Applies `f` under the write lock and announces `change` if it
    /// reports a modification.
    fn mutate(&self, change: Change, f: impl FnOnce(&mut EngineInner<T>) -> bool) -> bool {
        let changed = f(&mut self.inner.write().unwrap_or_else(PoisonError::into_inner));
        if changed {
            self.dirty.store(true, Ordering::SeqCst);
            self.notify(&change);
        }
        changed
    }

    fn notify(&self, change: &Change) {
        let listeners: Vec<Listener> = self
            .listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .snapshot();
        for listener in listeners {
            listener(change);
        }
    }

    fn read<R>(&self, f: impl FnOnce(&EngineInner<T>) -> R) -> R {
        f(&self.inner.read().unwrap_or_else(PoisonError::into_inner))
    }

    // -------------------------------------------------------------------------
    // View
    // -------------------------------------------------------------------------

    /// Derives the rows the table currently shows.
    pub fn view(&self) -> View<T> {
        self.read(|g| g.derive_view())
    }

    /// Number of rows in the whole collection.
    pub fn total_count(&self) -> usize {
        self.read(|g| g.rows.len())
    }

    /// Number of rows passing the search and filters.
    pub fn filtered_count(&self) -> usize {
        self.read(|g| g.filtered_indices().len())
    }

    /// Number of pages of filtered rows. At least 1.
    pub fn total_pages(&self) -> usize {
        self.read(|g| g.total_pages())
    }

    // -------------------------------------------------------------------------
    // Search
    // -------------------------------------------------------------------------

    /// Get the search term.
    pub fn search_term(&self) -> String {
        self.read(|g| g.search_term.clone())
    }

    /// Replaces the search term and goes back to page 1.
    ///
    /// An empty term shows every row.
    pub fn set_search_term(&self, text: impl Into<String>) {
        let text = text.into();
        let changed = self.mutate(Change::Search, |g| {
            let changed = g.search_term != text || g.current_page != 1;
            g.search_term = text.clone();
            g.current_page = 1;
            changed
        });
        if changed {
            debug!("Search term set to {:?}", text);
        }
    }

    // -------------------------------------------------------------------------
    // Filters
    // -------------------------------------------------------------------------

    /// Get the filter descriptors.
    pub fn filter_specs(&self) -> Vec<FilterSpec> {
        self.read(|g| g.filter_specs.clone())
    }

    /// Get the active filter values.
    pub fn active_filters(&self) -> ActiveFilters {
        self.read(|g| g.active_filters.clone())
    }

    /// Get the active value of one filter.
    pub fn filter_value(&self, id: &str) -> Option<String> {
        self.read(|g| g.active_filters.get(id).cloned())
    }

    /// Returns `true` if a search term or any filter is active.
    pub fn has_active_filters(&self) -> bool {
        self.read(|g| !g.search_term.is_empty() || !g.active_filters.is_empty())
    }

    /// Sets one filter and goes back to page 1.
    ///
    /// An empty value clears the filter. Ids with no matching [`FilterSpec`]
    /// are ignored.
    pub fn set_filter(&self, id: &str, value: &str) {
        if value.is_empty() {
            self.clear_filter(id);
            return;
        }
        let change = Change::Filter { id: id.to_string() };
        let changed = self.mutate(change, |g| {
            if !g.has_filter(id) {
                trace!("Ignoring unknown filter {:?}", id);
                return false;
            }
            let previous = g.active_filters.insert(id.to_string(), value.to_string());
            let changed = previous.as_deref() != Some(value) || g.current_page != 1;
            g.current_page = 1;
            changed
        });
        if changed {
            debug!("Filter {} set to {:?}", id, value);
        }
    }

    /// Clears one filter and goes back to page 1.
    pub fn clear_filter(&self, id: &str) {
        let change = Change::Filter { id: id.to_string() };
        let changed = self.mutate(change, |g| {
            if !g.has_filter(id) {
                trace!("Ignoring unknown filter {:?}", id);
                return false;
            }
            let removed = g.active_filters.remove(id).is_some();
            let changed = removed || g.current_page != 1;
            g.current_page = 1;
            changed
        });
        if changed {
            debug!("Filter {} cleared", id);
        }
    }

    /// Clears the search term and every filter and goes back to page 1.
    pub fn clear_all_filters(&self) {
        let changed = self.mutate(Change::FiltersCleared, |g| {
            let changed =
                !g.search_term.is_empty() || !g.active_filters.is_empty() || g.current_page != 1;
            g.search_term.clear();
            g.active_filters.clear();
            g.current_page = 1;
            changed
        });
        if changed {
            debug!("All filters cleared");
        }
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Get the column descriptors.
    pub fn columns(&self) -> Vec<ColumnSpec<T>> {
        self.read(|g| g.columns.clone())
    }

    /// Get current sort state.
    pub fn sort(&self) -> Option<SortState> {
        self.read(|g| g.sort.clone())
    }

    /// Toggle sort for a column.
    ///
    /// A different column sorts ascending, the sorted column flips to
    /// descending, and a descending column follows the configured
    /// [`SortCycle`](super::SortCycle). Columns that are unknown or not
    /// sortable are ignored. Returns the new sort state.
    pub fn toggle_sort(&self, key: &str) -> Option<SortState> {
        let mut next = None;
        let changed = self.mutate(Change::Sort, |g| {
            if !g.is_sortable(key) {
                trace!("Ignoring sort on {:?}: not a sortable column", key);
                next = g.sort.clone();
                return false;
            }
            g.sort = next_sort(g.sort.as_ref(), key, g.config.sort_cycle);
            next = g.sort.clone();
            true
        });
        if changed {
            debug!("Sort on {:?} is now {:?}", key, next);
        }
        next
    }

    /// Removes any sort, restoring the row order the caller supplied.
    pub fn clear_sort(&self) {
        self.mutate(Change::Sort, |g| g.sort.take().is_some());
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    /// Get the current page (1-based), clamped to the filtered row count.
    pub fn current_page(&self) -> usize {
        self.read(|g| clamp_page(g.current_page, g.total_pages()))
    }

    /// Moves to page `page`, clamped to `[1, total_pages]`.
    ///
    /// Returns the page actually shown.
    pub fn set_page(&self, page: usize) -> usize {
        let mut shown = 1;
        self.mutate(Change::Page, |g| {
            shown = clamp_page(page, g.total_pages());
            let changed = g.current_page != shown;
            g.current_page = shown;
            changed
        });
        if shown != page {
            trace!("Page {} clamped to {}", page, shown);
        }
        shown
    }

    /// Moves one page forward, staying on the last page.
    pub fn next_page(&self) -> usize {
        self.set_page(self.current_page().saturating_add(1))
    }

    /// Moves one page back, staying on the first page.
    pub fn previous_page(&self) -> usize {
        self.set_page(self.current_page().saturating_sub(1))
    }

    /// Get the page size.
    pub fn items_per_page(&self) -> usize {
        self.read(|g| g.items_per_page)
    }

    /// Get the page sizes the user can choose from.
    pub fn page_size_options(&self) -> Vec<usize> {
        self.read(|g| g.config.page_size_options.clone())
    }

    /// Changes the page size and goes back to page 1.
    ///
    /// Sizes that are not among the configured options are ignored. Returns
    /// `true` if the size is now in effect.
    pub fn set_items_per_page(&self, size: usize) -> bool {
        let mut accepted = false;
        let changed = self.mutate(Change::PageSize, |g| {
            if !g.config.offers_page_size(size) {
                trace!("Ignoring page size {}: not offered", size);
                return false;
            }
            accepted = true;
            let changed = g.items_per_page != size || g.current_page != 1;
            g.items_per_page = size;
            g.current_page = 1;
            changed
        });
        if changed {
            debug!("Page size set to {}", size);
        }
        accepted
    }

    // -------------------------------------------------------------------------
    // Rows
    // -------------------------------------------------------------------------

    /// Get all rows in caller order.
    pub fn rows(&self) -> Vec<T> {
        self.read(|g| g.rows.clone())
    }

    /// Replaces the row collection and resets search, filters, sort and
    /// paging to their initial values.
    pub fn set_rows(&self, rows: Vec<T>) {
        let count = rows.len();
        self.mutate(Change::Rows, |g| {
            g.rows = rows;
            g.reset_state();
            true
        });
        debug!("Rows replaced: {} rows", count);
    }

    /// Replaces the rows with what `source` lists now.
    pub fn reload(&self, source: &dyn RowSource<T>) {
        self.set_rows(source.list());
    }

    /// Resets search, filters, sort and paging without touching the rows.
    pub fn reset(&self) {
        let changed = self.mutate(Change::Reset, |g| {
            let changed = !g.is_initial_state();
            g.reset_state();
            changed
        });
        if changed {
            debug!("Table state reset");
        }
    }

    // -------------------------------------------------------------------------
    // Actions
    // -------------------------------------------------------------------------

    /// Sets the handler for add/edit/view/delete.
    pub fn set_actions(&self, actions: impl TableActions<T::Id> + 'static) {
        *self.actions.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(actions));
    }

    /// Routes an action to the handler.
    ///
    /// Returns `false` if no handler is set. The handler runs after every
    /// engine lock is released, so it may call back into the engine.
    pub fn dispatch(&self, action: Action<T::Id>) -> bool {
        let handler = self
            .actions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        let Some(handler) = handler else {
            debug!("No handler for {} action", action.name());
            return false;
        };

        debug!(
            "Dispatching {} action{}",
            action.name(),
            action.id().map(|id| format!(" for {}", id)).unwrap_or_default()
        );
        match &action {
            Action::Add => handler.on_add(),
            Action::Edit(id) => handler.on_edit(id),
            Action::View(id) => handler.on_view(id),
            Action::Delete(id) => handler.on_delete(id),
        }
        true
    }

    /// The "add" button was pressed.
    pub fn add(&self) -> bool {
        self.dispatch(Action::Add)
    }

    /// Edit was requested for the row with `id`.
    pub fn edit(&self, id: T::Id) -> bool {
        self.dispatch(Action::Edit(id))
    }

    /// The details view was requested for the row with `id`.
    pub fn view_row(&self, id: T::Id) -> bool {
        self.dispatch(Action::View(id))
    }

    /// Deletion was requested for the row with `id`.
    pub fn delete(&self, id: T::Id) -> bool {
        self.dispatch(Action::Delete(id))
    }

    // -------------------------------------------------------------------------
    // Notifications
    // -------------------------------------------------------------------------

    /// Registers a listener called after every effective change.
    pub fn subscribe(&self, listener: impl Fn(&Change) + Send + Sync + 'static) -> SubscriptionId {
        let mut guard = self.listeners.write().unwrap_or_else(PoisonError::into_inner);
        guard.add(Arc::new(listener))
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id)
    }

    /// Check if the view needs re-rendering.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl<T: Row> Clone for TableEngine<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            listeners: Arc::clone(&self.listeners),
            actions: Arc::clone(&self.actions),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl<T: Row> fmt::Debug for TableEngine<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("TableEngine");
        self.read(|g| {
            s.field("rows", &g.rows.len())
                .field("search_term", &g.search_term)
                .field("active_filters", &g.active_filters)
                .field("sort", &g.sort)
                .field("current_page", &g.current_page)
                .field("items_per_page", &g.items_per_page);
        });
        let listeners = self.listeners.read().unwrap_or_else(PoisonError::into_inner).len();
        s.field("listeners", &listeners)
            .field("dirty", &self.is_dirty())
            .finish()
    }
}

/// Builder for a [`TableEngine`] with a custom config or actions.
///
/// # Example
///
/// ```
/// use ippis_lib::config::TableConfig;
/// use ippis_lib::model::Record;
/// use ippis_lib::table::{Callbacks, ColumnSpec, TableEngine};
///
/// let engine = TableEngine::builder(Vec::<Record>::new())
///     .columns(vec![ColumnSpec::new("name", "Name").sortable()])
///     .config(TableConfig::default().with_default_page_size(20))
///     .actions(Callbacks::new().handle_add(|| println!("open add dialog")))
///     .build()
///     .unwrap();
///
/// assert_eq!(engine.items_per_page(), 20);
/// ```
pub struct TableEngineBuilder<T: Row> {
    rows: Vec<T>,
    columns: Vec<ColumnSpec<T>>,
    filter_specs: Vec<FilterSpec>,
    config: TableConfig,
    actions: Option<Arc<dyn TableActions<T::Id>>>,
}

impl<T: Row> TableEngineBuilder<T> {
    fn new(rows: Vec<T>) -> Self {
        Self {
            rows,
            columns: Vec::new(),
            filter_specs: Vec::new(),
            config: TableConfig::default(),
            actions: None,
        }
    }

    pub fn columns(mut self, columns: Vec<ColumnSpec<T>>) -> Self {
        self.columns = columns;
        self
    }

    pub fn filters(mut self, filter_specs: Vec<FilterSpec>) -> Self {
        self.filter_specs = filter_specs;
        self
    }

    pub fn config(mut self, config: TableConfig) -> Self {
        self.config = config;
        self
    }

    pub fn actions(mut self, actions: impl TableActions<T::Id> + 'static) -> Self {
        self.actions = Some(Arc::new(actions));
        self
    }

    /// Validates the config and creates the engine.
    pub fn build(self) -> Result<TableEngine<T>, ConfigError> {
        self.config.validate()?;
        let engine = TableEngine::from_inner(EngineInner::new(
            self.rows,
            self.columns,
            self.filter_specs,
            self.config,
        ));
        *engine.actions.write().unwrap_or_else(PoisonError::into_inner) = self.actions;
        Ok(engine)
    }
}
