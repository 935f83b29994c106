//! Add/edit/view/delete callbacks.

use std::fmt;
use std::sync::Arc;

/// Row actions a screen handles.
///
/// The engine only passes row ids. Looking the row up, opening dialogs and
/// persisting changes is up to the implementation, so a handler always works
/// against the screen's current data rather than a copy taken at render time.
///
/// All methods default to doing nothing.
pub trait TableActions<Id>: Send + Sync {
    /// The "add" button was pressed.
    fn on_add(&self) {}

    /// Edit was requested for a row.
    fn on_edit(&self, id: &Id) {
        let _ = id;
    }

    /// The details view was requested for a row.
    fn on_view(&self, id: &Id) {
        let _ = id;
    }

    /// Deletion was requested for a row.
    fn on_delete(&self, id: &Id) {
        let _ = id;
    }
}

/// A row action emitted by a rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action<Id> {
    Add,
    Edit(Id),
    View(Id),
    Delete(Id),
}

impl<Id> Action<Id> {
    /// Short name of the action, for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Add => "add",
            Action::Edit(_) => "edit",
            Action::View(_) => "view",
            Action::Delete(_) => "delete",
        }
    }

    /// The row id the action targets, if any.
    pub fn id(&self) -> Option<&Id> {
        match self {
            Action::Add => None,
            Action::Edit(id) | Action::View(id) | Action::Delete(id) => Some(id),
        }
    }
}

type AddFn = Arc<dyn Fn() + Send + Sync>;
type IdFn<Id> = Arc<dyn Fn(&Id) + Send + Sync>;

/// [`TableActions`] built from closures.
///
/// # Example
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use ippis_lib::table::{Callbacks, TableActions};
///
/// let deleted = Arc::new(Mutex::new(Vec::new()));
/// let sink = deleted.clone();
/// let actions = Callbacks::new().handle_delete(move |id: &u32| sink.lock().unwrap().push(*id));
///
/// actions.on_delete(&7);
/// assert_eq!(*deleted.lock().unwrap(), vec![7]);
/// ```
pub struct Callbacks<Id> {
    add: Option<AddFn>,
    edit: Option<IdFn<Id>>,
    view: Option<IdFn<Id>>,
    delete: Option<IdFn<Id>>,
}

impl<Id> Callbacks<Id> {
    pub fn new() -> Self {
        Self {
            add: None,
            edit: None,
            view: None,
            delete: None,
        }
    }

    pub fn handle_add(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.add = Some(Arc::new(f));
        self
    }

    pub fn handle_edit(mut self, f: impl Fn(&Id) + Send + Sync + 'static) -> Self {
        self.edit = Some(Arc::new(f));
        self
    }

    pub fn handle_view(mut self, f: impl Fn(&Id) + Send + Sync + 'static) -> Self {
        self.view = Some(Arc::new(f));
        self
    }

    pub fn handle_delete(mut self, f: impl Fn(&Id) + Send + Sync + 'static) -> Self {
        self.delete = Some(Arc::new(f));
        self
    }
}

impl<Id> Default for Callbacks<Id> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Id> fmt::Debug for Callbacks<Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("add", &self.add.is_some())
            .field("edit", &self.edit.is_some())
            .field("view", &self.view.is_some())
            .field("delete", &self.delete.is_some())
            .finish()
    }
}

impl<Id> TableActions<Id> for Callbacks<Id> {
    fn on_add(&self) {
        if let Some(f) = &self.add {
            f();
        }
    }

    fn on_edit(&self, id: &Id) {
        if let Some(f) = &self.edit {
            f(id);
        }
    }

    fn on_view(&self, id: &Id) {
        if let Some(f) = &self.view {
            f(id);
        }
    }

    fn on_delete(&self, id: &Id) {
        if let Some(f) = &self.delete {
            f(id);
        }
    }
}
