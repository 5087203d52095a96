//! Row action dispatch.
//!
//! The grid is purely a dispatcher: handlers receive the exact row from the
//! dataset the host supplied, by reference, and own every side effect that
//! follows (navigation, confirmation, remote mutation).

use bizgrid_core::{GridError, GridResult, RowAction};

type Handler<R> = Box<dyn FnMut(&R)>;

/// Optional `on_view` / `on_edit` / `on_delete` handlers.
///
/// An action without a handler has no control in the rendered grid.
pub struct RowActions<R> {
    view: Option<Handler<R>>,
    edit: Option<Handler<R>>,
    delete: Option<Handler<R>>,
}

impl<R> Default for RowActions<R> {
    fn default() -> Self {
        Self {
            view: None,
            edit: None,
            delete: None,
        }
    }
}

impl<R> RowActions<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_view(mut self, f: impl FnMut(&R) + 'static) -> Self {
        self.view = Some(Box::new(f));
        self
    }

    pub fn on_edit(mut self, f: impl FnMut(&R) + 'static) -> Self {
        self.edit = Some(Box::new(f));
        self
    }

    pub fn on_delete(mut self, f: impl FnMut(&R) + 'static) -> Self {
        self.delete = Some(Box::new(f));
        self
    }

    fn slot(&mut self, action: RowAction) -> &mut Option<Handler<R>> {
        match action {
            RowAction::View => &mut self.view,
            RowAction::Edit => &mut self.edit,
            RowAction::Delete => &mut self.delete,
        }
    }

    pub fn has(&self, action: RowAction) -> bool {
        match action {
            RowAction::View => self.view.is_some(),
            RowAction::Edit => self.edit.is_some(),
            RowAction::Delete => self.delete.is_some(),
        }
    }

    /// Actions with a registered handler, in display order.
    pub fn available(&self) -> Vec<RowAction> {
        RowAction::ALL.into_iter().filter(|a| self.has(*a)).collect()
    }

    /// Invoke the handler for `action` with `row`.
    pub fn dispatch(&mut self, action: RowAction, row: &R) -> GridResult<()> {
        let handler = self
            .slot(action)
            .as_mut()
            .ok_or(GridError::ActionUnavailable(action))?;
        handler(row);
        Ok(())
    }
}

impl<R> core::fmt::Debug for RowActions<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RowActions")
            .field("view", &self.view.is_some())
            .field("edit", &self.edit.is_some())
            .field("delete", &self.delete.is_some())
            .finish()
    }
}
