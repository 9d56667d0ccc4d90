//! Mutable handle over page state that may outlive its view.
//!
//! Async flows hold a `StateCell` across network awaits. When the page has
//! unmounted by the time a response lands, the signal is disposed and the
//! update is dropped.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::{RwSignal, Update};

pub trait StateCell<S> {
    /// Apply `f` to the state, or return `None` if the owner is gone.
    fn with_mut<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R>;
}

impl<S: Send + Sync + 'static> StateCell<S> for RwSignal<S> {
    fn with_mut<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl<S> StateCell<S> for Rc<RefCell<S>> {
    fn with_mut<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}
