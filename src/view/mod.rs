//! Mounted catalog views.
//!
//! The tab shell holds exactly one view at a time behind [`CatalogScreen`].
//! Dropping a view discards its state and cancels its fetch.

mod catalog;

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::models::{Focus, Tab};

pub use catalog::CatalogView;

/// Whether a view consumed a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Handled,
    /// Left for the shell (tab switching, quit)
    Ignored,
}

/// Object-safe face of a mounted catalog view
pub trait CatalogScreen {
    fn tab(&self) -> Tab;

    fn focus(&self) -> Focus;

    fn is_loading(&self) -> bool;

    /// Check for a finished fetch without blocking. Returns true when the
    /// fetch completed during this call.
    fn poll(&mut self) -> bool;

    fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome;

    fn render(&mut self, frame: &mut Frame, area: Rect);
}
