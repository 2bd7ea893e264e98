//! Application state and core logic for GenericDev Hub.
//!
//! This module contains the `App` struct: the active tab, the one mounted
//! catalog view, and the shell-level key bindings (tab switching, quit).

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Margin;
use ratatui::prelude::*;
use ratatui::widgets::Block;
use tracing::info;

use crate::catalog::{PROCESSES, REGULATORY, TROUBLESHOOTING};
use crate::models::Tab;
use crate::store::CatalogSource;
use crate::theme::BG_PRIMARY;
use crate::ui::{render_footer, render_header, HEADER_HEIGHT};
use crate::view::{CatalogScreen, CatalogView, KeyOutcome};

/// Application state
pub struct App {
    active_tab: Tab,
    view: Box<dyn CatalogScreen>,
    source: Arc<dyn CatalogSource>,
    pub should_quit: bool,
}

/// Build the view for `tab`; its fetch starts immediately
fn mount(tab: Tab, source: Arc<dyn CatalogSource>) -> Box<dyn CatalogScreen> {
    match tab {
        Tab::Processes => Box::new(CatalogView::mount(&PROCESSES, source)),
        Tab::Troubleshooting => Box::new(CatalogView::mount(&TROUBLESHOOTING, source)),
        Tab::Regulatory => Box::new(CatalogView::mount(&REGULATORY, source)),
    }
}

impl App {
    /// Must be called from within a tokio runtime
    pub fn new(source: Arc<dyn CatalogSource>, initial_tab: Tab) -> Self {
        Self {
            active_tab: initial_tab,
            view: mount(initial_tab, source.clone()),
            source,
            should_quit: false,
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn view(&self) -> &dyn CatalogScreen {
        self.view.as_ref()
    }

    /// Replace the mounted view. The old view is dropped, which cancels
    /// its fetch. Selecting the active tab does nothing.
    pub fn switch_tab(&mut self, tab: Tab) {
        if tab == self.active_tab {
            return;
        }
        info!(from = self.active_tab.id(), to = tab.id(), "switching tab");
        self.active_tab = tab;
        self.view = mount(tab, self.source.clone());
    }

    /// Called once per loop iteration
    pub fn tick(&mut self) {
        self.view.poll();
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.view.handle_key(key) == KeyOutcome::Handled {
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab => self.switch_tab(self.active_tab.next()),
            KeyCode::BackTab => self.switch_tab(self.active_tab.previous()),
            KeyCode::Char(c @ '1'..='3') => {
                let index = (c as usize) - ('1' as usize);
                self.switch_tab(Tab::ALL[index]);
            }
            _ => {}
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(
            Block::default().style(Style::default().bg(BG_PRIMARY)),
            area,
        );

        // Header, view, bottom bar (single line)
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

        render_header(frame, layout[0], self.active_tab);

        let view_area = layout[1].inner(Margin {
            horizontal: 1,
            vertical: 0,
        });
        self.view.render(frame, view_area);

        render_footer(frame, layout[2], self.view.focus());
    }
}
