//! Generic catalog view: fetch once on mount, then filter, search, select
//! and expand cards locally.

use std::collections::HashSet;
use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{prelude::*, widgets::Paragraph};
use tokio::sync::oneshot::{self, error::TryRecvError};
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use super::{CatalogScreen, KeyOutcome};
use crate::catalog::{filter_indices, CatalogDef, Selection};
use crate::error::FetchError;
use crate::models::{Focus, Record, Tab};
use crate::store::CatalogSource;
use crate::theme::{TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::ui::{
    chip_lines, render_cards, render_empty, render_loading, render_search_bar, scroll_for_selection, CardContent,
    CARD_CHROME_HEIGHT, CARD_CHROME_WIDTH, SEARCH_BAR_HEIGHT,
};

const PAGE_STEP: isize = 5;

/// In-flight fetch owned by a view. Dropping it aborts the task, and the
/// receiver goes with it, so a late reply has nowhere to land.
struct PendingFetch<R> {
    receiver: oneshot::Receiver<Result<Vec<R>, FetchError>>,
    task: JoinHandle<()>,
}

impl<R> Drop for PendingFetch<R> {
    fn drop(&mut self) {
        self.task.abort();
    }
}

pub struct CatalogView<R: 'static> {
    def: &'static CatalogDef<R>,
    loading: bool,
    records: Vec<R>,
    /// Indices into `records` that pass the current filters
    visible: Vec<usize>,
    query: String,
    /// One per dimension of `def`
    selections: Vec<Selection>,
    /// Ids of expanded cards
    expanded: HashSet<String>,
    /// Position in `visible`
    selected: usize,
    /// First card drawn
    scroll: usize,
    focus: Focus,
    /// Dimension that `←`/`→` act on
    chip_focus: usize,
    pending: Option<PendingFetch<R>>,
    tick: u64,
}

impl<R: CardContent + Send + 'static> CatalogView<R> {
    /// Create the view and start its single fetch. Must be called from
    /// within a tokio runtime.
    pub fn mount(def: &'static CatalogDef<R>, source: Arc<dyn CatalogSource>) -> Self {
        let (sender, receiver) = oneshot::channel();
        let fetch = (def.fetch)(source);
        let task = tokio::spawn(async move {
            // Err only when the view is already gone
            let _ = sender.send(fetch.await);
        });

        info!(catalog = def.tab.id(), "mounted catalog view");

        Self {
            def,
            loading: true,
            records: Vec::new(),
            visible: Vec::new(),
            query: String::new(),
            selections: vec![Selection::All; def.dimensions.len()],
            expanded: HashSet::new(),
            selected: 0,
            scroll: 0,
            focus: Focus::List,
            chip_focus: 0,
            pending: Some(PendingFetch { receiver, task }),
            tick: 0,
        }
    }

    /// Every fetched row, in backend order
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Rows passing the current filters, in backend order
    pub fn visible_records(&self) -> Vec<&R> {
        self.visible.iter().map(|&i| &self.records[i]).collect()
    }

    pub fn selected_record(&self) -> Option<&R> {
        self.visible.get(self.selected).map(|&i| &self.records[i])
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selection(&self, dimension: usize) -> Option<&Selection> {
        self.selections.get(dimension)
    }

    pub fn chip_focus(&self) -> usize {
        self.chip_focus
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    fn finish_fetch(&mut self, result: Result<Vec<R>, FetchError>) {
        let catalog = self.def.tab.id();
        match result {
            Ok(rows) => {
                info!(catalog, rows = rows.len(), "catalog loaded");
                self.records = rows;
            }
            Err(err) => {
                // The user only sees the empty state
                error!(catalog, error = %err, "failed to fetch catalog");
                self.records.clear();
            }
        }
        self.loading = false;
        self.refilter();
    }

    fn refilter(&mut self) {
        self.visible = filter_indices(&self.records, self.def, &self.selections, &self.query);
        self.selected = self.selected.min(self.visible.len().saturating_sub(1));
        self.scroll = self.scroll.min(self.selected);
    }

    // ------------------------------------------------------------------
    // Search
    // ------------------------------------------------------------------

    /// Replace the search string
    pub fn set_query(&mut self, value: impl Into<String>) {
        self.query = value.into();
        debug!(catalog = self.def.tab.id(), query = %self.query, "search changed");
        self.refilter();
    }

    fn push_query_char(&mut self, c: char) {
        let mut value = self.query.clone();
        value.push(c);
        self.set_query(value);
    }

    fn pop_query_char(&mut self) {
        let mut value = self.query.clone();
        value.pop();
        self.set_query(value);
    }

    // ------------------------------------------------------------------
    // Filter chips
    // ------------------------------------------------------------------

    /// Make `value` the active chip of `dimension`
    pub fn select_chip(&mut self, dimension: usize, value: &str) {
        let Some(slot) = self.selections.get_mut(dimension) else {
            return;
        };
        *slot = Selection::from_value(value);
        debug!(catalog = self.def.tab.id(), dimension, value, "filter changed");
        self.refilter();
    }

    /// Move the active chip of the focused dimension, stopping at the ends
    pub fn shift_chip(&mut self, delta: isize) {
        let Some(dimension) = self.def.dimensions.get(self.chip_focus) else {
            return;
        };
        let current = dimension
            .chip_index(&self.selections[self.chip_focus])
            .unwrap_or(0);
        let target = current
            .saturating_add_signed(delta)
            .min(dimension.chip_count() - 1);
        if let Some(value) = dimension.chip_at(target) {
            self.select_chip(self.chip_focus, value);
        }
    }

    pub fn next_dimension(&mut self) {
        if !self.def.dimensions.is_empty() {
            self.chip_focus = (self.chip_focus + 1) % self.def.dimensions.len();
        }
    }

    /// Every dimension back to "all"
    pub fn reset_filters(&mut self) {
        self.selections.fill(Selection::All);
        self.refilter();
    }

    // ------------------------------------------------------------------
    // Cards
    // ------------------------------------------------------------------

    pub fn toggle_card(&mut self, id: &str) {
        if !self.expanded.remove(id) {
            self.expanded.insert(id.to_string());
        }
    }

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_record().map(|record| record.id().to_string()) {
            self.toggle_card(&id);
        }
    }

    /// Expand every card currently visible
    pub fn expand_all(&mut self) {
        for &i in &self.visible {
            self.expanded.insert(self.records[i].id().to_string());
        }
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    pub fn move_selection(&mut self, delta: isize) {
        let last = self.visible.len().saturating_sub(1);
        self.selected = self.selected.saturating_add_signed(delta).min(last);
    }

    // ------------------------------------------------------------------
    // Keys
    // ------------------------------------------------------------------

    fn handle_search_key(&mut self, key: KeyEvent) -> KeyOutcome {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.focus = Focus::List,
            KeyCode::Backspace => self.pop_query_char(),
            KeyCode::Char('u') if ctrl => self.set_query(""),
            KeyCode::Char(c) if !ctrl => self.push_query_char(c),
            _ => return KeyOutcome::Ignored,
        }
        KeyOutcome::Handled
    }

    fn handle_list_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return KeyOutcome::Ignored;
        }
        match key.code {
            KeyCode::Char('/') => self.focus = Focus::Search,
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::PageDown => self.move_selection(PAGE_STEP),
            KeyCode::PageUp => self.move_selection(-PAGE_STEP),
            KeyCode::Home | KeyCode::Char('g') => self.selected = 0,
            KeyCode::End | KeyCode::Char('G') => self.selected = self.visible.len().saturating_sub(1),
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_selected(),
            KeyCode::Char('e') => self.expand_all(),
            KeyCode::Char('c') => self.collapse_all(),
            KeyCode::Left | KeyCode::Char('h') => self.shift_chip(-1),
            KeyCode::Right | KeyCode::Char('l') => self.shift_chip(1),
            KeyCode::Char('f') => self.next_dimension(),
            KeyCode::Char('a') => self.reset_filters(),
            _ => return KeyOutcome::Ignored,
        }
        KeyOutcome::Handled
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    fn render_heading(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(vec![
                Span::styled(
                    self.def.heading,
                    Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {} of {}", self.visible.len(), self.records.len()),
                    Style::default().fg(TEXT_MUTED),
                ),
            ]),
            Line::from(Span::styled(self.def.subtitle, Style::default().fg(TEXT_SECONDARY))),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_list(&mut self, frame: &mut Frame, area: Rect) {
        if self.visible.is_empty() {
            render_empty(frame, area, self.def.empty_message);
            return;
        }

        let width = area.width.saturating_sub(CARD_CHROME_WIDTH) as usize;
        let mut cards: Vec<(Vec<Line<'static>>, bool)> = self
            .visible
            .iter()
            .enumerate()
            .map(|(position, &i)| {
                let record = &self.records[i];
                let lines = record.card_lines(self.expanded.contains(record.id()), width);
                (lines, position == self.selected)
            })
            .collect();
        let heights: Vec<usize> = cards
            .iter()
            .map(|(lines, _)| lines.len() + CARD_CHROME_HEIGHT)
            .collect();

        self.scroll = scroll_for_selection(&heights, self.selected, self.scroll, area.height as usize);
        render_cards(frame, area, cards.split_off(self.scroll));
    }
}

impl<R: CardContent + Send + 'static> CatalogScreen for CatalogView<R> {
    fn tab(&self) -> Tab {
        self.def.tab
    }

    fn focus(&self) -> Focus {
        self.focus
    }

    fn is_loading(&self) -> bool {
        self.loading
    }

    fn poll(&mut self) -> bool {
        self.tick = self.tick.wrapping_add(1);

        let Some(pending) = self.pending.as_mut() else {
            return false;
        };
        let result = match pending.receiver.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Closed) => Err(FetchError::Network("fetch task ended without a reply".to_string())),
        };
        self.pending = None;
        self.finish_fetch(result);
        true
    }

    fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if self.loading {
            return KeyOutcome::Ignored;
        }
        match self.focus {
            Focus::Search => self.handle_search_key(key),
            Focus::List => self.handle_list_key(key),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.loading {
            render_loading(frame, area, self.tick);
            return;
        }

        let chip_width = area.width as usize;
        let show_chip_focus = self.def.dimensions.len() > 1;
        let chip_rows: Vec<Line<'static>> = self
            .def
            .dimensions
            .iter()
            .zip(&self.selections)
            .enumerate()
            .flat_map(|(i, (dimension, selection))| {
                chip_lines(dimension, selection, show_chip_focus && i == self.chip_focus, chip_width)
            })
            .collect();

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),                       // Heading + subtitle
                Constraint::Length(1),                       // Spacer
                Constraint::Length(SEARCH_BAR_HEIGHT),       // Search
                Constraint::Length(chip_rows.len() as u16), // Chips
                Constraint::Length(1),                       // Spacer
                Constraint::Min(0),                          // Cards
            ])
            .split(area);

        self.render_heading(frame, layout[0]);
        render_search_bar(
            frame,
            layout[2],
            &self.query,
            self.def.search_placeholder,
            self.focus == Focus::Search,
        );
        frame.render_widget(Paragraph::new(chip_rows), layout[3]);
        self.render_list(frame, layout[5]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{PROCESSES, REGULATORY, TROUBLESHOOTING};
    use crate::models::{DevelopmentProcess, RegulatoryResource, TroubleshootingGuide};
    use crate::store::TableQuery;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicBool, Ordering};

    struct JsonSource(Value);

    #[async_trait]
    impl CatalogSource for JsonSource {
        async fn select_all(&self, _query: TableQuery) -> Result<Value, FetchError> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl CatalogSource for FailingSource {
        async fn select_all(&self, _query: TableQuery) -> Result<Value, FetchError> {
            Err(FetchError::Backend {
                status: 401,
                message: "Invalid API key".to_string(),
            })
        }
    }

    /// Never replies; flags when its request future is dropped
    struct StalledSource {
        cancelled: Arc<AtomicBool>,
    }

    struct CancelFlag(Arc<AtomicBool>);

    impl Drop for CancelFlag {
        fn drop(&mut self) {
            self.0.store(true, Ordering::SeqCst);
        }
    }

    #[async_trait]
    impl CatalogSource for StalledSource {
        async fn select_all(&self, _query: TableQuery) -> Result<Value, FetchError> {
            let _flag = CancelFlag(self.cancelled.clone());
            std::future::pending().await
        }
    }

    fn processes() -> Value {
        json!([
            {
                "id": "p-1",
                "title": "Solubility Screening",
                "phase": "Pre-formulation",
                "description": "Characterise API solubility across the physiological pH range",
                "steps": [{"step": "Prepare buffers", "details": "pH 1.2 to 6.8"}],
                "timeline": "2-4 weeks",
                "key_considerations": null
            },
            {
                "id": "p-2",
                "title": "Pilot BE Study",
                "phase": "Clinical Development",
                "description": "Small crossover study before the pivotal trial",
                "steps": [],
                "timeline": "3 months"
            }
        ])
    }

    fn resources() -> Value {
        json!([
            {"id": 1, "title": "Dissolution Testing", "region": "FDA", "document_type": "Guidance",
             "summary": "Immediate release dosage forms", "key_points": ["Use USP apparatus"]},
            {"id": 2, "title": "Bioequivalence", "region": "EMA", "document_type": "Guideline",
             "summary": "Investigation of bioequivalence", "key_points": []},
            {"id": 3, "title": "Product-Specific Guidances", "region": "FDA", "document_type": "Policy",
             "summary": "Recommendations per product", "key_points": null}
        ])
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    async fn settle<R: CardContent + Send + 'static>(view: &mut CatalogView<R>) {
        for _ in 0..100 {
            if view.poll() {
                return;
            }
            tokio::task::yield_now().await;
        }
        panic!("fetch never completed");
    }

    async fn mounted_processes() -> CatalogView<DevelopmentProcess> {
        let mut view = CatalogView::mount(&PROCESSES, Arc::new(JsonSource(processes())));
        settle(&mut view).await;
        view
    }

    fn visible_ids<R: CardContent + Send + 'static>(view: &CatalogView<R>) -> Vec<String> {
        view.visible_records().iter().map(|r| r.id().to_string()).collect()
    }

    #[tokio::test]
    async fn test_loads_rows_after_mount() {
        let mut view = CatalogView::mount(&PROCESSES, Arc::new(JsonSource(processes())));
        assert!(view.is_loading());
        assert_eq!(view.handle_key(key(KeyCode::Char('j'))), KeyOutcome::Ignored);

        settle(&mut view).await;
        assert!(!view.is_loading());
        assert_eq!(view.records().len(), 2);
        assert_eq!(visible_ids(&view), vec!["p-1", "p-2"]);
    }

    #[tokio::test]
    async fn test_null_body_is_empty_catalog() {
        let mut view = CatalogView::mount(&TROUBLESHOOTING, Arc::new(JsonSource(Value::Null)));
        settle(&mut view).await;
        assert!(!view.is_loading());
        assert!(view.records().is_empty());
    }

    #[tokio::test]
    async fn test_failed_fetch_leaves_empty_catalog() {
        let mut view = CatalogView::mount(&TROUBLESHOOTING, Arc::new(FailingSource));
        settle(&mut view).await;
        assert!(!view.is_loading());
        assert!(view.records().is_empty());
        assert!(view.visible_records().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_rows_leave_empty_catalog() {
        let body = json!({"message": "relation does not exist"});
        let mut view = CatalogView::mount(&PROCESSES, Arc::new(JsonSource(body)));
        settle(&mut view).await;
        assert!(!view.is_loading());
        assert!(view.records().is_empty());
    }

    #[tokio::test]
    async fn test_dropping_view_cancels_fetch() {
        let cancelled = Arc::new(AtomicBool::new(false));
        let source = StalledSource {
            cancelled: cancelled.clone(),
        };
        let view = CatalogView::mount(&REGULATORY, Arc::new(source));

        // Let the fetch reach the backend call
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
        assert!(!cancelled.load(Ordering::SeqCst));

        drop(view);
        for _ in 0..100 {
            if cancelled.load(Ordering::SeqCst) {
                return;
            }
            tokio::task::yield_now().await;
        }
        panic!("fetch was not cancelled");
    }

    #[tokio::test]
    async fn test_phase_chip_scenario() {
        let mut view = mounted_processes().await;

        view.select_chip(0, "Clinical Development");
        assert_eq!(visible_ids(&view), vec!["p-2"]);

        view.select_chip(0, "all");
        assert_eq!(visible_ids(&view), vec!["p-1", "p-2"]);
    }

    #[tokio::test]
    async fn test_chip_keys_stop_at_ends() {
        let mut view = mounted_processes().await;

        view.handle_key(key(KeyCode::Left));
        assert_eq!(view.selection(0), Some(&Selection::All));

        view.handle_key(key(KeyCode::Right));
        assert_eq!(view.selection(0), Some(&Selection::Only("Pre-formulation".to_string())));
        assert_eq!(visible_ids(&view), vec!["p-1"]);

        for _ in 0..10 {
            view.handle_key(key(KeyCode::Char('l')));
        }
        assert_eq!(
            view.selection(0),
            Some(&Selection::Only("Scale-up & Tech Transfer".to_string()))
        );
        assert!(view.visible_records().is_empty());

        view.handle_key(key(KeyCode::Char('a')));
        assert_eq!(view.selection(0), Some(&Selection::All));
        assert_eq!(view.visible_records().len(), 2);
    }

    #[tokio::test]
    async fn test_two_dimensions_compose() {
        let mut view = CatalogView::mount(&REGULATORY, Arc::new(JsonSource(resources())));
        settle(&mut view).await;

        // Region: FDA
        view.handle_key(key(KeyCode::Right));
        assert_eq!(visible_ids(&view), vec!["1", "3"]);

        // Document type: Guidance
        view.handle_key(key(KeyCode::Char('f')));
        assert_eq!(view.chip_focus(), 1);
        view.handle_key(key(KeyCode::Right));
        assert_eq!(visible_ids(&view), vec!["1"]);

        view.handle_key(key(KeyCode::Char('f')));
        assert_eq!(view.chip_focus(), 0);

        view.reset_filters();
        assert_eq!(visible_ids(&view), vec!["1", "2", "3"]);
    }

    #[tokio::test]
    async fn test_search_keys() {
        let mut view = mounted_processes().await;

        assert_eq!(view.handle_key(key(KeyCode::Char('/'))), KeyOutcome::Handled);
        assert_eq!(view.focus(), Focus::Search);

        for c in "PILOT".chars() {
            view.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(view.query(), "PILOT");
        assert_eq!(visible_ids(&view), vec!["p-2"]);

        // 'q' is text while searching
        assert_eq!(view.handle_key(key(KeyCode::Char('q'))), KeyOutcome::Handled);
        assert!(view.visible_records().is_empty());

        view.handle_key(key(KeyCode::Backspace));
        assert_eq!(view.query(), "PILOT");

        view.handle_key(ctrl('u'));
        assert_eq!(view.query(), "");
        assert_eq!(view.visible_records().len(), 2);

        assert_eq!(view.handle_key(ctrl('c')), KeyOutcome::Ignored);

        view.handle_key(key(KeyCode::Esc));
        assert_eq!(view.focus(), Focus::List);
        assert_eq!(view.handle_key(key(KeyCode::Char('q'))), KeyOutcome::Ignored);
    }

    #[tokio::test]
    async fn test_search_matches_phase_field() {
        let mut view = mounted_processes().await;
        view.set_query("pre-form");
        assert_eq!(visible_ids(&view), vec!["p-1"]);
    }

    #[tokio::test]
    async fn test_cards_expand_independently() {
        let mut view = mounted_processes().await;
        assert!(!view.is_expanded("p-1"));

        view.handle_key(key(KeyCode::Enter));
        assert!(view.is_expanded("p-1"));
        assert!(!view.is_expanded("p-2"));

        view.handle_key(key(KeyCode::Down));
        view.handle_key(key(KeyCode::Char(' ')));
        assert!(view.is_expanded("p-1"));
        assert!(view.is_expanded("p-2"));

        view.toggle_card("p-1");
        assert!(!view.is_expanded("p-1"));

        view.handle_key(key(KeyCode::Char('c')));
        assert!(!view.is_expanded("p-2"));

        view.handle_key(key(KeyCode::Char('e')));
        assert!(view.is_expanded("p-1"));
        assert!(view.is_expanded("p-2"));
    }

    #[tokio::test]
    async fn test_toggle_twice_restores_card() {
        let mut view = mounted_processes().await;
        let record = view.records()[0].clone();
        let before = record.card_lines(false, 60);

        view.toggle_card("p-1");
        let expanded = record.card_lines(view.is_expanded("p-1"), 60);
        assert_ne!(expanded, before);

        view.toggle_card("p-1");
        assert_eq!(record.card_lines(view.is_expanded("p-1"), 60), before);
    }

    #[tokio::test]
    async fn test_selection_clamped_when_subset_shrinks() {
        let mut view = mounted_processes().await;
        view.handle_key(key(KeyCode::End));
        assert_eq!(view.selected(), 1);

        view.select_chip(0, "Pre-formulation");
        assert_eq!(view.selected(), 0);
        assert_eq!(view.selected_record().map(|r| r.id.as_str()), Some("p-1"));

        view.select_chip(0, "Scale-up & Tech Transfer");
        assert_eq!(view.selected(), 0);
        assert!(view.selected_record().is_none());
        // Nothing to toggle
        view.handle_key(key(KeyCode::Enter));
        assert!(view.visible_records().is_empty());
    }

    #[tokio::test]
    async fn test_selection_moves_within_bounds() {
        let mut view = mounted_processes().await;
        view.handle_key(key(KeyCode::Up));
        assert_eq!(view.selected(), 0);
        view.handle_key(key(KeyCode::PageDown));
        assert_eq!(view.selected(), 1);
        view.handle_key(key(KeyCode::Char('g')));
        assert_eq!(view.selected(), 0);
    }

    #[tokio::test]
    async fn test_guides_keep_backend_order() {
        let body = json!([
            {"id": "t-2", "title": "Capping", "category": "Processing", "problem_description": "Tablets split"},
            {"id": "t-1", "title": "Slow release", "category": "Dissolution", "problem_description": "Low Q value"}
        ]);
        let mut view: CatalogView<TroubleshootingGuide> =
            CatalogView::mount(&TROUBLESHOOTING, Arc::new(JsonSource(body)));
        settle(&mut view).await;
        assert_eq!(visible_ids(&view), vec!["t-2", "t-1"]);
        assert_eq!(view.tab(), Tab::Troubleshooting);
    }

    #[tokio::test]
    async fn test_unknown_region_still_listed() {
        let body = json!([
            {"id": "r-9", "title": "PMDA note", "region": "PMDA", "document_type": "Memo", "summary": "s"}
        ]);
        let mut view: CatalogView<RegulatoryResource> = CatalogView::mount(&REGULATORY, Arc::new(JsonSource(body)));
        settle(&mut view).await;
        assert_eq!(visible_ids(&view), vec!["r-9"]);

        view.select_chip(0, "FDA");
        assert!(view.visible_records().is_empty());
    }
}
