//! UI module for GenericDev Hub
//!
//! Rendering functions for the header, the search and filter controls,
//! and the card list of each catalog.

mod cards;
mod controls;
mod header;
pub mod helpers;
mod list;

pub use cards::CardContent;
pub use controls::{chip_lines, render_search_bar, SEARCH_BAR_HEIGHT};
pub use header::{footer_hints, render_footer, render_header, HEADER_HEIGHT};
pub use helpers::wrap_text;
pub use list::{
    render_cards, render_empty, render_loading, scroll_for_selection, CARD_CHROME_HEIGHT, CARD_CHROME_WIDTH,
};
