//! Owned application state.
//!
//! Everything mutable in the controller lives here and is passed by reference
//! into the operations that need it; there are no ambient globals. The two UI
//! flags vary independently of each other and of the reading window: every
//! combination of page and button state is valid.

use crate::pages::Page;
use crate::readings::ReadingSeries;

/// The full mutable state of the display controller.
pub struct AppState {
    /// Rolling force window plus the time counter.
    pub series: ReadingSeries,

    /// Currently displayed page.
    pub page: Page,

    /// On/off state of the header button, echoed over serial on toggle.
    pub button_on: bool,
}

impl AppState {
    /// Boot state: zeroed series, graph page, button off.
    pub const fn new() -> Self {
        Self {
            series: ReadingSeries::new(),
            page: Page::Graph,
            button_on: false,
        }
    }
}

impl Default for AppState {
    fn default() -> Self { Self::new() }
}
