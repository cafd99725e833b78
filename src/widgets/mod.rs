//! Draw functions for the header and the two pages.
//!
//! Everything here is a pure read-and-draw pass: the functions take the data
//! they render by reference, hold no state, and are generic over any
//! `DrawTarget<Color = Rgb565>`. Draw errors are ignored with `.ok()` - a
//! failed pixel write is not worth halting the display over.

pub mod graph;
pub mod header;
pub mod table;

pub use graph::draw_graph_page;
pub use header::{draw_blink_indicator, draw_button, draw_header};
pub use table::draw_table_page;
