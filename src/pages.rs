//! Page navigation for the two-view display.
//!
//! The display shows either the rolling line graph or the tabular history.
//! The header's nav arrow moves between them: forward (right) from the graph,
//! back (left) from the table.

/// Available pages.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Page {
    /// Line graph of the rolling force window with fixed 0-1500 mN axes.
    #[default]
    Graph,

    /// Table of the 10 windowed readings with their time labels.
    Table,
}

impl Page {
    /// Switch to the other page.
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Graph => Self::Table,
            Self::Table => Self::Graph,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_default() {
        assert_eq!(Page::default(), Page::Graph, "display boots on the graph page");
    }

    #[test]
    fn test_page_toggle() {
        assert_eq!(Page::Graph.toggle(), Page::Table);
        assert_eq!(Page::Table.toggle(), Page::Graph);
    }
}
