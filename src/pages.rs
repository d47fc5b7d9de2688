//! Page navigation between the chart and the event log.
//!
//! Press `Tab` to toggle between pages.

/// Available pages in the visualizer window.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Page {
    /// Sliders, plot, legend and usage notes.
    #[default]
    Chart,

    /// Timestamped event log with the current threshold summary.
    Log,
}

impl Page {
    /// Toggle to the other page.
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Chart => Self::Log,
            Self::Log => Self::Chart,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Chart => "Chart",
            Self::Log => "Event log",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_default() {
        assert_eq!(Page::default(), Page::Chart);
    }

    #[test]
    fn test_page_toggle() {
        assert_eq!(Page::Chart.toggle(), Page::Log);
        assert_eq!(Page::Log.toggle(), Page::Chart);
    }

    #[test]
    fn test_page_toggle_cycle() {
        let page = Page::Chart.toggle().toggle();
        assert_eq!(page, Page::Chart);
    }
}
