/// Slack at the right edge that absorbs sub-pixel rounding of scroll positions.
pub const EDGE_TOLERANCE_PX: f64 = 1.0;

/// Live geometry of a horizontally scrollable container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_left: f64,
    pub scroll_width: f64,
    pub client_width: f64,
}

/// Whether the prev/next controls have somewhere to go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollEdges {
    pub can_scroll_left: bool,
    pub can_scroll_right: bool,
}

impl ScrollEdges {
    /// Value before the first measurement. Replaced as soon as the container
    /// is mounted and measured.
    pub const INITIAL: ScrollEdges = ScrollEdges {
        can_scroll_left: false,
        can_scroll_right: true,
    };

    pub fn measure(metrics: ScrollMetrics) -> Self {
        let max_scroll = metrics.scroll_width - metrics.client_width;
        Self {
            can_scroll_left: metrics.scroll_left > 0.0,
            can_scroll_right: metrics.scroll_left < max_scroll - EDGE_TOLERANCE_PX,
        }
    }
}

impl Default for ScrollEdges {
    fn default() -> Self {
        Self::INITIAL
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Left,
    Right,
}

/// Horizontal distance for one page in `direction`.
pub fn page_offset(direction: ScrollDirection, client_width: f64) -> f64 {
    match direction {
        ScrollDirection::Left => -client_width,
        ScrollDirection::Right => client_width,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(scroll_left: f64, scroll_width: f64, client_width: f64) -> ScrollMetrics {
        ScrollMetrics {
            scroll_left,
            scroll_width,
            client_width,
        }
    }

    #[test]
    fn test_edges_across_positions() {
        assert_eq!(
            ScrollEdges::measure(metrics(0.0, 1000.0, 400.0)),
            ScrollEdges { can_scroll_left: false, can_scroll_right: true }
        );
        assert_eq!(
            ScrollEdges::measure(metrics(300.0, 1000.0, 400.0)),
            ScrollEdges { can_scroll_left: true, can_scroll_right: true }
        );
        assert_eq!(
            ScrollEdges::measure(metrics(600.0, 1000.0, 400.0)),
            ScrollEdges { can_scroll_left: true, can_scroll_right: false }
        );
    }

    #[test]
    fn test_subpixel_right_edge() {
        let edges = ScrollEdges::measure(metrics(599.4, 1000.0, 400.0));
        assert!(!edges.can_scroll_right);
        let edges = ScrollEdges::measure(metrics(598.5, 1000.0, 400.0));
        assert!(edges.can_scroll_right);
    }

    #[test]
    fn test_no_overflow_overrides_initial_default() {
        assert!(ScrollEdges::INITIAL.can_scroll_right);
        let edges = ScrollEdges::measure(metrics(0.0, 400.0, 400.0));
        assert_eq!(
            edges,
            ScrollEdges { can_scroll_left: false, can_scroll_right: false }
        );
        let narrow = ScrollEdges::measure(metrics(0.0, 300.0, 400.0));
        assert!(!narrow.can_scroll_right);
    }

    #[test]
    fn test_measure_is_idempotent() {
        let m = metrics(300.0, 1000.0, 400.0);
        assert_eq!(ScrollEdges::measure(m), ScrollEdges::measure(m));
    }

    #[test]
    fn test_page_offset() {
        assert_eq!(page_offset(ScrollDirection::Left, 400.0), -400.0);
        assert_eq!(page_offset(ScrollDirection::Right, 400.0), 400.0);
    }
}
