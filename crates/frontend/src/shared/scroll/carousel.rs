use leptos::html::Div;
use leptos::prelude::*;
use web_sys::{Element, ScrollBehavior, ScrollToOptions};

use super::edges::{page_offset, ScrollDirection, ScrollEdges, ScrollMetrics};
use super::listener::ListenerGuard;

/// Paging controls for one horizontally scrollable row.
#[derive(Clone, Copy)]
pub struct CarouselController {
    /// Attach to the scrolling container with `node_ref=`.
    pub container: NodeRef<Div>,
    pub edges: ReadSignal<ScrollEdges>,
    set_edges: WriteSignal<ScrollEdges>,
}

impl CarouselController {
    pub fn can_scroll_left(&self) -> bool {
        self.edges.get().can_scroll_left
    }

    pub fn can_scroll_right(&self) -> bool {
        self.edges.get().can_scroll_right
    }

    /// Re-read the container geometry and update the edge flags.
    ///
    /// A no-op once the owning component is gone, so it is safe to call from
    /// deferred tasks.
    pub fn check_scrollable(&self) {
        let Some(el) = self.container.try_get_untracked().flatten() else {
            return;
        };
        let edges = ScrollEdges::measure(read_metrics(&el));
        if self.edges.try_get_untracked() != Some(edges) {
            let _ = self.set_edges.try_set(edges);
        }
    }

    /// Smooth-scroll one viewport to the left. The flags follow from the
    /// resulting scroll events.
    pub fn scroll_left(&self) {
        self.scroll_page(ScrollDirection::Left);
    }

    /// Smooth-scroll one viewport to the right.
    pub fn scroll_right(&self) {
        self.scroll_page(ScrollDirection::Right);
    }

    fn scroll_page(&self, direction: ScrollDirection) {
        let Some(el) = self.container.get_untracked() else {
            return;
        };
        let options = ScrollToOptions::new();
        options.set_left(page_offset(direction, f64::from(el.client_width())));
        options.set_behavior(ScrollBehavior::Smooth);
        el.scroll_by_with_scroll_to_options(&options);
    }
}

fn read_metrics(el: &Element) -> ScrollMetrics {
    ScrollMetrics {
        scroll_left: f64::from(el.scroll_left()),
        scroll_width: f64::from(el.scroll_width()),
        client_width: f64::from(el.client_width()),
    }
}

/// Hook: edge tracking for a scroll container.
///
/// Measures once the container is mounted, then on every container `scroll`
/// and window `resize`. Both listeners are released when the calling
/// component is cleaned up.
pub fn use_carousel() -> CarouselController {
    let container = NodeRef::<Div>::new();
    let (edges, set_edges) = signal(ScrollEdges::INITIAL);
    let controller = CarouselController {
        container,
        edges,
        set_edges,
    };

    let listeners = StoredValue::new_local(Vec::<ListenerGuard>::new());

    Effect::new(move |_| {
        let Some(el) = container.get() else {
            return;
        };
        // The first measurement replaces INITIAL; a row that does not
        // overflow must not keep advertising a "next" page.
        controller.check_scrollable();

        let mut acquired = Vec::new();
        acquired.extend(ListenerGuard::listen(el.as_ref(), "scroll", move |_| {
            controller.check_scrollable()
        }));
        if let Some(window) = web_sys::window() {
            acquired.extend(ListenerGuard::listen(window.as_ref(), "resize", move |_| {
                controller.check_scrollable()
            }));
        }
        // Replacing the vector drops (and unregisters) any previous guards.
        listeners.set_value(acquired);
    });

    on_cleanup(move || {
        let _ = listeners.try_update_value(|guards| guards.clear());
    });

    controller
}
