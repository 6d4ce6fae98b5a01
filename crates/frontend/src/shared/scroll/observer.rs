use leptos::html::Section;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition,
};

use super::spy::{IntersectionSample, ScrollSpy, TieBreak, SPY_THRESHOLD};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Live IntersectionObserver; disconnects every observed element on drop.
struct ObserverGuard {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Drop for ObserverGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Handle to a page's scroll-spy.
#[derive(Clone, Copy)]
pub struct ScrollSpyController {
    state: RwSignal<ScrollSpy>,
    refs: StoredValue<Vec<(String, NodeRef<Section>)>>,
}

impl ScrollSpyController {
    pub fn active(&self) -> Option<String> {
        self.state.with(|s| s.active().map(str::to_string))
    }

    pub fn is_active(&self, section_id: &str) -> bool {
        self.state.with(|s| s.is_active(section_id))
    }

    pub fn sections(&self) -> Vec<String> {
        self.state.with_untracked(|s| s.sections().to_vec())
    }

    /// Smooth-scroll the section into view. The active id is left to the
    /// observer, which reports the section once it actually arrives.
    pub fn scroll_to_section(&self, section_id: &str) {
        let element = self.refs.with_value(|refs| {
            refs.iter()
                .find(|(id, _)| id == section_id)
                .and_then(|(_, node)| node.get_untracked())
        });
        let Some(element) = element else {
            log::debug!("scroll_to_section: '{}' is not mounted", section_id);
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Hook: track which of `sections` is in view.
///
/// Each section element must carry its section id as its `id` attribute;
/// observer entries are matched back to sections through it. The observer is
/// disconnected when the calling component is cleaned up.
pub fn use_scroll_spy(
    sections: Vec<(String, NodeRef<Section>)>,
    tie_break: TieBreak,
) -> ScrollSpyController {
    let ids = sections.iter().map(|(id, _)| id.clone()).collect();
    let controller = ScrollSpyController {
        state: RwSignal::new(ScrollSpy::new(ids, tie_break)),
        refs: StoredValue::new(sections),
    };
    let guard = StoredValue::new_local(None::<ObserverGuard>);

    Effect::new(move |_| {
        let mounted: Vec<_> = controller
            .refs
            .with_value(|refs| refs.iter().filter_map(|(_, node)| node.get()).collect());
        if mounted.is_empty() {
            return;
        }

        let state = controller.state;
        let callback: ObserverCallback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let batch: Vec<IntersectionSample> = entries
                    .iter()
                    .filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|e| IntersectionSample::new(e.target().id(), e.is_intersecting()))
                    .collect();
                state.maybe_update(|spy| spy.apply_batch(&batch));
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(SPY_THRESHOLD));
        let observer =
            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            {
                Ok(observer) => observer,
                Err(e) => {
                    log::warn!("scroll-spy: IntersectionObserver unavailable: {:?}", e);
                    return;
                }
            };
        for element in &mounted {
            observer.observe(element);
        }
        // Replacing the guard disconnects the previous observer, if any.
        guard.set_value(Some(ObserverGuard {
            observer,
            _callback: callback,
        }));
    });

    on_cleanup(move || {
        let _ = guard.try_update_value(|g| g.take());
    });

    controller
}
