//! Scroll-driven UI state: carousel edge flags and section scroll-spy.
//!
//! `edges` and `spy` are plain state machines; `carousel` and `observer` wire
//! them to DOM events and own the listeners for the lifetime of a component.

pub mod carousel;
pub mod edges;
pub mod listener;
pub mod observer;
pub mod spy;

pub use carousel::{use_carousel, CarouselController};
pub use edges::{page_offset, ScrollDirection, ScrollEdges, ScrollMetrics};
pub use observer::{use_scroll_spy, ScrollSpyController};
pub use spy::{IntersectionSample, ScrollSpy, TieBreak};
