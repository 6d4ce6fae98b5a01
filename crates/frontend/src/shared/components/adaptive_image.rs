//! AdaptiveImage: image cropped around a focal point, with load/error states.
//!
//! # Example
//! ```rust,ignore
//! <AdaptiveImage
//!     src=card.image_url.clone()
//!     alt=card.image_alt.clone()
//!     focal_point=FocalPoint::new(0.5, 0.3)
//!     fallback_src=config.fallback_image_url.clone()
//! />
//! ```

use contracts::domain::common::FocalPointDto;
use leptos::prelude::*;

/// Position used when smart cropping is off and the caller gives none.
pub const DEFAULT_OBJECT_POSITION: &str = "center";

/// Visually important point of an image, both axes normalised to 0–1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocalPoint {
    pub x: f64,
    pub y: f64,
}

impl FocalPoint {
    pub const CENTER: FocalPoint = FocalPoint { x: 0.5, y: 0.5 };

    /// Out-of-range and NaN coordinates are pulled into 0–1 (NaN → 0.5).
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: normalise(x),
            y: normalise(y),
        }
    }

    /// CSS `object-position` value, e.g. `"50% 30%"`.
    pub fn object_position(&self) -> String {
        format!("{}% {}%", percent(self.x), percent(self.y))
    }
}

impl From<FocalPointDto> for FocalPoint {
    fn from(dto: FocalPointDto) -> Self {
        Self::new(dto.x, dto.y)
    }
}

impl Default for FocalPoint {
    fn default() -> Self {
        Self::CENTER
    }
}

fn normalise(v: f64) -> f64 {
    if v.is_nan() {
        0.5
    } else {
        v.clamp(0.0, 1.0)
    }
}

fn percent(v: f64) -> f64 {
    // Keep "33.3%" instead of "33.300000000000004%".
    (v * 1000.0).round() / 10.0
}

/// `object-position` for the rendered image.
pub fn object_position(smart_crop: bool, focal_point: FocalPoint, literal: Option<&str>) -> String {
    if smart_crop {
        focal_point.object_position()
    } else {
        literal
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .unwrap_or(DEFAULT_OBJECT_POSITION)
            .to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Loaded,
    Errored,
}

/// Load state of one image source.
///
/// One attempt per `src`: `Loaded` and `Errored` are final until the source
/// changes.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageLoad {
    src: String,
    phase: LoadPhase,
}

impl ImageLoad {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            phase: LoadPhase::Loading,
        }
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn on_load(&mut self) {
        if self.phase == LoadPhase::Loading {
            self.phase = LoadPhase::Loaded;
        }
    }

    pub fn on_error(&mut self) {
        self.phase = LoadPhase::Errored;
    }

    /// Switch to `src`; a different source starts over in `Loading`.
    pub fn reset_for(&mut self, src: &str) {
        if self.src != src {
            self.src = src.to_string();
            self.phase = LoadPhase::Loading;
        }
    }

    /// URL to put in the `src` attribute.
    pub fn rendered_src(&self, fallback: Option<&str>) -> String {
        match (self.phase, fallback.filter(|f| !f.is_empty())) {
            (LoadPhase::Errored, Some(fallback)) => fallback.to_string(),
            _ => self.src.clone(),
        }
    }

    /// The image element stays transparent until the picture is there.
    /// A failed load is shown too so the alt text stays visible.
    pub fn is_visible(&self) -> bool {
        self.phase != LoadPhase::Loading
    }
}

/// Image rendered with focal-point cropping and graceful failure.
#[component]
pub fn AdaptiveImage(
    #[prop(into)] src: Signal<String>,
    #[prop(optional, into)] alt: String,
    /// Point to keep in frame when the image is cropped (default: center).
    #[prop(optional)]
    focal_point: Option<FocalPoint>,
    /// Used instead of `src` once loading `src` failed.
    #[prop(optional, into)]
    fallback_src: Option<String>,
    #[prop(default = true)] smart_crop: bool,
    /// CSS position used when `smart_crop` is off.
    #[prop(optional, into)]
    object_position: Option<String>,
    /// Solid block under the image while it loads.
    #[prop(default = true)]
    show_placeholder: bool,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let state = RwSignal::new(ImageLoad::new(src.get_untracked()));

    Effect::new(move |_| {
        let current = src.get();
        state.maybe_update(|s| {
            let changed = s.src() != current;
            s.reset_for(&current);
            changed
        });
    });

    let position = self::object_position(
        smart_crop,
        focal_point.unwrap_or_default(),
        object_position.as_deref(),
    );
    let fallback = StoredValue::new(fallback_src);

    let rendered_src =
        move || fallback.with_value(|f| state.with(|s| s.rendered_src(f.as_deref())));
    let style = move || {
        let opacity = if state.with(|s| s.is_visible()) { 1 } else { 0 };
        format!(
            "object-fit: cover; object-position: {}; opacity: {}; transition: opacity 0.4s ease-out;",
            position, opacity
        )
    };
    let on_error = move |_| {
        state.update(|s| {
            if s.phase() != LoadPhase::Errored {
                log::debug!("image failed to load: {}", s.src());
            }
            s.on_error();
        });
    };

    view! {
        <div class=format!("adaptive-image {}", class)>
            <Show when=move || show_placeholder && state.with(|s| s.phase() == LoadPhase::Loading)>
                <div class="adaptive-image__placeholder" aria-hidden="true"></div>
            </Show>
            <img
                class="adaptive-image__img"
                src=rendered_src
                alt=alt
                loading="lazy"
                style=style
                on:load=move |_| state.update(|s| s.on_load())
                on:error=on_error
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focal_point_position() {
        assert_eq!(FocalPoint::default().object_position(), "50% 50%");
        assert_eq!(FocalPoint::new(0.25, 0.8).object_position(), "25% 80%");
        assert_eq!(FocalPoint::new(1.0 / 3.0, 0.0).object_position(), "33.3% 0%");
        assert_eq!(FocalPoint::new(-1.0, 7.0), FocalPoint { x: 0.0, y: 1.0 });
        assert_eq!(FocalPoint::new(f64::NAN, 0.2).x, 0.5);
        assert_eq!(
            FocalPoint::from(FocalPointDto { x: 1.4, y: 0.25 }).object_position(),
            "100% 25%"
        );
    }

    #[test]
    fn test_object_position_modes() {
        let focal = FocalPoint::new(0.2, 0.4);
        assert_eq!(object_position(true, focal, Some("top")), "20% 40%");
        assert_eq!(object_position(false, focal, Some("top")), "top");
        assert_eq!(object_position(false, focal, None), DEFAULT_OBJECT_POSITION);
    }

    #[test]
    fn test_literal_object_position_prop() {
        let props = AdaptiveImageProps::builder()
            .src("dunes.jpg".to_string())
            .smart_crop(false)
            .object_position("top left")
            .build();
        assert_eq!(props.object_position.as_deref(), Some("top left"));
        assert_eq!(
            object_position(
                props.smart_crop,
                props.focal_point.unwrap_or_default(),
                props.object_position.as_deref()
            ),
            "top left"
        );
    }

    #[test]
    fn test_load_transitions() {
        let mut load = ImageLoad::new("a.jpg");
        assert_eq!(load.phase(), LoadPhase::Loading);
        assert!(!load.is_visible());

        load.on_load();
        assert_eq!(load.phase(), LoadPhase::Loaded);
        assert!(load.is_visible());

        load.on_error();
        assert_eq!(load.phase(), LoadPhase::Errored);

        // a late load event does not revive an errored source
        load.on_load();
        assert_eq!(load.phase(), LoadPhase::Errored);
    }

    #[test]
    fn test_fallback_only_when_errored() {
        let mut load = ImageLoad::new("broken.jpg");
        assert_eq!(load.rendered_src(Some("fallback.jpg")), "broken.jpg");

        load.on_error();
        assert_eq!(load.rendered_src(Some("fallback.jpg")), "fallback.jpg");
        assert_eq!(load.rendered_src(None), "broken.jpg");
        assert_eq!(load.rendered_src(Some("")), "broken.jpg");
    }

    #[test]
    fn test_src_change_resets() {
        let mut load = ImageLoad::new("a.jpg");
        load.on_error();
        load.reset_for("a.jpg");
        assert_eq!(load.phase(), LoadPhase::Errored);

        load.reset_for("b.jpg");
        assert_eq!(load.phase(), LoadPhase::Loading);
        assert_eq!(load.src(), "b.jpg");
    }
}
