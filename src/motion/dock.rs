//! Hero logo shrink-and-dock transition.
//!
//! On the landing page the oversized hero logo tracks vertical scroll:
//! over a fixed scroll window it translates and scales from the viewport
//! center into the header logo's slot, the header logo crossfades in late
//! and the slogan fades out early. Scroll events are coalesced to at most
//! one recomputation per animation frame.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::motion::ease::{lerp, smoothstep};
use crate::motion::prefs;

/// Pixels scrolled before the dock begins.
const START_OFFSET: f64 = 60.0;
/// Scroll span over which the dock completes.
const DISTANCE: f64 = 240.0;
/// Fine-tune of the dock point relative to the header logo center.
const DOCK_OFFSET_X: f64 = 0.0;
const DOCK_OFFSET_Y: f64 = -6.0;
/// Floor on the docked logo height.
const MIN_DOCK_HEIGHT: f64 = 36.0;
/// Dock point and size used when no header logo exists.
const FALLBACK_CORNER_X: f64 = 24.0;
const FALLBACK_CORNER_Y: f64 = 24.0;
const FALLBACK_HEIGHT: f64 = 40.0;
/// Progress window over which the header logo fades in.
const LOGO_FADE_START: f64 = 0.6;
const LOGO_FADE_END: f64 = 0.95;
/// Progress window over which the slogan fades out.
const SLOGAN_FADE_START: f64 = 0.25;
const SLOGAN_FADE_END: f64 = 0.6;

const HERO_ID: &str = "hero-logo";
const HERO_IMG_SELECTOR: &str = ".hero-img";
const HERO_SLOGAN_SELECTOR: &str = ".hero-slogan";
const HEADER_LOGO_SELECTOR: &str = ".site-header .brand .logo";
const HIDDEN_CLASS: &str = "hero-hidden";

/// Viewport dimensions in CSS pixels.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// On-screen box of the dock target, viewport coordinates.
#[derive(Debug, Clone, Copy)]
pub struct TargetBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// One computed animation frame.
#[derive(Debug, Clone, Copy)]
pub struct DockFrame {
    pub tx: f64,
    pub ty: f64,
    pub scale: f64,
    pub logo_opacity: f64,
    pub slogan_opacity: f64,
    pub docked: bool,
}

/// Scroll progress through the dock window, clamped to [0, 1].
pub fn progress(scroll_y: f64) -> f64 {
    ((scroll_y - START_OFFSET) / DISTANCE).clamp(0.0, 1.0)
}

/// Interpolates the hero transform and the two opacities for progress `p`.
///
/// Without a target box the hero heads for a fixed point near the top-left
/// corner at a fixed small size.
pub fn compute_frame(
    p: f64,
    viewport: Viewport,
    hero_height: f64,
    target: Option<TargetBox>,
) -> DockFrame {
    let base_height = if hero_height > 0.0 { hero_height } else { 1.0 };

    let (target_cx, target_cy, docked_height) = match target {
        Some(t) => (
            t.left + t.width / 2.0 + DOCK_OFFSET_X,
            t.top + t.height / 2.0 + DOCK_OFFSET_Y,
            t.height.max(MIN_DOCK_HEIGHT),
        ),
        None => (FALLBACK_CORNER_X, FALLBACK_CORNER_Y, FALLBACK_HEIGHT),
    };

    let scale = lerp(1.0, docked_height / base_height, p);
    let tx = (target_cx - viewport.width / 2.0) * p;
    let ty = (target_cy - viewport.height / 2.0) * p;

    DockFrame {
        tx,
        ty,
        scale,
        logo_opacity: smoothstep(LOGO_FADE_START, LOGO_FADE_END, p),
        slogan_opacity: 1.0 - smoothstep(SLOGAN_FADE_START, SLOGAN_FADE_END, p),
        docked: p >= 1.0,
    }
}

struct DockParts {
    window: Window,
    hero: Element,
    img: HtmlElement,
    slogan: Option<HtmlElement>,
    header_logo: Option<HtmlElement>,
    ticking: Cell<bool>,
    pending_frame: Cell<Option<i32>>,
}

impl DockParts {
    fn render(&self) {
        let width = self
            .window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(0.0);
        let height = self
            .window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);
        let scroll_y = self.window.scroll_y().unwrap_or(0.0);

        let target = self.header_logo.as_ref().map(|logo| {
            let rect = logo.get_bounding_client_rect();
            TargetBox {
                left: rect.left(),
                top: rect.top(),
                width: rect.width(),
                height: rect.height(),
            }
        });
        let hero_height = self.img.get_bounding_client_rect().height();

        let frame = compute_frame(
            progress(scroll_y),
            Viewport { width, height },
            hero_height,
            target,
        );

        let style = self.img.style();
        let _ = style.set_property("--hero-tx", &format!("{}px", frame.tx.round()));
        let _ = style.set_property("--hero-ty", &format!("{}px", frame.ty.round()));
        let _ = style.set_property("--hero-scale", &frame.scale.to_string());

        if let Some(logo) = &self.header_logo {
            let _ = logo
                .style()
                .set_property("opacity", &frame.logo_opacity.to_string());
        }
        if let Some(slogan) = &self.slogan {
            let _ = slogan
                .style()
                .set_property("opacity", &frame.slogan_opacity.to_string());
        }

        if frame.docked {
            let _ = self.hero.class_list().add_1(HIDDEN_CLASS);
        } else {
            let _ = self.hero.class_list().remove_1(HIDDEN_CLASS);
        }

        self.pending_frame.set(None);
        self.ticking.set(false);
    }
}

/// Ties the hero logo transform, header logo opacity and slogan opacity to
/// scroll position while the landing page is mounted.
pub struct HeroDockController {
    parts: Rc<DockParts>,
    on_scroll: Closure<dyn FnMut()>,
    on_resize: Closure<dyn FnMut()>,
    _on_frame: Rc<Closure<dyn FnMut()>>,
}

impl HeroDockController {
    /// Installs the effect when the hero block exists. Under reduced motion
    /// the hero is hidden outright, the header logo restored, and nothing
    /// listens for scroll.
    pub fn install(document: &Document) -> Option<Self> {
        let hero = document.get_element_by_id(HERO_ID)?;
        let img: HtmlElement = hero
            .query_selector(HERO_IMG_SELECTOR)
            .ok()
            .flatten()?
            .dyn_into()
            .ok()?;
        let slogan = hero
            .query_selector(HERO_SLOGAN_SELECTOR)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        let header_logo = document
            .query_selector(HEADER_LOGO_SELECTOR)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());

        if prefs::prefers_reduced_motion() {
            let _ = hero.class_list().add_1(HIDDEN_CLASS);
            if let Some(logo) = &header_logo {
                let _ = logo.style().remove_property("opacity");
            }
            return None;
        }

        // Keep the two logos from showing at once at the top of the page.
        if let Some(logo) = &header_logo {
            let _ = logo.style().set_property("opacity", "0");
        }

        let window = web_sys::window()?;
        let parts = Rc::new(DockParts {
            window: window.clone(),
            hero,
            img,
            slogan,
            header_logo,
            ticking: Cell::new(false),
            pending_frame: Cell::new(None),
        });

        let on_frame = Rc::new(Closure::wrap(Box::new({
            let parts = parts.clone();
            move || parts.render()
        }) as Box<dyn FnMut()>));

        let on_scroll = Closure::wrap(Box::new({
            let parts = parts.clone();
            let on_frame = on_frame.clone();
            move || {
                // Coalesce scroll bursts into one recomputation per frame.
                if !parts.ticking.get() {
                    parts.ticking.set(true);
                    let handle = parts
                        .window
                        .request_animation_frame((*on_frame).as_ref().unchecked_ref());
                    parts.pending_frame.set(handle.ok());
                }
            }
        }) as Box<dyn FnMut()>);

        let on_resize = Closure::wrap(Box::new({
            let parts = parts.clone();
            move || parts.render()
        }) as Box<dyn FnMut()>);

        let _ = window
            .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
        let _ = window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());

        parts.render();

        Some(Self {
            parts,
            on_scroll,
            on_resize,
            _on_frame: on_frame,
        })
    }
}

impl Drop for HeroDockController {
    fn drop(&mut self) {
        let window = &self.parts.window;
        let _ = window
            .remove_event_listener_with_callback("scroll", self.on_scroll.as_ref().unchecked_ref());
        let _ = window
            .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref());
        if let Some(handle) = self.parts.pending_frame.take() {
            let _ = window.cancel_animation_frame(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    const VIEWPORT: Viewport = Viewport {
        width: 1280.0,
        height: 800.0,
    };

    #[test]
    fn progress_spans_the_scroll_window() {
        assert!(close(progress(0.0), 0.0));
        assert!(close(progress(START_OFFSET), 0.0));
        assert!(close(progress(START_OFFSET + DISTANCE / 2.0), 0.5));
        assert!(close(progress(START_OFFSET + DISTANCE), 1.0));
        // Clamped past the end.
        assert!(close(progress(10_000.0), 1.0));
    }

    #[test]
    fn frame_at_rest_is_identity() {
        let frame = compute_frame(0.0, VIEWPORT, 400.0, None);
        assert!(close(frame.tx, 0.0));
        assert!(close(frame.ty, 0.0));
        assert!(close(frame.scale, 1.0));
        assert!(close(frame.logo_opacity, 0.0));
        assert!(close(frame.slogan_opacity, 1.0));
        assert!(!frame.docked);
    }

    #[test]
    fn fallback_target_docks_to_the_corner() {
        let frame = compute_frame(1.0, VIEWPORT, 400.0, None);
        assert!(close(frame.tx, FALLBACK_CORNER_X - 640.0));
        assert!(close(frame.ty, FALLBACK_CORNER_Y - 400.0));
        assert!(close(frame.scale, FALLBACK_HEIGHT / 400.0));
        assert!(frame.docked);
    }

    #[test]
    fn header_target_centers_with_fine_tuning() {
        let target = TargetBox {
            left: 100.0,
            top: 10.0,
            width: 40.0,
            height: 40.0,
        };
        let frame = compute_frame(1.0, VIEWPORT, 400.0, Some(target));
        // Center (120, 30), nudged by the dock offsets.
        assert!(close(frame.tx, 120.0 + DOCK_OFFSET_X - 640.0));
        assert!(close(frame.ty, 30.0 + DOCK_OFFSET_Y - 400.0));
        assert!(close(frame.scale, 40.0 / 400.0));
    }

    #[test]
    fn short_header_logos_are_floored() {
        let target = TargetBox {
            left: 0.0,
            top: 0.0,
            width: 28.0,
            height: 28.0,
        };
        let frame = compute_frame(1.0, VIEWPORT, 360.0, Some(target));
        assert!(close(frame.scale, MIN_DOCK_HEIGHT / 360.0));
    }

    #[test]
    fn zero_height_hero_does_not_divide_by_zero() {
        let frame = compute_frame(1.0, VIEWPORT, 0.0, None);
        assert!(frame.scale.is_finite());
        assert!(close(frame.scale, FALLBACK_HEIGHT));
    }

    #[test]
    fn docked_only_at_full_progress() {
        assert!(!compute_frame(0.999, VIEWPORT, 400.0, None).docked);
        assert!(compute_frame(1.0, VIEWPORT, 400.0, None).docked);
    }

    #[test]
    fn opacities_follow_their_windows() {
        let early = compute_frame(LOGO_FADE_START, VIEWPORT, 400.0, None);
        assert!(close(early.logo_opacity, 0.0));
        let late = compute_frame(LOGO_FADE_END, VIEWPORT, 400.0, None);
        assert!(close(late.logo_opacity, 1.0));

        let fresh = compute_frame(SLOGAN_FADE_START, VIEWPORT, 400.0, None);
        assert!(close(fresh.slogan_opacity, 1.0));
        let faded = compute_frame(SLOGAN_FADE_END, VIEWPORT, 400.0, None);
        assert!(close(faded.slogan_opacity, 0.0));
        // The slogan is gone before the header logo starts appearing.
        assert!(SLOGAN_FADE_END <= LOGO_FADE_START);
    }

    #[test]
    fn translation_scales_linearly_with_progress() {
        let half = compute_frame(0.5, VIEWPORT, 400.0, None);
        let full = compute_frame(1.0, VIEWPORT, 400.0, None);
        assert!(close(half.tx * 2.0, full.tx));
        assert!(close(half.ty * 2.0, full.ty));
    }
}
