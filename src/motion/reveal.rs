//! Staggered reveal of section content as it scrolls into view.
//!
//! Elements are grouped per section so that siblings cascade in together;
//! each element reveals exactly once and is then left alone. Under a
//! reduced-motion preference nothing installs and the page stays static.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::motion::prefs;

/// Delay added per position within a group (ms).
const STAGGER_STEP_MS: u32 = 60;
/// Ceiling on the stagger so long groups stay snappy (ms).
const STAGGER_CAP_MS: u32 = 240;
/// Fraction of the viewport height inside which an element counts as
/// already on screen at startup.
const IN_VIEW_FRACTION: f64 = 0.9;
/// Shrinks the observer's trigger zone from the viewport bottom.
const OBSERVER_ROOT_MARGIN: &str = "0px 0px -20% 0px";
/// Minimum visible fraction before the observer fires.
const OBSERVER_THRESHOLD: f64 = 0.1;

/// How the revealable elements of a section are extracted.
enum Extract {
    /// Direct element children of the first match of the selector.
    ChildrenOf(&'static str),
    /// Same, filtered to the given (uppercase) tag names.
    ChildTagsOf(&'static str, &'static [&'static str]),
    /// Every match of the selector within the section.
    All(&'static str),
}

/// Section selector → extraction rule. One table entry per reveal group;
/// sections missing from the current document are skipped.
const SECTION_GROUPS: &[(&str, Extract)] = &[
    ("#accueil", Extract::ChildrenOf(".container")),
    ("#evenements", Extract::ChildTagsOf(".container", &["H2"])),
    ("#evenements", Extract::All(".events .event")),
    ("#equipe", Extract::ChildTagsOf(".container", &["H2"])),
    ("#equipe", Extract::All(".team .member")),
    ("#contact", Extract::ChildTagsOf(".container", &["H2", "P"])),
    ("#contact", Extract::ChildrenOf("form")),
    ("#reseau", Extract::ChildrenOf(".container")),
    ("#reseau", Extract::All("nav ul > li")),
];

/// Transition delay for the element at `index` within its group.
fn stagger_delay_ms(index: usize) -> u32 {
    (index as u32 * STAGGER_STEP_MS).min(STAGGER_CAP_MS)
}

/// Whether a bounding box already overlaps the extended viewport. Anything
/// not yet scrolled past the top edge (`bottom >= 0`) still counts.
fn already_in_view(top: f64, bottom: f64, viewport_height: f64) -> bool {
    top <= viewport_height * IN_VIEW_FRACTION && bottom >= 0.0
}

fn extract(root: &Element, rule: &Extract) -> Vec<Element> {
    match rule {
        Extract::ChildrenOf(selector) => child_elements(root, selector, None),
        Extract::ChildTagsOf(selector, tags) => child_elements(root, selector, Some(tags)),
        Extract::All(selector) => {
            let mut members = Vec::new();
            if let Ok(list) = root.query_selector_all(selector) {
                for i in 0..list.length() {
                    if let Some(node) = list.get(i) {
                        if let Ok(el) = node.dyn_into::<Element>() {
                            members.push(el);
                        }
                    }
                }
            }
            members
        }
    }
}

fn child_elements(root: &Element, selector: &str, tags: Option<&[&str]>) -> Vec<Element> {
    let container = match root.query_selector(selector) {
        Ok(Some(container)) => container,
        _ => return Vec::new(),
    };
    let children = container.children();
    let mut members = Vec::new();
    for i in 0..children.length() {
        if let Some(el) = children.item(i) {
            if tags.map_or(true, |tags| tags.contains(&el.tag_name().as_str())) {
                members.push(el);
            }
        }
    }
    members
}

fn collect_groups(document: &Document) -> Vec<Vec<Element>> {
    let mut groups = Vec::new();
    for (section, rule) in SECTION_GROUPS {
        let root = match document.query_selector(section) {
            Ok(Some(root)) => root,
            _ => continue,
        };
        let members = extract(&root, rule);
        if !members.is_empty() {
            groups.push(members);
        }
    }
    groups
}

/// Watches grouped section content and applies a one-shot staggered
/// `is-visible` transition as each element enters the trigger zone.
pub struct RevealController {
    observer: IntersectionObserver,
    _on_intersect: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl RevealController {
    /// Marks revealable content and starts observing it. Returns `None`
    /// when reduced motion is preferred or the page has nothing to reveal.
    pub fn install(document: &Document) -> Option<Self> {
        if prefs::prefers_reduced_motion() {
            return None;
        }

        let groups = collect_groups(document);
        if groups.is_empty() {
            return None;
        }

        for group in &groups {
            for el in group {
                let _ = el.class_list().add_1("reveal");
            }
        }

        let window = web_sys::window()?;
        let viewport_height = window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .filter(|h| *h > 0.0)
            .or_else(|| document.document_element().map(|el| el.client_height() as f64))
            .unwrap_or(0.0);

        // Content already on screen shows up synchronously, with no delay.
        for group in &groups {
            for el in group {
                let rect = el.get_bounding_client_rect();
                if already_in_view(rect.top(), rect.bottom(), viewport_height) {
                    let _ = el.class_list().add_1("is-visible");
                }
            }
        }

        let lookup = groups.clone();
        let on_intersect = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry = match entry.dyn_into::<IntersectionObserverEntry>() {
                        Ok(entry) => entry,
                        Err(_) => continue,
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let el = entry.target();
                    // Stagger locally within the group the element belongs to.
                    let index = lookup
                        .iter()
                        .find_map(|group| group.iter().position(|member| *member == el))
                        .unwrap_or(0);
                    if let Some(html) = el.dyn_ref::<HtmlElement>() {
                        let _ = html.style().set_property(
                            "transition-delay",
                            &format!("{}ms", stagger_delay_ms(index)),
                        );
                    }
                    let _ = el.class_list().add_1("is-visible");
                    observer.unobserve(&el);
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_root_margin(OBSERVER_ROOT_MARGIN);
        options.set_threshold(&JsValue::from_f64(OBSERVER_THRESHOLD));

        let observer = IntersectionObserver::new_with_options(
            on_intersect.as_ref().unchecked_ref(),
            &options,
        )
        .ok()?;

        for group in &groups {
            for el in group {
                if !el.class_list().contains("is-visible") {
                    observer.observe(el);
                }
            }
        }

        Some(Self {
            observer,
            _on_intersect: on_intersect,
        })
    }
}

impl Drop for RevealController {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_steps_by_sixty() {
        assert_eq!(stagger_delay_ms(0), 0);
        assert_eq!(stagger_delay_ms(1), 60);
        assert_eq!(stagger_delay_ms(3), 180);
    }

    #[test]
    fn stagger_caps_at_two_forty() {
        assert_eq!(stagger_delay_ms(4), 240);
        assert_eq!(stagger_delay_ms(5), 240);
        assert_eq!(stagger_delay_ms(100), 240);
    }

    #[test]
    fn stagger_never_decreases() {
        let mut prev = 0;
        for index in 0..32 {
            let delay = stagger_delay_ms(index);
            assert!(delay >= prev);
            prev = delay;
        }
    }

    #[test]
    fn in_view_accepts_anything_overlapping_the_extended_viewport() {
        // Top exactly at 90% of the viewport still counts.
        assert!(already_in_view(720.0, 900.0, 800.0));
        // Bottom resting on the top edge still counts.
        assert!(already_in_view(-300.0, 0.0, 800.0));
        assert!(already_in_view(100.0, 400.0, 800.0));
    }

    #[test]
    fn in_view_rejects_offscreen_boxes() {
        // Below the 90% line.
        assert!(!already_in_view(721.0, 900.0, 800.0));
        // Fully scrolled past the top.
        assert!(!already_in_view(-300.0, -1.0, 800.0));
    }
}
