//! Reduced-motion preference lookup.

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// True when the user asked the platform to suppress animations.
///
/// Read once per controller at construction; an environment without
/// `matchMedia` counts as no preference.
pub fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}
