//! Full-screen loading overlay.
//!
//! Stateless: a parent mounts it while something is pending and unmounts it
//! when done. While mounted it covers the viewport, swallows pointer input and
//! shows an indeterminate animation.

#[cfg(all(test, feature = "ssr"))]
#[path = "loading_overlay_test.rs"]
mod loading_overlay_test;

use leptos::prelude::*;

use crate::config::OverlayConfig;

pub const OVERLAY_CLASS: &str =
    "fixed inset-0 bg-background/80 backdrop-blur-sm z-50 flex items-center justify-center";

/// Viewport-covering loading animation.
#[component]
pub fn LoadingOverlay() -> impl IntoView {
    let OverlayConfig { image_src, image_alt } = OverlayConfig::default();

    view! {
        <div class=OVERLAY_CLASS role="status" aria-busy="true">
            <div class="w-56 h-56 flex items-center justify-center">
                <img
                    src=image_src
                    alt=image_alt
                    class="w-52 h-52 object-contain"
                    aria-hidden="true"
                />
            </div>
        </div>
    }
}
