//! Application router component.
//!
//! Handles URL-based routing with hash history.
//! Uses native hashchange events instead of leptos_router for true hash routing.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: the current page is derived from `#/path`
//! - **Shell never re-renders on navigation**: only the page slot changes
//! - **hashchange events**: Browser back/forward buttons work automatically
//! - **Navigation closes the mobile sidebar overlay**

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::layout::Shell;
use crate::models::AppRoute;
use crate::utils::dom;

/// Main application router.
///
/// Routes:
/// - `#/` → Home
/// - `#/markdown`, `#/json`, `#/snippets`, `#/github` → tools
/// - anything else → Not Found
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Normalize an empty hash to "#/" without a history entry
    if dom::get_hash().is_empty() {
        dom::replace_hash(&AppRoute::Home.to_hash());
    }

    let route = RwSignal::new(AppRoute::current());

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(AppRoute::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = dom::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    let route_memo = Memo::new(move |_| route.get());

    // Close the mobile overlay after every navigation (not on first load)
    Effect::new(move |prev: Option<AppRoute>| {
        let current = route_memo.get();
        if prev.is_some_and(|p| p != current) {
            ctx.navigated();
        }
        current
    });

    view! { <Shell route=route_memo /> }
}
