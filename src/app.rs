//! Root application module.
//!
//! Contains the main App component, AppContext definition, and
//! application-level setup logic following Leptos conventions.

use leptos::prelude::*;

use crate::components::AppRouter;
use crate::core::LocalStore;
use crate::core::theme::{apply_theme, load_theme, save_theme};
use crate::models::{SidebarState, Theme, Viewport};

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
/// It only carries the shell's navigation and theme state: each tool keeps
/// its own state locally.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Responsive sidebar flags (reset on reload).
    pub sidebar: RwSignal<SidebarState>,

    /// Current color theme (persisted in localStorage).
    pub theme: RwSignal<Theme>,
}

impl AppContext {
    /// Creates a new application context.
    ///
    /// - Sidebar: closed, mobile layout until the first media query result
    /// - Theme: loaded from localStorage (dark if unset)
    pub fn new() -> Self {
        Self {
            sidebar: RwSignal::new(SidebarState::new(Viewport::Mobile)),
            theme: RwSignal::new(load_theme(&LocalStore)),
        }
    }

    /// Flip light/dark and persist the choice.
    pub fn toggle_theme(&self) {
        self.theme.update(|t| *t = t.toggled());
        if let Err(_e) = save_theme(&LocalStore, self.theme.get_untracked()) {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::warn_1(&format!("Theme not saved: {}", _e).into());
        }
    }

    /// Mobile menu button.
    pub fn toggle_sidebar(&self) {
        self.sidebar.update(|s| s.toggle());
    }

    /// Backdrop click.
    pub fn close_sidebar(&self) {
        self.sidebar.update(|s| s.close());
    }

    /// Sidebar header button (close on mobile, collapse on desktop).
    pub fn sidebar_header_action(&self) {
        self.sidebar.update(|s| s.header_action());
    }

    pub fn set_viewport(&self, viewport: Viewport) {
        self.sidebar.update(|s| s.set_viewport(viewport));
    }

    pub fn navigated(&self) {
        self.sidebar.update(|s| s.navigated());
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Keeps the document's `data-theme` in sync with the theme signal
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the router
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    Effect::new(move |_| apply_theme(ctx.theme.get()));

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: var(--background, #0b0d12);
                    color: var(--foreground, #e6e8ee);
                    font-family: system-ui, sans-serif;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: var(--destructive, #ef4444); margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: var(--muted-foreground, #9aa0ad); margin-bottom: 2rem;">
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <details style="
                            text-align: left;
                            background: var(--muted, #161a22);
                            padding: 1rem;
                            border-radius: 8px;
                            margin-bottom: 1rem;
                        ">
                            <summary style="cursor: pointer;">"Error details"</summary>
                            <ul style="margin: 1rem 0 0 0; padding-left: 1.5rem; font-size: 0.9rem;">
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: var(--primary, #6366f1);
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 8px;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
