//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::models::AppRoute;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuBraces as Json, LuCheck as Check, LuChevronLeft as ChevronLeft,
        LuChevronRight as ChevronRight, LuCircleAlert as Alert, LuCircleCheck as Success,
        LuCode as Snippets, LuCopy as Copy, LuExternalLink as ExternalLink,
        LuFileText as Markdown, LuGitFork as Fork, LuGithub as Github, LuHouse as Home,
        LuLink as Link, LuLoader as Spinner, LuMapPin as Location, LuMenu as Menu,
        LuMoon as Moon, LuPencil as Edit, LuPlus as Plus, LuSearch as Search,
        LuSparkles as Sparkles, LuStar as Star, LuSun as Sun, LuTrash2 as Trash,
        LuUsers as Users, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowRepeat as Spinner, BsBoxArrowUpRight as ExternalLink, BsBraces as Json,
        BsCheckCircle as Success, BsCheckLg as Check, BsChevronLeft as ChevronLeft,
        BsChevronRight as ChevronRight, BsClipboard as Copy, BsCodeSlash as Snippets,
        BsExclamationCircle as Alert, BsFileEarmarkText as Markdown, BsGeoAltFill as Location,
        BsGithub as Github, BsHouseFill as Home, BsLink45deg as Link, BsList as Menu,
        BsMoonStars as Moon, BsPencil as Edit, BsPeople as Users, BsPlusLg as Plus,
        BsSearch as Search, BsShareFill as Fork, BsStars as Sparkles, BsStar as Star,
        BsSun as Sun, BsTrash as Trash, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(HOME, Home);
themed_icon!(MARKDOWN, Markdown);
themed_icon!(JSON, Json);
themed_icon!(SNIPPETS, Snippets);
themed_icon!(GITHUB, Github);
themed_icon!(MENU, Menu);
themed_icon!(CLOSE, Close);
themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(SUN, Sun);
themed_icon!(MOON, Moon);
themed_icon!(SPARKLES, Sparkles);
themed_icon!(ALERT, Alert);
themed_icon!(SUCCESS, Success);
themed_icon!(PLUS, Plus);
themed_icon!(EDIT, Edit);
themed_icon!(TRASH, Trash);
themed_icon!(COPY, Copy);
themed_icon!(CHECK, Check);
themed_icon!(SEARCH, Search);
themed_icon!(SPINNER, Spinner);
themed_icon!(STAR, Star);
themed_icon!(FORK, Fork);
themed_icon!(EXTERNAL_LINK, ExternalLink);
themed_icon!(USERS, Users);
themed_icon!(LOCATION, Location);
themed_icon!(LINK, Link);

/// Icon for a route in navigation and home cards.
pub fn route_icon(route: &AppRoute) -> Icon {
    match route {
        AppRoute::Home | AppRoute::NotFound(_) => HOME,
        AppRoute::Markdown => MARKDOWN,
        AppRoute::Json => JSON,
        AppRoute::Snippets => SNIPPETS,
        AppRoute::GitHub => GITHUB,
    }
}
