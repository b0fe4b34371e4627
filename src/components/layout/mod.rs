//! Application chrome: responsive sidebar, mobile menu button, page slot.

mod menu_button;
mod shell;
mod sidebar;

pub use menu_button::MenuButton;
pub use shell::Shell;
pub use sidebar::Sidebar;
