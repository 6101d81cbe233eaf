// Loading indicators
pub mod skeleton;
pub mod spinner;

// Navigation
pub mod nav_sidebar;

pub use nav_sidebar::*;
pub use skeleton::*;
pub use spinner::*;
