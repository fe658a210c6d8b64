// Standalone components
pub mod badge;
pub mod button;
pub mod card;
pub mod navbar;
pub mod skeleton;

// Depends on context provided by `SidebarProvider`
pub mod sidebar;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use navbar::*;
pub use sidebar::*;
pub use skeleton::*;
