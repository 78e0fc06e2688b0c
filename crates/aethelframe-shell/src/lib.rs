pub mod nav;
pub mod router;
pub mod shell;

pub use nav::{nav_items, position, NavItem};
pub use router::{path_for, resolve, Route};
pub use shell::SiteShell;
