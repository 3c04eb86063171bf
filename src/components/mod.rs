pub mod attach;
pub mod cards;
pub mod modals;

mod footer;
mod hero;
mod nav_header;

pub use footer::Footer;
pub use hero::Hero;
pub use nav_header::NavHeader;
