//! Chrome shared by every page.

mod back_to_top;
mod footer;
mod navbar;
mod page;

pub use back_to_top::BackToTop;
pub use footer::Footer;
pub use navbar::Navbar;
pub use page::{Page, SectionHeading};
