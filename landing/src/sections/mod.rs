// CloudLift landing page sections

/// Brand label shared by the navbar and the features heading.
pub const BRAND: &str = "CloudLift";

mod features;
mod footer;
mod hero;
mod nav;

pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Navbar;
