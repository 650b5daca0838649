//! # cloudlift-landing
//!
//! Marketing page for CloudLift, the OpenStack-powered cloud platform.
//!
//! The page is one static component tree, composed in fixed order:
//!
//! ```text
//! App
//! ├── Navbar    brand + "Sign In"
//! ├── Hero      headline + "Get Started Free" / "Learn More"
//! ├── Features  "Why Choose CloudLift?" + three cards
//! └── Footer    copyright
//! ```
//!
//! It takes no props, holds no signals and attaches no handlers, so the same
//! tree serves both rendering targets:
//!
//! - **`csr`** - [`mount`] it into the browser document (trunk build).
//! - **`ssr`** (default) - render it to HTML with [`render_app`] /
//!   [`render_page`], or write it out with [`export_page`]. The
//!   `cloudlift-render` binary wraps these for the command line.

pub mod document;
#[cfg(feature = "ssr")]
pub mod error;
#[cfg(feature = "ssr")]
pub mod render;
pub mod sections;

use leptos::prelude::*;
use sections::{Features, Footer, Hero, Navbar};

pub use document::{PageDocument, PageOptions, TAILWIND_CDN};
#[cfg(feature = "ssr")]
pub use error::ExportError;
#[cfg(feature = "ssr")]
pub use render::{export_page, render_app, render_page, write_html};

/// The whole landing page.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Navbar />
        <Hero />
        <Features />
        <Footer />
    }
}

/// Mount the page into `<body>`.
#[cfg(feature = "csr")]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App /> });
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const HERO_CLASS: &str = "<section class=\"pt-28 pb-20";
    const FEATURES_CLASS: &str = "<section class=\"py-16 bg-gray-50\">";

    #[test]
    fn renders_each_block_once() {
        let html = render_app();

        assert_eq!(html.matches("<nav").count(), 1);
        assert_eq!(html.matches("<section").count(), 2);
        assert_eq!(html.matches(HERO_CLASS).count(), 1);
        assert_eq!(html.matches(FEATURES_CLASS).count(), 1);
        assert_eq!(html.matches("<footer").count(), 1);
        assert_eq!(html.matches("<h3").count(), 3);
    }

    #[test]
    fn blocks_follow_document_order() {
        let html = render_app();

        let nav = html.find("<nav").unwrap();
        let hero = html.find(HERO_CLASS).unwrap();
        let features = html.find(FEATURES_CLASS).unwrap();
        let footer = html.find("<footer").unwrap();
        assert!(nav < hero && hero < features && features < footer);
    }

    #[test]
    fn contains_required_copy() {
        let html = render_app();

        for text in [
            "CloudLift",
            "Build Your Cloud",
            "Why Choose CloudLift?",
            "© 2025 CloudLift. All rights reserved.",
        ] {
            assert!(html.contains(text), "missing {text:?}");
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        assert_eq!(render_app(), render_app());
        assert_eq!(
            render_page(&PageOptions::default()),
            render_page(&PageOptions::default())
        );
    }

    #[test]
    fn buttons_are_inert() {
        let html = render_app();

        assert_eq!(html.matches("<button").count(), 3);
        assert_eq!(html.matches("type=\"button\"").count(), 3);
        assert!(!html.contains("onclick"));
        assert!(!html.contains("<script"));
    }

    #[test]
    fn markup_has_no_ids_or_placeholders() {
        let html = render_app();

        assert!(!html.contains(" id="));
        assert!(!html.contains("<!>"));
    }
}
