//! HTML document shell around the page.
//!
//! The component tree relies on Tailwind utility classes, so the shell pulls
//! in a Tailwind build unless the caller opts out.

use crate::App;
use leptos::prelude::*;

/// Tailwind Play CDN build, compiles the utility classes in the browser.
pub const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

/// Settings for the `<html>`/`<head>` wrapper. They never touch page content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageOptions {
    /// Text of the `<title>` element
    pub title: String,
    /// Value of the `lang` attribute on `<html>`
    pub lang: String,
    /// Stylesheet script source; `None` leaves styling to the host
    pub tailwind_src: Option<String>,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: "CloudLift".into(),
            lang: "en".into(),
            tailwind_src: Some(TAILWIND_CDN.into()),
        }
    }
}

/// The complete HTML document: head metadata plus the landing page body.
#[component]
pub fn PageDocument(options: PageOptions) -> impl IntoView {
    let PageOptions {
        title,
        lang,
        tailwind_src,
    } = options;

    // One concrete head per case; an `Option` child would leave a `<!>` marker.
    let head = match tailwind_src {
        Some(src) => view! {
            <head>
                <HeadMeta title=title />
                <script src=src></script>
            </head>
        }
        .into_any(),
        None => view! {
            <head>
                <HeadMeta title=title />
            </head>
        }
        .into_any(),
    };

    view! {
        <html lang=lang>
            {head}
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
fn HeadMeta(title: String) -> impl IntoView {
    view! {
        <meta charset="UTF-8" />
        <meta name="viewport" content="width=device-width, initial-scale=1.0" />
        <title>{title}</title>
    }
}
