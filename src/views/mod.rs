//! Server-rendered views.
//!
//! DESIGN
//! ======
//! Pages are Leptos components rendered to static HTML strings on the server.
//! Nothing here hydrates; forms post back and the server answers with a
//! redirect or a re-rendered page. `document` wraps a page body in the full
//! HTML document shell with the shared stylesheet.

pub mod layout;
pub mod pages;

use leptos::prelude::*;

/// Render a full HTML document around the given body view.
pub(crate) fn document(title: &str, body: impl IntoView) -> String {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{title.to_owned()}</title>
                <link rel="stylesheet" href="/static/app.css"/>
            </head>
            <body>{body}</body>
        </html>
    }
    .to_html()
}
