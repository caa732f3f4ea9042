//! Two-pane dashboard shell.
//!
//! DESIGN
//! ======
//! A fixed-width side navigation pane sits next to a flexible content pane
//! that owns scrolling. The shell renders identical chrome for every
//! dashboard page; pages supply only the content pane's children.

use leptos::prelude::*;

/// Shell wrapping page content with the side navigation.
#[component]
pub fn DashboardLayout(children: Children) -> impl IntoView {
    view! {
        <div class="shell">
            <div class="shell__sidenav">
                <SideNav/>
            </div>
            <main class="shell__content">{children()}</main>
        </div>
    }
}

/// Side navigation: brand link, page links, sign-out form.
#[component]
fn SideNav() -> impl IntoView {
    view! {
        <nav class="sidenav">
            <a class="sidenav__brand" href="/">
                "Finboard"
            </a>
            <div class="sidenav__links">
                <a class="sidenav__link" href="/dashboard">
                    "Home"
                </a>
            </div>
            <div class="sidenav__spacer"></div>
            <form class="sidenav__signout" method="post" action="/logout">
                <button class="sidenav__link sidenav__link--button" type="submit">
                    "Sign Out"
                </button>
            </form>
        </nav>
    }
}

#[cfg(test)]
#[path = "layout_test.rs"]
mod tests;
