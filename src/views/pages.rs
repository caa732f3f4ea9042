//! Login and dashboard pages.

use leptos::prelude::*;

use crate::services::session::SessionUser;
use crate::views::layout::DashboardLayout;

/// Login page with an optional sign-in failure notice.
///
/// The notice wording never distinguishes bad emails from bad passwords or
/// unknown accounts.
#[component]
pub fn LoginPage(error: bool) -> impl IntoView {
    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Finboard"</h1>
                <p class="login-card__subtitle">"Sign in to your dashboard"</p>
                <form class="login-form" method="post" action="/login">
                    <input
                        class="login-input"
                        type="email"
                        name="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                        required=true
                    />
                    <input
                        class="login-input"
                        type="password"
                        name="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        minlength="6"
                        required=true
                    />
                    <button class="login-button" type="submit">
                        "Sign In"
                    </button>
                </form>
                {error
                    .then(|| {
                        view! { <p class="login-message login-message--error">"Invalid email or password."</p> }
                    })}
            </div>
        </div>
    }
}

/// Dashboard landing page inside the two-pane shell.
#[component]
pub fn DashboardPage(user: SessionUser) -> impl IntoView {
    let member_since = user.member_since.unwrap_or_else(|| "unknown".to_owned());
    view! {
        <DashboardLayout>
            <section class="dashboard">
                <h1 class="dashboard__title">"Dashboard"</h1>
                <p class="dashboard__welcome">"Welcome back, " {user.name} "."</p>
                <dl class="dashboard__profile">
                    <dt>"Email"</dt>
                    <dd>{user.email}</dd>
                    <dt>"Member since"</dt>
                    <dd>{member_since}</dd>
                </dl>
            </section>
        </DashboardLayout>
    }
}

/// Render the login page to a complete HTML document.
#[must_use]
pub fn render_login_page(error: bool) -> String {
    super::document("Sign in to Finboard", view! { <LoginPage error=error/> })
}

/// Render the dashboard page to a complete HTML document.
#[must_use]
pub fn render_dashboard_page(user: SessionUser) -> String {
    super::document("Finboard", view! { <DashboardPage user=user/> })
}

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;
