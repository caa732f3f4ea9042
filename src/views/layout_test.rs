use leptos::prelude::*;

use super::*;

fn render_shell() -> String {
    view! {
        <DashboardLayout>
            <p>"page body"</p>
        </DashboardLayout>
    }
    .to_html()
}

// =============================================================================
// DashboardLayout
// =============================================================================

#[test]
fn shell_has_sidenav_and_content_panes() {
    let html = render_shell();
    assert!(html.contains("shell__sidenav"));
    assert!(html.contains("shell__content"));
}

#[test]
fn sidenav_pane_precedes_content_pane() {
    let html = render_shell();
    let sidenav = html.find("shell__sidenav").unwrap();
    let content = html.find("shell__content").unwrap();
    assert!(sidenav < content);
}

#[test]
fn children_render_inside_content_pane() {
    let html = render_shell();
    let content = html.find("shell__content").unwrap();
    let body = html.find("page body").unwrap();
    assert!(content < body);
}

// =============================================================================
// SideNav
// =============================================================================

#[test]
fn sidenav_links_home_and_dashboard() {
    let html = render_shell();
    assert!(html.contains(r#"href="/""#));
    assert!(html.contains(r#"href="/dashboard""#));
}

#[test]
fn sidenav_signout_posts_to_logout() {
    let html = render_shell();
    assert!(html.contains(r#"action="/logout""#));
    assert!(html.contains(r#"method="post""#));
}
