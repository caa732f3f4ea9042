use uuid::Uuid;

use super::*;

fn sample_user() -> SessionUser {
    SessionUser {
        id: Uuid::nil(),
        email: "ada@example.com".into(),
        name: "Ada".into(),
        member_since: Some("2026-02-01".into()),
    }
}

// =============================================================================
// Login page
// =============================================================================

#[test]
fn login_page_is_a_full_document() {
    let html = render_login_page(false);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Sign in to Finboard</title>"));
    assert!(html.contains(r#"href="/static/app.css""#));
}

#[test]
fn login_form_posts_email_and_password() {
    let html = render_login_page(false);
    assert!(html.contains(r#"action="/login""#));
    assert!(html.contains(r#"method="post""#));
    assert!(html.contains(r#"name="email""#));
    assert!(html.contains(r#"name="password""#));
}

#[test]
fn login_page_without_error_has_no_notice() {
    let html = render_login_page(false);
    assert!(!html.contains("Invalid email or password."));
}

#[test]
fn login_page_with_error_shows_uniform_notice() {
    let html = render_login_page(true);
    assert!(html.contains("Invalid email or password."));
}

// =============================================================================
// Dashboard page
// =============================================================================

#[test]
fn dashboard_page_renders_inside_shell() {
    let html = render_dashboard_page(sample_user());
    let sidenav = html.find("shell__sidenav").unwrap();
    let content = html.find("shell__content").unwrap();
    let title = html.find("Dashboard").unwrap();
    assert!(sidenav < content);
    assert!(content < title);
}

#[test]
fn dashboard_page_shows_profile_fields() {
    let html = render_dashboard_page(sample_user());
    assert!(html.contains("Ada"));
    assert!(html.contains("ada@example.com"));
    assert!(html.contains("2026-02-01"));
}

#[test]
fn dashboard_page_handles_missing_member_since() {
    let mut user = sample_user();
    user.member_since = None;
    let html = render_dashboard_page(user);
    assert!(html.contains("unknown"));
}
