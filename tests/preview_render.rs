//! Server-side rendering of the sidebar component and the preview host.

#![cfg(feature = "server")]

use axum::{
    extract::State,
    http::{header::HOST, HeaderMap, HeaderValue, Uri},
    response::IntoResponse,
};
use toc_sidebar::config::SidebarConfig;
use toc_sidebar::sidebar::{Sidebar, SidebarEvent};
use toc_sidebar::toc::{NavigationNode, PageContext};
use toc_sidebar::ui::{preview_page, render_sidebar_html, PreviewState};

fn sidebar() -> Sidebar {
    Sidebar::new(
        vec![
            NavigationNode::page("Home", "index.html"),
            NavigationNode::section("Reference", vec![]),
            NavigationNode::section("src", vec![NavigationNode::page("A", "src/a.html")]),
        ],
        SidebarConfig::default(),
    )
}

#[test]
fn markup_mirrors_tree() {
    let page = PageContext::new("https://book.example/index.html", "").unwrap();
    let html = render_sidebar_html(&sidebar().render(&page));

    assert!(html.contains(r#"id="sidebar""#), "scroll container: {html}");
    assert!(html.contains(r#"class="chapter""#));
    assert!(html.contains(r#"class="section""#));
    assert!(html.contains(r#"class="part-title""#));
    assert!(html.contains(r#"class="toggle""#));
    assert!(html.contains(r#"href="src/a.html""#));
    assert_eq!(html.matches(r#"class="toggle""#).count(), 1);

    let home = html.find(">Home<").expect("Home rendered");
    let reference = html.find(">Reference<").expect("Reference rendered");
    let a = html.find(">A<").expect("A rendered");
    assert!(home < reference && reference < a, "document order: {html}");
}

#[test]
fn markup_marks_active_path() {
    let page = PageContext::new("https://book.example/src/a.html", "../").unwrap();
    let html = render_sidebar_html(&sidebar().render(&page));

    assert!(html.contains(r#"href="../src/a.html""#), "rewritten link: {html}");
    assert_eq!(html.matches(r#"class="active""#).count(), 1);
    assert_eq!(html.matches("chapter-item expanded").count(), 1);
}

#[test]
fn markup_reflects_given_state() {
    let page = PageContext::new("https://book.example/index.html", "").unwrap();
    let mut rendered = sidebar().render(&page);
    assert_eq!(render_sidebar_html(&rendered).matches("chapter-item expanded").count(), 0);

    let src = rendered.tree().find_by_label("src").unwrap();
    rendered.handle(SidebarEvent::ToggleSection(src));

    // The markup is drawn from the state passed in, not from a new render
    let html = render_sidebar_html(&rendered);
    assert_eq!(html.matches("chapter-item expanded").count(), 1, "{html}");
}

#[tokio::test]
async fn preview_page_resolves_requested_path() {
    let state = PreviewState::new(sidebar());
    let mut headers = HeaderMap::new();
    headers.insert(HOST, HeaderValue::from_static("book.local:3000"));

    let response = preview_page(State(state), headers, Uri::from_static("/src/a.html"))
        .await
        .into_response();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let html = String::from_utf8(body.to_vec()).expect("utf-8");

    assert!(html.contains(r#"var path_to_root = "../";"#));
    assert!(html.contains("<h1>A</h1>"));
    assert!(html.contains(r#"class="active""#));
}
