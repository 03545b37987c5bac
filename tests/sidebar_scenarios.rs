//! End-to-end sidebar behavior: render, normalize, resolve, restore, react.
//!
//! Each test drives the public lifecycle the way a page load does and checks
//! the resulting active/expanded marking and scroll plan.

use toc_sidebar::config::SidebarConfig;
use toc_sidebar::session::{MemoryStore, ScrollRestore, SessionStore, UnavailableStore};
use toc_sidebar::sidebar::{Sidebar, SidebarEvent};
use toc_sidebar::toc::{parse_toc, NavigationNode, PageContext};

const BOOK_ROOT: &str = "https://book.example/";

fn home_and_src() -> Sidebar {
    let toc = parse_toc(
        r#"[
            {"label": "Home", "href": "index.html"},
            {"label": "src", "children": [{"label": "A", "href": "src/a.html"}]}
        ]"#,
    )
    .expect("valid toc");
    Sidebar::new(toc, SidebarConfig::default())
}

/// Page whose document base is the book root (`<base href>`), so an empty
/// prefix is correct from any directory.
fn rooted_page(location: &str) -> PageContext {
    PageContext::new(location, "")
        .expect("valid location")
        .with_base_uri(BOOK_ROOT)
        .expect("valid base")
}

#[test]
fn nested_page_activates_entry_and_expands_section() {
    let state = home_and_src().render(&rooted_page("https://book.example/src/a.html"));
    let tree = state.tree();

    let a = tree.find_by_label("A").unwrap();
    let src = tree.find_by_label("src").unwrap();
    let home = tree.find_by_label("Home").unwrap();

    assert!(tree.get(a).unwrap().is_active);
    assert!(tree.get(src).unwrap().is_expanded);
    assert!(!tree.get(home).unwrap().is_active);
    assert!(!tree.get(home).unwrap().is_section());
    assert_eq!(state.active(), Some(a));
}

#[test]
fn root_index_matches_home_directly() {
    let state = home_and_src().render(&rooted_page("https://book.example/index.html"));
    let tree = state.tree();

    let home = tree.find_by_label("Home").unwrap();
    assert_eq!(state.active(), Some(home));
    assert_eq!(
        tree.get(home).unwrap().resolved.as_deref(),
        Some("https://book.example/index.html")
    );

    let src = tree.find_by_label("src").unwrap();
    assert!(!tree.get(src).unwrap().is_expanded);
}

#[test]
fn root_index_aliases_first_chapter_without_home_page() {
    let sidebar = Sidebar::new(
        vec![
            NavigationNode::page("Introduction", "intro.html"),
            NavigationNode::page("Usage", "usage.html"),
        ],
        SidebarConfig::default(),
    );

    let state = sidebar.render(&PageContext::new("https://book.example/index.html", "").unwrap());
    assert_eq!(state.active(), state.tree().find_by_label("Introduction"));

    let state = sidebar.render(&PageContext::new("https://book.example/guide/index.html", "../").unwrap());
    assert_eq!(state.active(), None);
}

#[test]
fn prefix_rewrites_relative_links_only() {
    let sidebar = Sidebar::new(
        vec![
            NavigationNode::page("A", "a.html"),
            NavigationNode::page("External", "https://ext.example/x"),
            NavigationNode::page("Anchor", "#a"),
        ],
        SidebarConfig::default(),
    );
    let state = sidebar.render(&PageContext::new("https://book.example/guide/a.html", "../").unwrap());
    let tree = state.tree();

    let href = |label: &str| {
        tree.get(tree.find_by_label(label).unwrap())
            .unwrap()
            .href
            .clone()
    };
    assert_eq!(href("A").as_deref(), Some("../a.html"));
    assert_eq!(href("External").as_deref(), Some("https://ext.example/x"));
    assert_eq!(href("Anchor").as_deref(), Some("#a"));
}

#[test]
fn deep_page_resolves_with_relative_prefix() {
    let sidebar = Sidebar::new(
        parse_toc(include_str!("../assets/toc.json")).expect("embedded toc"),
        SidebarConfig::default(),
    );
    let page = PageContext::new(
        "https://book.example/src/offchain/uma/SessionResultAsserter.sol/abstract.SessionResultAsserter.html#functions",
        "../../../../",
    )
    .unwrap();

    let state = sidebar.render(&page);
    let tree = state.tree();

    let active = state.active().expect("page is in the tree");
    assert_eq!(tree.get(active).unwrap().label, "SessionResultAsserter");

    let expanded: Vec<&str> = tree
        .iter()
        .filter(|(_, e)| e.is_expanded)
        .map(|(_, e)| e.label.as_str())
        .collect();
    assert_eq!(expanded, ["src", "offchain", "uma"]);
    assert_eq!(tree.iter().filter(|(_, e)| e.is_active).count(), 1);
}

#[test]
fn unknown_page_renders_collapsed() {
    let state = home_and_src().render(&rooted_page("https://book.example/missing.html"));
    assert_eq!(state.active(), None);
    assert!(state.tree().iter().all(|(_, e)| !e.is_active && !e.is_expanded));
}

#[test]
fn rerendering_is_deterministic() {
    let sidebar = home_and_src();
    let page = rooted_page("https://book.example/src/a.html");
    assert_eq!(sidebar.render(&page), sidebar.render(&page));
}

#[test]
fn scroll_offset_survives_exactly_one_navigation() {
    let sidebar = home_and_src();
    let mut store = MemoryStore::new();

    // Page 1: user clicks "A" with the sidebar scrolled to 320px
    let (mut first, _) = sidebar.mount(&rooted_page("https://book.example/index.html"), &mut store);
    let a = first.tree().find_by_label("A").unwrap();
    first.dispatch(SidebarEvent::FollowLink { entry: a, scroll_top: 320 }, &mut store);

    // Page 2: offset restored and consumed
    let (second, restore) = sidebar.mount(&rooted_page("https://book.example/src/a.html"), &mut store);
    assert_eq!(restore, ScrollRestore::Offset(320));
    assert_eq!(store.get_item("sidebar-scroll").unwrap(), None);

    // Page 3 via next/previous buttons: no stored offset, center the active entry
    let (third, restore) = sidebar.mount(&rooted_page("https://book.example/index.html"), &mut store);
    assert_eq!(restore, ScrollRestore::CenterOn(third.active().unwrap()));
    assert_ne!(second.active(), third.active());
}

#[test]
fn sandboxed_storage_degrades_to_centering() {
    let sidebar = home_and_src();
    let mut store = UnavailableStore;

    let (mut state, restore) = sidebar.mount(&rooted_page("https://book.example/src/a.html"), &mut store);
    let a = state.active().unwrap();
    assert_eq!(restore, ScrollRestore::CenterOn(a));

    // Recording the offset fails silently
    assert!(!state.dispatch(SidebarEvent::FollowLink { entry: a, scroll_top: 10 }, &mut store));
}

#[test]
fn toggles_are_local_to_one_page_load() {
    let sidebar = home_and_src();
    let page = rooted_page("https://book.example/index.html");
    let mut store = MemoryStore::new();

    let (mut state, _) = sidebar.mount(&page, &mut store);
    let src = state.tree().find_by_label("src").unwrap();
    assert!(state.dispatch(SidebarEvent::ToggleSection(src), &mut store));
    assert!(state.tree().get(src).unwrap().is_expanded);
    assert!(store.is_empty());

    // A fresh load re-derives expansion from the active path only
    let (reloaded, _) = sidebar.mount(&page, &mut store);
    assert!(!reloaded.tree().get(src).unwrap().is_expanded);
}
