//! The HTML the search box draws.

use crate::common::{controller, controller_on, make_full_doc, make_index, type_and_settle};
use hubsearch::controller::render::{MARK_CLOSE, MARK_OPEN, SEARCH_UI_HTML};
use hubsearch::{path_prefix, SearchConfig};

#[test]
fn test_result_markup() {
    let (mut controller, clock) = controller();
    type_and_settle(&mut controller, &clock, "diffusion");

    let html = controller.panel_html();
    assert!(html.starts_with(
        r#"<a href="subjects/biology/block-2/02-diffusion.html" class="search-result" data-index="0" tabindex="0">"#
    ));
    assert!(html.contains(r#"<span class="search-result__badge search-result__badge--biology">Bio</span>"#));
    assert!(html.contains(&format!(
        r#"<span class="search-result__title">{}Diffusion{}</span>"#,
        MARK_OPEN, MARK_CLOSE
    )));
    assert!(html.contains(r#"<span class="search-result__code">B2.2.1</span>"#));
    assert!(html.ends_with("</a>"));
}

#[test]
fn test_links_are_prefixed_for_the_page() {
    let page = "/subjects/physics/block-3/01-energy-stores.html";
    let (mut controller, clock) = controller_on(page, crate::common::bundled_index(), SearchConfig::default());
    assert_eq!(controller.prefix(), "../../../");

    type_and_settle(&mut controller, &clock, "energy");
    assert!(controller
        .results()
        .iter()
        .all(|r| r.href.starts_with("../../../subjects/")));
}

#[test]
fn test_badges_per_subject() {
    let (mut controller, clock) = controller();
    type_and_settle(&mut controller, &clock, "sb1");
    assert!(controller.results().iter().all(|r| r.badge == "Sep Bio"));

    type_and_settle(&mut controller, &clock, "c1");
    assert!(controller.results().iter().all(|r| r.badge == "Chem"));

    type_and_settle(&mut controller, &clock, "p2");
    assert!(controller.results().iter().all(|r| r.badge == "Phys"));
}

#[test]
fn test_empty_state_escapes_query() {
    let (mut controller, clock) = controller();
    type_and_settle(&mut controller, &clock, "<b>zzzz</b>");
    assert_eq!(
        controller.panel_html(),
        r#"<div class="search-results__empty">No results found for "&lt;b&gt;zzzz&lt;/b&gt;"</div>"#
    );
}

#[test]
fn test_titles_with_markup_are_escaped() {
    let index = make_index(vec![make_full_doc(
        "Acids & <Bases>",
        None,
        "subjects/chemistry/block-4/01-acids.html",
        &["acid"],
        "pH < 7",
    )]);
    let (mut controller, clock) = controller_on("/", index, SearchConfig::default());
    type_and_settle(&mut controller, &clock, "bases");

    let view = &controller.results()[0];
    assert_eq!(
        view.title_html,
        format!("Acids &amp; &lt;{}Bases{}&gt;", MARK_OPEN, MARK_CLOSE)
    );
    assert_eq!(view.code, "");
    assert!(controller
        .panel_html()
        .contains(r#"<span class="search-result__code"></span>"#));
}

#[test]
fn test_data_index_counts_up() {
    let (mut controller, clock) = controller();
    type_and_settle(&mut controller, &clock, "cell");
    let html = controller.panel_html();
    for i in 0..4 {
        assert!(html.contains(&format!(r#"data-index="{}""#, i)));
    }
    assert!(!html.contains(r#"data-index="4""#));
}

#[test]
fn test_widget_fragment() {
    assert!(SEARCH_UI_HTML.starts_with(r#"<li class="search-container">"#));
    assert!(SEARCH_UI_HTML.contains(r#"class="search-bar__input""#));
    assert!(SEARCH_UI_HTML.contains(r#"class="search-results""#));
}

#[test]
fn test_prefix_table() {
    assert_eq!(path_prefix("/"), "");
    assert_eq!(path_prefix("/index.html"), "");
    assert_eq!(path_prefix("/subjects/chemistry/index.html"), "../../");
    assert_eq!(path_prefix("/subjects/chemistry/block-1/02-states-of-matter.html"), "../../../");
    assert_eq!(path_prefix("/tests/index.html"), "../");
    assert_eq!(path_prefix("/tests/chemistry/block-1/quiz.html"), "../../../");
}
