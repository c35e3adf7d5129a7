use super::*;

#[test]
fn description_text_passes_through_real_descriptions() {
    assert_eq!(description_text("d"), "d");
    assert_eq!(description_text("Capstone tracker"), "Capstone tracker");
}

#[test]
fn description_text_substitutes_blank_descriptions() {
    assert_eq!(description_text(""), EMPTY_DESCRIPTION_TEXT);
    assert_eq!(description_text("   "), EMPTY_DESCRIPTION_TEXT);
}

#[test]
fn card_links_to_project_detail() {
    assert_eq!(project_path(1), "/projects/1");
    assert_eq!(project_path(42), "/projects/42");
}
