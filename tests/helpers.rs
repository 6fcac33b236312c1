use im_switch::model::{InputSource, KEYBOARD_CATEGORY};
use im_switch::{format_source, format_transition};

fn keyboard(id: &str, name: &str, selected: bool) -> InputSource {
    InputSource {
        id: id.to_string(),
        localized_name: name.to_string(),
        select_capable: true,
        category: KEYBOARD_CATEGORY.to_string(),
        selected,
    }
}

#[test]
fn plain_row_is_the_bare_identifier() {
    let source = keyboard("com.apple.keylayout.ABC", "ABC", false);
    assert_eq!(format_source(&source, false), "com.apple.keylayout.ABC");
}

#[test]
fn plain_row_ignores_selection_state() {
    let source = keyboard("com.apple.keylayout.ABC", "ABC", true);
    assert!(format_source(&source, true).starts_with('*'));
    assert_eq!(format_source(&source, false), "com.apple.keylayout.ABC");
}

#[test]
fn verbose_row_marks_the_selected_source() {
    let source = keyboard("B", "Dvorak", true);
    assert_eq!(format_source(&source, true), "* B (Dvorak)");
}

#[test]
fn verbose_row_pads_unselected_sources() {
    let source = keyboard("A", "ABC", false);
    assert_eq!(format_source(&source, true), "  A (ABC)");
}

#[test]
fn verbose_rows_align_across_a_listing() {
    let sources = [keyboard("A", "ABC", false), keyboard("B", "Dvorak", true)];
    let rows: Vec<String> = sources.iter().map(|s| format_source(s, true)).collect();
    assert_eq!(rows.join("\n"), "  A (ABC)\n* B (Dvorak)");
}

#[test]
fn transition_uses_localized_names() {
    let before = keyboard("com.apple.keylayout.US", "U.S.", true);
    let after = keyboard("com.apple.keylayout.Dvorak", "Dvorak", false);
    assert_eq!(format_transition(&before, &after), "U.S. -> Dvorak");
}

#[test]
fn transition_with_a_single_source_repeats_it() {
    let only = keyboard("com.apple.keylayout.ABC", "ABC", true);
    assert_eq!(format_transition(&only, &only), "ABC -> ABC");
}
