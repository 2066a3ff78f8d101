//! Property tests for the editing engine
//!
//! Random checklists and selectors, checked against the guarantees every
//! edit makes: untouched lines survive verbatim, repeated edits settle, and
//! out-of-range positions are ignored.

use proptest::prelude::*;
use todo_md::domain::{Document, Edit, NewTask, Selector};

// Lines that exercise both classifications and odd whitespace
fn line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "# [a-zA-Z ]{0,20}",
        "[a-zA-Z0-9 .,!]{0,30}",
        " {0,6}- \\[[ x]\\] [a-zA-Z0-9 ]{0,20}",
        "[ \t]{0,3}- \\[[ x]\\] [a-z]{0,10}",
        "- \\[X\\] [a-z]{0,10}",
    ]
}

fn document_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(line_strategy(), 0..20)
}

// Selector text with indices that may run past the document
fn selector_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            (1usize..30).prop_map(|n| n.to_string()),
            (1usize..30, 0usize..10).prop_map(|(a, len)| format!("{}-{}", a, a + len)),
        ],
        0..5,
    )
    .prop_map(|tokens| tokens.join(","))
}

fn selection_edit(kind: u8, selector: Selector) -> Edit {
    match kind % 4 {
        0 => Edit::Indent { selector, steps: 1 },
        1 => Edit::Unindent { selector, steps: 1 },
        2 => Edit::Do(selector),
        _ => Edit::Undo(selector),
    }
}

proptest! {
    #[test]
    fn print_reproduces_input(lines in document_strategy()) {
        let text = lines.iter().map(|l| format!("{}\n", l)).collect::<String>();
        prop_assert_eq!(Document::parse(&text).to_string(), text);
    }

    #[test]
    fn mark_is_idempotent(
        lines in document_strategy(),
        sel in selector_strategy(),
        checked in any::<bool>(),
    ) {
        let selector: Selector = sel.parse().unwrap();
        let edit = if checked { Edit::Do(selector) } else { Edit::Undo(selector) };

        let mut once = Document::parse(&lines.join("\n"));
        edit.apply(&mut once).unwrap();
        let mut twice = once.clone();
        prop_assert_eq!(edit.apply(&mut twice).unwrap(), 0);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn selection_edits_leave_other_lines_alone(
        lines in document_strategy(),
        sel in selector_strategy(),
        kind in any::<u8>(),
    ) {
        let selector: Selector = sel.parse().unwrap();
        let before = Document::parse(&lines.join("\n"));
        let mut after = before.clone();
        selection_edit(kind, selector.clone()).apply(&mut after).unwrap();

        prop_assert_eq!(before.len(), after.len());
        for (index, line) in before.numbered() {
            if !selector.contains(index) {
                prop_assert_eq!(line.to_string(), after.get(index).unwrap().to_string());
            }
        }
    }

    #[test]
    fn out_of_range_indices_are_ignored(
        lines in document_strategy(),
        sel in selector_strategy(),
        kind in any::<u8>(),
    ) {
        let document = Document::parse(&lines.join("\n"));
        let selector: Selector = sel.parse().unwrap();
        let in_range: Vec<String> = selector
            .resolve(document.len())
            .iter()
            .map(|i| i.to_string())
            .collect();
        let trimmed: Selector = in_range.join(",").parse().unwrap();

        let mut with_extra = document.clone();
        let mut without = document.clone();
        selection_edit(kind, selector.clone()).apply(&mut with_extra).unwrap();
        selection_edit(kind, trimmed.clone()).apply(&mut without).unwrap();
        prop_assert_eq!(&with_extra, &without);

        let mut with_extra = document.clone();
        let mut without = document;
        Edit::Remove(selector).apply(&mut with_extra).unwrap();
        Edit::Remove(trimmed).apply(&mut without).unwrap();
        prop_assert_eq!(with_extra, without);
    }

    #[test]
    fn rm_shrinks_by_valid_selection(lines in document_strategy(), sel in selector_strategy()) {
        let mut document = Document::parse(&lines.join("\n"));
        let selector: Selector = sel.parse().unwrap();
        let len = document.len();
        let valid = selector.resolve(len).len();

        prop_assert_eq!(Edit::Remove(selector).apply(&mut document).unwrap(), valid);
        prop_assert_eq!(document.len(), len - valid);
    }

    #[test]
    fn rm_keeps_unselected_lines_in_order(
        lines in document_strategy(),
        sel in selector_strategy(),
    ) {
        let before = Document::parse(&lines.join("\n"));
        let selector: Selector = sel.parse().unwrap();
        let expected: Vec<String> = before
            .numbered()
            .filter(|(i, _)| !selector.contains(*i))
            .map(|(_, line)| line.to_string())
            .collect();

        let mut after = before.clone();
        Edit::Remove(selector).apply(&mut after).unwrap();
        let actual: Vec<String> = after.numbered().map(|(_, line)| line.to_string()).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn add_grows_by_one(lines in document_strategy(), position in prop::option::of(1usize..30)) {
        let mut document = Document::parse(&lines.join("\n"));
        let len = document.len();
        let task = NewTask { position, ..NewTask::new("added") };

        prop_assert_eq!(Edit::Add(task).apply(&mut document).unwrap(), 1);
        prop_assert_eq!(document.len(), len + 1);
    }

    #[test]
    fn mv_moves_exactly_one_line(
        lines in document_strategy(),
        from in 1usize..25,
        to in 1usize..25,
    ) {
        let before = Document::parse(&lines.join("\n"));
        let mut after = before.clone();
        Edit::Move { from, to }.apply(&mut after).unwrap();

        prop_assert_eq!(before.len(), after.len());
        if from <= before.len() {
            let moved = before.get(from).unwrap().to_string();
            let landed = to.min(before.len());
            prop_assert_eq!(after.get(landed).unwrap().to_string(), moved);
        } else {
            prop_assert_eq!(before, after);
        }
    }
}
