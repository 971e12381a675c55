use super::*;

#[test]
fn plain_display_numbers_lines_with_padding() {
    let code = (1..=10).map(|i| format!("l{i}")).collect::<Vec<_>>().join("\n");
    let view = PlainCodeDisplay.render(
        &code,
        "main.go",
        CodeDisplayOptions {
            show_line_numbers: true,
        },
    );
    assert_eq!(view.filename, "main.go");
    assert_eq!(view.lines[0], " 1 | l1");
    assert_eq!(view.lines[9], "10 | l10");
}

#[test]
fn plain_display_without_numbers_is_verbatim() {
    let snippet = CodeSnippet::new("a := 1\nb := 2", "run.go").line_numbers(false);
    let view = PlainCodeDisplay.render_snippet(&snippet);
    assert_eq!(view.lines, vec!["a := 1", "b := 2"]);
}
