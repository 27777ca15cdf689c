use std::fs;

use pretty_assertions::assert_eq;
use tag_cloud::{Config, FontScale, SeparatorSet, TagCloudError, run};
use tempfile::TempDir;

fn spans(html: &str) -> Vec<&str> {
    html.lines().filter(|l| l.starts_with("<span")).collect()
}

#[test]
fn writes_cloud_for_small_text() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("cat.txt");
    let output = temp.path().join("cat.html");
    fs::write(&input, "The cat sat on the mat.\nthe CAT ran.\n").unwrap();

    let mut config = Config::new(&input, &output, 3);
    config.separators = SeparatorSet::new(" .,");
    let summary = run(&config).unwrap();

    assert_eq!(summary.distinct_words, 6);
    assert_eq!(summary.total_words, 9);
    assert_eq!(summary.output, output);

    let html = fs::read_to_string(&output).unwrap();
    assert_eq!(
        spans(&html),
        vec![
            "<span style=\"cursor:default\" class=\"f29\" title=\"count: 2\">cat</span>",
            "<span style=\"cursor:default\" class=\"f0\" title=\"count: 1\">mat</span>",
            "<span style=\"cursor:default\" class=\"f48\" title=\"count: 3\">the</span>",
        ]
    );
    assert!(html.contains(&format!("<title>Top 3 words in {}</title>", input.display())));
    assert!(!html.contains("name=\"generated\""));
}

#[test]
fn empty_input_gives_empty_cloud() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("empty.txt");
    let output = temp.path().join("empty.html");
    fs::write(&input, "").unwrap();

    let summary = run(&Config::new(&input, &output, 10)).unwrap();
    assert!(summary.entries.is_empty());

    let html = fs::read_to_string(&output).unwrap();
    assert!(spans(&html).is_empty());
    assert!(html.contains("<p class=\"cbox\">"));
}

#[test]
fn default_separators_and_custom_font_range() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("in.txt");
    let output = temp.path().join("out.html");
    fs::write(&input, "a-b (a) [a] {c}\t\"b\" d's d's\n").unwrap();

    let mut config = Config::new(&input, &output, 2);
    config.font_scale = FontScale::new(20, 30).unwrap();
    let summary = run(&config).unwrap();

    let got: Vec<(&str, usize, u32)> = summary
        .entries
        .iter()
        .map(|e| (e.word.as_str(), e.count, e.font_size))
        .collect();
    // a:3, b:2, d:2, s:2, c:1; ties at 2 resolve to "b"
    assert_eq!(got, vec![("a", 3, 30), ("b", 2, 0)]);
}

#[test]
fn missing_input_leaves_no_output() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("nope.txt");
    let output = temp.path().join("out.html");

    let err = run(&Config::new(&input, &output, 5)).unwrap_err();
    assert!(matches!(err, TagCloudError::InputNotFound { ref path, .. } if *path == input));
    assert!(!output.exists());
}

#[test]
fn invalid_utf8_is_a_read_error() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("binary.txt");
    let output = temp.path().join("out.html");
    fs::write(&input, [b'o', b'k', b'\n', 0xff, 0xfe, b'\n']).unwrap();

    let err = run(&Config::new(&input, &output, 5)).unwrap_err();
    assert!(matches!(err, TagCloudError::InputRead { .. }));
    assert!(!output.exists());
}

#[test]
fn unwritable_output_is_reported() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("in.txt");
    fs::write(&input, "words words").unwrap();
    let output = temp.path().join("missing_dir").join("out.html");

    let err = run(&Config::new(&input, &output, 1)).unwrap_err();
    assert!(matches!(err, TagCloudError::OutputWriteFailure { .. }));
}

#[test]
fn existing_output_is_replaced() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("in.txt");
    let output = temp.path().join("out.html");
    fs::write(&input, "one two two").unwrap();
    fs::write(&output, "stale").unwrap();

    run(&Config::new(&input, &output, 2)).unwrap();
    let html = fs::read_to_string(&output).unwrap();
    assert!(!html.contains("stale"));
    assert_eq!(spans(&html).len(), 2);
}
