use rs_readable::{extract_file, extract_file_with_options, Error, Options, DEFAULT_INPUT_PATH};
use std::fs;

const PAGE: &str = "<html><head><title>Saved Page</title></head><body>\
    <nav>menu</nav>\
    <article><h1>Title</h1><p>Body text.</p></article>\
    </body></html>";

#[test]
fn missing_file_is_a_typed_error() {
    let result = extract_file("definitely/not/here/index.dom");
    match result {
        Err(Error::FileRead { path, source }) => {
            assert!(path.ends_with("index.dom"));
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected Err(FileRead), got {other:?}"),
    }
}

#[test]
fn missing_file_error_names_the_path() {
    let err = extract_file("definitely/not/here/index.dom").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("index.dom"));
    assert!(message.contains("failed to read"));
}

#[test]
fn default_input_path_is_the_observed_filename() {
    assert_eq!(DEFAULT_INPUT_PATH, "index.dom");
}

#[test]
fn extracts_article_from_saved_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DEFAULT_INPUT_PATH);
    fs::write(&path, PAGE).unwrap();

    let result = extract_file(&path).expect("saved page should extract");
    assert!(result.content_text.contains("Body text."));
    assert!(!result.content_text.contains("menu"));
}

#[test]
fn repeated_runs_on_unchanged_file_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DEFAULT_INPUT_PATH);
    fs::write(&path, PAGE).unwrap();

    let first = extract_file(&path).expect("first run");
    let second = extract_file(&path).expect("second run");

    assert_eq!(first.content_text, second.content_text);
    assert_eq!(first.content_html, second.content_html);
}

#[test]
fn empty_file_yields_defined_minimal_result() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DEFAULT_INPUT_PATH);
    fs::write(&path, b"").unwrap();

    let result = extract_file(&path).expect("empty file should yield a partial result");
    assert!(result.content_text.is_empty());
    assert!(!result.warnings.is_empty());
}

#[test]
fn empty_file_with_require_content_is_no_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DEFAULT_INPUT_PATH);
    fs::write(&path, b"").unwrap();

    let options = Options {
        require_content: true,
        ..Options::default()
    };
    let result = extract_file_with_options(&path, &options);
    assert!(matches!(result, Err(Error::NoContent)));
}
