use rs_readable::encoding::{detect_encoding, transcode_to_utf8};
use rs_readable::{extract_bytes_with_options, Options};

fn baseline_only() -> Options {
    Options {
        use_readability: false,
        ..Options::default()
    }
}

#[test]
fn windows1252_page_extracts_with_correct_characters() {
    // 0xE9 = e-acute in windows-1252
    let html: Vec<u8> = b"<html><head><meta charset=\"windows-1252\"></head><body>\
        <article><p>Caf\xE9 culture, one paragraph of article text.</p></article>\
        </body></html>"
        .to_vec();

    let result = extract_bytes_with_options(&html, &baseline_only()).expect("should extract");
    assert!(result.content_text.contains("Caf\u{E9} culture"));
}

#[test]
fn utf8_bom_page_extracts_cleanly() {
    let mut html = b"\xEF\xBB\xBF".to_vec();
    html.extend_from_slice(
        b"<html><body><article><p>After the byte-order mark.</p></article></body></html>",
    );

    let result = extract_bytes_with_options(&html, &baseline_only()).expect("should extract");
    assert!(result.content_text.contains("After the byte-order mark."));
}

#[test]
fn utf16le_page_is_transcoded_before_extraction() {
    let source = "<html><body><article><p>Wide characters here.</p></article></body></html>";
    let mut html = vec![0xFF, 0xFE]; // UTF-16LE BOM
    for unit in source.encode_utf16() {
        html.extend_from_slice(&unit.to_le_bytes());
    }

    assert_eq!(detect_encoding(&html).name(), "UTF-16LE");
    let result = extract_bytes_with_options(&html, &baseline_only()).expect("should extract");
    assert!(result.content_text.contains("Wide characters here."));
}

#[test]
fn transcode_defaults_to_utf8() {
    let html = "<html><body>caf\u{E9}</body></html>".as_bytes();
    assert_eq!(
        transcode_to_utf8(html),
        "<html><body>caf\u{E9}</body></html>"
    );
}

#[test]
fn invalid_bytes_never_fail_extraction() {
    let html = b"<html><body><article><p>Valid \xFF\xFE text.</p></article></body></html>";
    let result = extract_bytes_with_options(html, &baseline_only()).expect("should extract");
    assert!(result.content_text.contains("Valid"));
    assert!(result.content_text.contains("text."));
}
