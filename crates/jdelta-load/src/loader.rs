use std::path::Path;

use jdelta_types::Value;
use serde::Deserialize;
use tracing::debug;

use crate::encoding::{decode, Encoding};
use crate::error::{LoadError, LoadResult};

/// Characters of context kept on each side of a parse error.
const SNIPPET_RADIUS: usize = 20;

/// Deepest container nesting a document may have.
pub const MAX_NESTING: usize = 4096;

/// A parsed document and the name it was loaded under.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub name: String,
    pub root: Value,
}

/// Read, decode and parse the file at `path`.
pub fn load_document(path: &Path, encoding: Encoding) -> LoadResult<Document> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let name = path.display().to_string();
    debug!(path = %name, bytes = bytes.len(), %encoding, "read document");

    let text = decode(&name, &bytes, encoding)?;
    parse_document(&name, &text)
}

/// Parse JSON text into a [`Document`] labelled `name`.
///
/// Nesting is only bounded by [`MAX_NESTING`]; the comparator's own depth
/// limit decides what happens below that.
pub fn parse_document(name: &str, text: &str) -> LoadResult<Document> {
    if let Some(offset) = nesting_overflow(text, MAX_NESTING) {
        return Err(LoadError::TooDeep {
            source_name: name.to_string(),
            limit: MAX_NESTING,
            offset,
        });
    }

    let json = parse_json(text).map_err(|e| {
        let offset = byte_offset(text, e.line(), e.column());
        LoadError::Parse {
            source_name: name.to_string(),
            offset,
            line: e.line(),
            column: e.column(),
            snippet: snippet(text, offset),
            message: e.to_string(),
        }
    })?;

    let root = Value::from(json);
    debug!(name, depth = root.depth(), "parsed document");
    Ok(Document {
        name: name.to_string(),
        root,
    })
}

fn parse_json(text: &str) -> serde_json::Result<serde_json::Value> {
    let mut de = serde_json::Deserializer::from_str(text);
    de.disable_recursion_limit();
    let json = serde_json::Value::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(json)
}

/// Byte offset of the first bracket that opens level `limit + 1`, if any.
/// Brackets inside strings do not count; malformed text is left to the parser.
fn nesting_overflow(text: &str, limit: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for (offset, byte) in text.bytes().enumerate() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'[' | b'{' => {
                depth += 1;
                if depth > limit {
                    return Some(offset);
                }
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    None
}

/// Convert serde_json's 1-based line and column into a byte offset,
/// clamped to the text and moved back onto a char boundary.
fn byte_offset(text: &str, line: usize, column: usize) -> usize {
    let line_start: usize = text
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    let mut offset = (line_start + column.saturating_sub(1)).min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// Up to [`SNIPPET_RADIUS`] characters either side of `offset`, on one line.
fn snippet(text: &str, offset: usize) -> String {
    let before: String = text[..offset]
        .chars()
        .rev()
        .take(SNIPPET_RADIUS)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    let after: String = text[offset..].chars().take(SNIPPET_RADIUS).collect();
    format!("{before}{after}")
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use jdelta_types::Kind;
    use tempfile::NamedTempFile;

    #[test]
    fn parses_valid_json() {
        let doc = parse_document("inline", r#"{"a": [1, 2], "b": null}"#).unwrap();
        assert_eq!(doc.name, "inline");
        assert_eq!(doc.root.kind(), Kind::Mapping);
        assert_eq!(doc.root.get("a").and_then(Value::len), Some(2));
    }

    #[test]
    fn parse_error_is_located() {
        let text = "{\n  \"a\": 1,\n  \"b\": tru\n}";
        let err = parse_document("broken.json", text).unwrap_err();
        assert_eq!(err.code(), "PARSE_ERROR");
        match err {
            LoadError::Parse {
                source_name,
                offset,
                line,
                snippet,
                ..
            } => {
                assert_eq!(source_name, "broken.json");
                assert_eq!(line, 3);
                assert!(offset > text.find("tru").unwrap());
                assert!(offset <= text.len());
                assert!(snippet.contains("tru"));
                assert!(!snippet.contains('\n'));
            }
            other => panic!("expected Parse, got {:?}", other),
        }
    }

    #[test]
    fn trailing_garbage_is_parse_error() {
        let err = parse_document("x", "[1] [2]").unwrap_err();
        assert!(matches!(err, LoadError::Parse { line: 1, .. }));
    }

    #[test]
    fn empty_input_is_parse_error() {
        let err = parse_document("empty", "").unwrap_err();
        assert!(matches!(err, LoadError::Parse { offset: 0, .. }));
    }

    #[test]
    fn nesting_past_serde_json_default_loads() {
        let text = format!("{}1{}", "[".repeat(200), "]".repeat(200));
        let doc = parse_document("deep.json", &text).unwrap();
        assert_eq!(doc.root.depth(), 200);
    }

    #[test]
    fn nesting_past_max_is_depth_error() {
        let text = format!("{}{}", "[".repeat(MAX_NESTING + 1), "]".repeat(MAX_NESTING + 1));
        let err = parse_document("deep.json", &text).unwrap_err();
        assert_eq!(err.code(), "DEPTH_ERROR");
        assert!(matches!(
            err,
            LoadError::TooDeep { limit: MAX_NESTING, offset, .. } if offset == MAX_NESTING
        ));
    }

    #[test]
    fn brackets_in_strings_do_not_nest() {
        assert_eq!(nesting_overflow(r#"["[[[", {"k": "{\"["}]"#, 2), None);
        assert_eq!(nesting_overflow("[[1]]", 1), Some(1));
        assert_eq!(nesting_overflow("[1] [2]", 1), None);
    }

    #[test]
    fn offsets_respect_multibyte_text() {
        let text = "[\"ø\", ]";
        assert!(text.is_char_boundary(byte_offset(text, 1, 4)));
        assert_eq!(byte_offset(text, 1, 1), 0);
        assert_eq!(byte_offset(text, 9, 9), text.len());
    }

    #[test]
    fn snippet_is_bounded() {
        let text = "x".repeat(100);
        assert_eq!(snippet(&text, 50).chars().count(), 2 * SNIPPET_RADIUS);
        assert_eq!(snippet(&text, 0).chars().count(), SNIPPET_RADIUS);
    }

    #[test]
    fn loads_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"kunde": "Søren", "beløb": 12.5}}"#).unwrap();

        let doc = load_document(file.path(), Encoding::Utf8).unwrap();
        assert_eq!(doc.name, file.path().display().to_string());
        assert_eq!(doc.root.get("kunde"), Some(&Value::from("Søren")));
    }

    #[test]
    fn loads_windows1252_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{\"navn\": \"S\xF8ren\"}").unwrap();

        assert!(matches!(
            load_document(file.path(), Encoding::Utf8),
            Err(LoadError::Decode { .. })
        ));
        let doc = load_document(file.path(), Encoding::Windows1252).unwrap();
        assert_eq!(doc.root.get("navn"), Some(&Value::from("Søren")));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let err = load_document(&path, Encoding::Utf8).unwrap_err();
        assert_eq!(err.code(), "IO_ERROR");
        assert!(err.to_string().contains("missing.json"));
    }
}
