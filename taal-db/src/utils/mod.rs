use serde::ser::Error as _;
use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use std::io;
use taal_api::TaalResult;

/// [`Formatter`] producing the separators and escapes of canonical ids:
/// - `", "` between items and `": "` between keys and values
/// - every non-ASCII character and DEL escaped as `\uXXXX` (UTF-16 code units)
struct CanonicalFormatter;

impl Formatter for CanonicalFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut units = [0u16; 2];
        for ch in fragment.chars() {
            if ch.is_ascii() && ch != '\u{7f}' {
                writer.write_all(&[ch as u8])?;
            } else {
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{unit:04x}")?;
                }
            }
        }
        Ok(())
    }
}

/// Renders `value` as canonical JSON text.
///
/// The output is stable across runs and matches the identifiers already
/// held by existing translation stores. Object keys keep map order.
pub fn canonical_json<T: Serialize + ?Sized>(value: &T) -> TaalResult<String> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, CanonicalFormatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8(buf).map_err(serde_json::Error::custom)?)
}

/// Canonical JSON array of strings, e.g. `["Animal", "name"]`.
pub fn canonical_string_list(items: &[&str]) -> TaalResult<String> {
    canonical_json(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_separators() {
        assert_eq!(
            canonical_json(&json!([["customfieldsentity", "id", 0]])).unwrap(),
            r#"[["customfieldsentity", "id", 0]]"#
        );
        assert_eq!(
            canonical_json(&json!({"a": 1, "b": null})).unwrap(),
            r#"{"a": 1, "b": null}"#
        );
        assert_eq!(canonical_json(&json!([])).unwrap(), "[]");
    }

    #[test]
    fn test_string_list() {
        assert_eq!(canonical_string_list(&["Animal", "name"]).unwrap(), r#"["Animal", "name"]"#);
        assert_eq!(canonical_string_list(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_escapes() {
        assert_eq!(canonical_json(&json!("caf\u{e9}")).unwrap(), r#""caf\u00e9""#);
        assert_eq!(canonical_json(&json!("\u{1F600}")).unwrap(), r#""\ud83d\ude00""#);
        assert_eq!(canonical_json(&json!("a\"b\\c\n")).unwrap(), r#""a\"b\\c\n""#);
        assert_eq!(canonical_json(&json!("\u{01}")).unwrap(), r#""\u0001""#);
        assert_eq!(canonical_json(&json!("\u{7f}")).unwrap(), r#""\u007f""#);
        assert_eq!(canonical_string_list(&["Caf\u{e9}", "n"]).unwrap(), r#"["Caf\u00e9", "n"]"#);
    }

    #[test]
    fn test_scalars() {
        assert_eq!(canonical_json(&json!(true)).unwrap(), "true");
        assert_eq!(canonical_json(&json!(1.5)).unwrap(), "1.5");
        assert_eq!(canonical_json(&json!(-3)).unwrap(), "-3");
    }
}
