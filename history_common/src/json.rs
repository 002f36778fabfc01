//! JSON decoding and pretty-printing for response bodies.
//!
//! The history function serialises data frames, so indicator columns may carry
//! the bare `NaN`, `Infinity` and `-Infinity` tokens. `serde_json` rejects them;
//! [`parse_lenient`] swaps each one for a marker string before parsing and
//! [`to_pretty_ascii`] writes the marker back as the original token.
//!
//! Output is indented by two spaces and every character outside printable
//! ASCII is written as a lowercase `\uXXXX` escape (UTF-16 surrogate pairs
//! above the BMP).
use std::io;

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{CharEscape, Formatter, PrettyFormatter, Serializer};

use crate::result::Result;

/// Non-finite number tokens accepted outside string literals.
pub const NON_FINITE: [&str; 3] = ["NaN", "-Infinity", "Infinity"];

/// Wraps a non-finite token; private-use code points never appear in real payloads.
const MARKER: char = '\u{F8FF}';

fn marker(token: &str) -> String {
    format!("{MARKER}{token}{MARKER}")
}

/// Token carried by a marker string, if `s` is one.
fn non_finite_token(s: &str) -> Option<&'static str> {
    let inner = s.strip_prefix(MARKER)?.strip_suffix(MARKER)?;
    NON_FINITE.iter().copied().find(|t| *t == inner)
}

/// Parses `text` as JSON, also accepting the non-finite number tokens.
pub fn parse_lenient(text: &str) -> Option<Value> {
    if let Ok(value) = serde_json::from_str::<Value>(text) {
        return Some(value);
    }
    let substituted = substitute_non_finite(text)?;
    serde_json::from_str::<Value>(&substituted).ok()
}

/// Replaces non-finite tokens outside string literals with quoted markers.
///
/// Returns `None` when nothing was replaced.
fn substitute_non_finite(text: &str) -> Option<String> {
    let mut out = String::with_capacity(text.len() + 16);
    let mut rest = text;
    let mut in_string = false;
    let mut escaped = false;
    let mut changed = false;

    while let Some(c) = rest.chars().next() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
        } else if c == '"' {
            in_string = true;
        } else if let Some(token) = NON_FINITE.iter().find(|t| rest.starts_with(**t)) {
            out.push('"');
            out.push_str(&marker(token));
            out.push('"');
            rest = &rest[token.len()..];
            changed = true;
            continue;
        }
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }

    changed.then_some(out)
}

/// Two-space pretty printer that escapes non-ASCII and restores non-finite tokens.
///
/// Strings are buffered between `begin_string` and `end_string` so a marker can
/// be written back without quotes.
pub struct AsciiPrettyFormatter<'a> {
    pretty: PrettyFormatter<'a>,
    string: Vec<u8>,
    raw: String,
    had_escape: bool,
}

impl Default for AsciiPrettyFormatter<'_> {
    fn default() -> Self {
        Self {
            pretty: PrettyFormatter::with_indent(b"  "),
            string: Vec::new(),
            raw: String::new(),
            had_escape: false,
        }
    }
}

impl Formatter for AsciiPrettyFormatter<'_> {
    fn begin_string<W: ?Sized + io::Write>(&mut self, _writer: &mut W) -> io::Result<()> {
        self.string.clear();
        self.raw.clear();
        self.had_escape = false;
        Ok(())
    }

    fn end_string<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        if !self.had_escape {
            if let Some(token) = non_finite_token(&self.raw) {
                return writer.write_all(token.as_bytes());
            }
        }
        writer.write_all(b"\"")?;
        writer.write_all(&self.string)?;
        writer.write_all(b"\"")
    }

    fn write_string_fragment<W: ?Sized + io::Write>(
        &mut self,
        _writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        self.raw.push_str(fragment);
        let mut units = [0u16; 2];
        for c in fragment.chars() {
            if (' '..='~').contains(&c) {
                self.string.push(c as u8);
            } else {
                for unit in c.encode_utf16(&mut units) {
                    io::Write::write_fmt(&mut self.string, format_args!("\\u{:04x}", unit))?;
                }
            }
        }
        Ok(())
    }

    fn write_char_escape<W: ?Sized + io::Write>(
        &mut self,
        _writer: &mut W,
        char_escape: CharEscape,
    ) -> io::Result<()> {
        self.had_escape = true;
        self.pretty.write_char_escape(&mut self.string, char_escape)
    }

    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.pretty.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.pretty.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object_value(writer)
    }
}

/// Two-space indented, ASCII-only JSON.
pub fn to_pretty_ascii(value: &Value) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, AsciiPrettyFormatter::default());
    value.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pretty(text: &str) -> String {
        to_pretty_ascii(&parse_lenient(text).unwrap()).unwrap()
    }

    #[test]
    fn non_finite_tokens_round_trip() {
        assert_eq!(
            pretty(r#"[NaN, Infinity, -Infinity, 1]"#),
            "[\n  NaN,\n  Infinity,\n  -Infinity,\n  1\n]"
        );
    }

    #[test]
    fn tokens_inside_strings_are_left_alone() {
        let value = parse_lenient(r#"{"note":"NaN \"Infinity\"","x":NaN}"#).unwrap();
        assert_eq!(value["note"], "NaN \"Infinity\"");
        assert_eq!(
            to_pretty_ascii(&value).unwrap(),
            "{\n  \"note\": \"NaN \\\"Infinity\\\"\",\n  \"x\": NaN\n}"
        );
    }

    #[test]
    fn malformed_tokens_still_fail() {
        assert!(parse_lenient("[NaNa]").is_none());
        assert!(parse_lenient("[nan]").is_none());
        assert!(parse_lenient("not-json").is_none());
    }

    #[test]
    fn non_ascii_is_escaped() {
        assert_eq!(
            pretty(r#"{"error":"símbolo inválido"}"#),
            "{\n  \"error\": \"s\\u00edmbolo inv\\u00e1lido\"\n}"
        );
    }

    #[test]
    fn astral_characters_use_surrogate_pairs() {
        assert_eq!(pretty(r#"["📈"]"#), "[\n  \"\\ud83d\\udcc8\"\n]");
    }

    #[test]
    fn control_characters_use_short_escapes() {
        assert_eq!(pretty(r#"["a\nb\u0001\u007f"]"#), "[\n  \"a\\nb\\u0001\\u007f\"\n]");
    }

    #[test]
    fn large_integers_keep_every_digit() {
        assert_eq!(
            pretty("[123456789012345678901234, 1.5]"),
            "[\n  123456789012345678901234,\n  1.5\n]"
        );
    }

    #[test]
    fn empty_containers_stay_inline() {
        assert_eq!(pretty(r#"{"a":{},"b":[]}"#), "{\n  \"a\": {},\n  \"b\": []\n}");
    }
}
