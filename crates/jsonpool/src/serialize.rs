//! Compact textual output, built on the visitor dispatch.
//!
//! This is the minimal writer the model needs for `Display` and debugging:
//! one pass, no pretty-printing, raw fragments copied through verbatim.

use core::fmt::{self, Write};

use crate::{
    arena::{Arena, ListId},
    value::Value,
    visit::Visitor,
};

/// Writes the compact JSON form of `value` to `out`.
///
/// `Undefined` is written as `null`; `RawJson` fragments are emitted exactly
/// as stored, with no validation.
///
/// # Errors
///
/// Propagates the first error returned by `out`.
pub fn write_compact<'s, W: Write>(
    arena: &Arena<'s>,
    value: Value<'s>,
    out: &mut W,
) -> fmt::Result {
    let mut writer = CompactWriter {
        arena,
        out,
        state: Ok(()),
    };
    arena.accept(value, &mut writer);
    writer.state
}

struct CompactWriter<'a, 's, W: Write> {
    arena: &'a Arena<'s>,
    out: &'a mut W,
    state: fmt::Result,
}

impl<W: Write> CompactWriter<'_, '_, W> {
    fn emit(&mut self, write: impl FnOnce(&mut W) -> fmt::Result) {
        if self.state.is_ok() {
            self.state = write(self.out);
        }
    }
}

impl<'s, W: Write> Visitor<'s> for CompactWriter<'_, 's, W> {
    fn visit_null(&mut self) {
        self.emit(|out| out.write_str("null"));
    }

    fn visit_bool(&mut self, value: bool) {
        self.emit(|out| out.write_str(if value { "true" } else { "false" }));
    }

    fn visit_positive_integer(&mut self, magnitude: u64) {
        self.emit(|out| write!(out, "{magnitude}"));
    }

    fn visit_negative_integer(&mut self, magnitude: u64) {
        self.emit(|out| write!(out, "-{magnitude}"));
    }

    fn visit_float(&mut self, value: f64) {
        // JSON has no NaN or infinity literal.
        if value.is_finite() {
            self.emit(|out| write!(out, "{value}"));
        } else {
            self.emit(|out| out.write_str("null"));
        }
    }

    fn visit_string(&mut self, text: &str) {
        self.emit(|out| write_escaped(text, out));
    }

    fn visit_raw_json(&mut self, fragment: &str) {
        self.emit(|out| out.write_str(fragment));
    }

    fn visit_array(&mut self, array: ListId) {
        let arena = self.arena;
        self.emit(|out| out.write_char('['));
        let mut first = true;
        for value in arena.values(array) {
            if !first {
                self.emit(|out| out.write_char(','));
            }
            first = false;
            arena.accept(value, self);
        }
        self.emit(|out| out.write_char(']'));
    }

    fn visit_object(&mut self, object: ListId) {
        let arena = self.arena;
        self.emit(|out| out.write_char('{'));
        let mut first = true;
        for slot in arena.iter(object) {
            if !first {
                self.emit(|out| out.write_char(','));
            }
            first = false;
            let key = arena.key(slot).unwrap_or("");
            self.emit(|out| write_escaped(key, out));
            self.emit(|out| out.write_char(':'));
            arena.accept(arena.value(slot), self);
        }
        self.emit(|out| out.write_char('}'));
    }
}

/// Writes `text` as a quoted JSON string literal.
///
/// Quotes, backslashes, the U+2028/U+2029 separators, and control characters
/// in the basic multilingual plane get `\uXXXX` or short escapes; everything
/// else passes through.
fn write_escaped<W: Write>(text: &str, out: &mut W) -> fmt::Result {
    out.write_char('"')?;
    for c in text.chars() {
        match c {
            '"' => out.write_str("\\\"")?,
            '\\' => out.write_str("\\\\")?,
            '\n' => out.write_str("\\n")?,
            '\r' => out.write_str("\\r")?,
            '\t' => out.write_str("\\t")?,
            // Line and paragraph separators break some downstream parsers
            // when embedded raw.
            '\u{2028}' => out.write_str("\\u2028")?,
            '\u{2029}' => out.write_str("\\u2029")?,
            c if c.is_ascii_control() || (c.is_control() && (c as u32) <= 0xFFFF) => {
                write!(out, "\\u{:04X}", c as u32)?;
            }
            c => out.write_char(c)?,
        }
    }
    out.write_char('"')
}
