//! Append-only builder for page content streams.
//!
//! Operators are written one per line in call order. Graphics state (colors,
//! line width) is whatever the PDF interpreter carries forward; the builder
//! does not track it.

use std::fmt::Write;

use crate::fonts::BuiltinFont;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb(pub f32, pub f32, pub f32);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0.0, 0.0, 0.0);
    pub const WHITE: Rgb = Rgb(1.0, 1.0, 1.0);
}

#[derive(Default)]
pub struct ContentStream {
    buf: String,
}

impl ContentStream {
    pub fn new() -> Self {
        Self::default()
    }

    fn op(&mut self, args: std::fmt::Arguments<'_>) {
        if !self.buf.is_empty() {
            self.buf.push('\n');
        }
        // Writing into a String cannot fail.
        let _ = self.buf.write_fmt(args);
    }

    pub fn text(&mut self, x: f32, y: f32, s: &str, size: f32, bold: bool) {
        let font = BuiltinFont::for_weight(bold).resource_name();
        self.op(format_args!(
            "BT /{font} {size} Tf {x} {y} Td ({}) Tj ET",
            escape_text(s)
        ));
    }

    pub fn rect(&mut self, x: f32, y: f32, w: f32, h: f32, filled: bool) {
        let paint = if filled { "f" } else { "S" };
        self.op(format_args!("{x} {y} {w} {h} re {paint}"));
    }

    pub fn set_fill_color(&mut self, Rgb(r, g, b): Rgb) {
        self.op(format_args!("{r} {g} {b} rg"));
    }

    pub fn set_stroke_color(&mut self, Rgb(r, g, b): Rgb) {
        self.op(format_args!("{r} {g} {b} RG"));
    }

    pub fn set_line_width(&mut self, w: f32) {
        self.op(format_args!("{w} w"));
    }

    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.op(format_args!("{x1} {y1} m {x2} {y2} l S"));
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

/// Escapes a string for use inside a `( ... )` literal. The standard fonts
/// carry no glyphs outside printable ASCII, so anything else becomes `?`.
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '(' | ')' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            ' '..='~' => out.push(c),
            _ => out.push('?'),
        }
    }
    out
}
