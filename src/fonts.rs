//! The two standard Type1 faces every report page uses. Nothing is embedded;
//! readers supply Helvetica themselves, so text is limited to WinAnsi-safe ASCII.

use crate::pdf::writer::ObjRef;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuiltinFont {
    Regular,
    Bold,
}

impl BuiltinFont {
    pub const ALL: [BuiltinFont; 2] = [BuiltinFont::Regular, BuiltinFont::Bold];

    pub fn for_weight(bold: bool) -> Self {
        if bold { BuiltinFont::Bold } else { BuiltinFont::Regular }
    }

    /// Resource name used by `Tf` operators and the page `/Font` dictionary.
    pub fn resource_name(self) -> &'static str {
        match self {
            BuiltinFont::Regular => "F1",
            BuiltinFont::Bold => "F2",
        }
    }

    pub fn base_font(self) -> &'static str {
        match self {
            BuiltinFont::Regular => "Helvetica",
            BuiltinFont::Bold => "Helvetica-Bold",
        }
    }

    pub fn object_id(self) -> ObjRef {
        match self {
            BuiltinFont::Regular => ObjRef::FONT_REGULAR,
            BuiltinFont::Bold => ObjRef::FONT_BOLD,
        }
    }

    pub fn dictionary(self) -> String {
        format!(
            "<< /Type /Font /Subtype /Type1 /BaseFont /{} /Encoding /WinAnsiEncoding >>",
            self.base_font()
        )
    }
}
