/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! The fixed SGR palette understood by chat-client codeblock renderers.
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR_(Select_Graphic_Rendition)_parameters>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>

use strum_macros::{EnumCount, EnumIter, FromRepr};

use crate::StyleError;

/// One style code from the fixed palette. The numeric discriminant is the SGR
/// parameter that gets emitted on the wire.
///
/// The codes are partitioned into three disjoint slot classes (see
/// [`SlotClass`]):
/// - `< 30` is a text decoration (bold, underline).
/// - `30..=39` is a foreground color.
/// - `>= 40` is a background color.
///
/// Each slot holds at most one active code at a time; applying a second code of
/// the same class supersedes the first within the affected region.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumCount, EnumIter, FromRepr)]
pub enum StyleCode {
    Bold = 1,
    Underline = 4,
    FgDarkGray = 30,
    FgRed = 31,
    FgGreen = 32,
    FgGold = 33,
    FgBlue = 34,
    FgPink = 35,
    FgTeal = 36,
    FgWhite = 37,
    BgBlack = 40,
    BgRust = 41,
    BgGray40 = 42,
    BgGray45 = 43,
    BgGray55 = 44,
    BgBlurple = 45,
    BgGray60 = 46,
    BgCream = 47,
}

/// Which of the three style-state slots a [`StyleCode`] occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotClass {
    Decoration,
    Foreground,
    Background,
}

impl StyleCode {
    /// The raw SGR parameter for this code.
    #[must_use]
    pub fn sgr_param(&self) -> u8 { *self as u8 }

    /// The slot class is derived from the numeric partition of the palette.
    #[rustfmt::skip]
    #[must_use]
    pub fn slot_class(&self) -> SlotClass {
        match self.sgr_param() {
            code if code < 30 => SlotClass::Decoration,
            code if code < 40 => SlotClass::Foreground,
            _                 => SlotClass::Background,
        }
    }

    /// Human readable palette name, suitable for tooltips and swatch labels.
    #[rustfmt::skip]
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            StyleCode::Bold       => "Bold",
            StyleCode::Underline  => "Underline",
            StyleCode::FgDarkGray => "Dark Gray (33%)",
            StyleCode::FgRed      => "Red",
            StyleCode::FgGreen    => "Yellowish Green",
            StyleCode::FgGold     => "Gold",
            StyleCode::FgBlue     => "Light Blue",
            StyleCode::FgPink     => "Pink",
            StyleCode::FgTeal     => "Teal",
            StyleCode::FgWhite    => "White",
            StyleCode::BgBlack    => "Blueish Black",
            StyleCode::BgRust     => "Rust Brown",
            StyleCode::BgGray40   => "Gray (40%)",
            StyleCode::BgGray45   => "Gray (45%)",
            StyleCode::BgGray55   => "Light Gray (55%)",
            StyleCode::BgBlurple  => "Blurple",
            StyleCode::BgGray60   => "Light Gray (60%)",
            StyleCode::BgCream    => "Cream White",
        }
    }

    /// The RGB swatch value a UI would use to preview this code. Decoration
    /// codes have no color of their own and return [`None`].
    #[rustfmt::skip]
    #[must_use]
    pub fn as_rgb(&self) -> Option<RgbColor> {
        let it = match self {
            StyleCode::Bold | StyleCode::Underline => return None,
            StyleCode::FgDarkGray => RgbColor { red:  79, green:  84, blue:  92 },
            StyleCode::FgRed      => RgbColor { red: 220, green:  50, blue:  47 },
            StyleCode::FgGreen    => RgbColor { red: 133, green: 153, blue:   0 },
            StyleCode::FgGold     => RgbColor { red: 181, green: 137, blue:   0 },
            StyleCode::FgBlue     => RgbColor { red:  38, green: 139, blue: 210 },
            StyleCode::FgPink     => RgbColor { red: 211, green:  54, blue: 130 },
            StyleCode::FgTeal     => RgbColor { red:  42, green: 161, blue: 152 },
            StyleCode::FgWhite    => RgbColor { red: 255, green: 255, blue: 255 },
            StyleCode::BgBlack    => RgbColor { red:   0, green:  43, blue:  54 },
            StyleCode::BgRust     => RgbColor { red: 203, green:  75, blue:  22 },
            StyleCode::BgGray40   => RgbColor { red:  88, green: 110, blue: 117 },
            StyleCode::BgGray45   => RgbColor { red: 101, green: 123, blue: 131 },
            StyleCode::BgGray55   => RgbColor { red: 131, green: 148, blue: 150 },
            StyleCode::BgBlurple  => RgbColor { red: 108, green: 113, blue: 196 },
            StyleCode::BgGray60   => RgbColor { red: 147, green: 161, blue: 161 },
            StyleCode::BgCream    => RgbColor { red: 253, green: 246, blue: 227 },
        };
        Some(it)
    }
}

/// An RGB triple for palette swatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

/// These trait implementations allow raw `u8` codes (eg: parsed out of an
/// `ansi-<code>` marker) to be converted into [`StyleCode`]. Anything outside
/// the palette is rejected before it can reach a range collection or the
/// serializer.
mod convert_between_style_code_and_u8 {
    use super::{StyleCode, StyleError};

    impl TryFrom<u8> for StyleCode {
        type Error = StyleError;

        fn try_from(raw: u8) -> Result<Self, Self::Error> {
            StyleCode::from_repr(raw).ok_or(StyleError::UnknownStyleCode { raw })
        }
    }

    impl From<StyleCode> for u8 {
        fn from(code: StyleCode) -> Self { code.sgr_param() }
    }
}

/// The edit a user action requests over a selection: apply one concrete style
/// code, or clear all styling. Clearing is the raw code `0` in the wire
/// format, which is why it is modeled as an action and not a [`StyleCode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleAction {
    Apply(StyleCode),
    ClearAll,
}

mod convert_between_style_action_and_u8 {
    use super::{StyleAction, StyleCode, StyleError};

    impl TryFrom<u8> for StyleAction {
        type Error = StyleError;

        fn try_from(raw: u8) -> Result<Self, Self::Error> {
            match raw {
                0 => Ok(StyleAction::ClearAll),
                _ => Ok(StyleAction::Apply(StyleCode::try_from(raw)?)),
            }
        }
    }
}
