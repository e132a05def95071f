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

/// Failure conditions for the style composer and serializer.
///
/// The core operations are total over their documented preconditions, so the
/// only errors are precondition violations surfaced by the caller-facing entry
/// points. Both variants fail fast instead of silently clamping or defaulting,
/// so that caller bugs stay visible.
///
/// | Variant              | Cause                                                 |
/// | :------------------- | :---------------------------------------------------- |
/// | [`InvalidRange`]     | Selection offsets inverted or past the end of buffer  |
/// | [`UnknownStyleCode`] | Raw code outside the decoration / fg / bg partition   |
///
/// [`InvalidRange`]: Self::InvalidRange
/// [`UnknownStyleCode`]: Self::UnknownStyleCode
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum StyleError {
    /// Selection does not satisfy `start <= end <= buffer_len`.
    #[error("invalid selection [{start}, {end}) over buffer of length {buffer_len}")]
    #[diagnostic(
        code(ansi_codeblock::invalid_range),
        help(
            "Clamp the selection to the buffer before calling; offsets are \
             half-open character indices."
        )
    )]
    InvalidRange {
        start: usize,
        end: usize,
        buffer_len: usize,
    },

    /// Raw code is not in the fixed palette (decoration `1`/`4`, foreground
    /// `30`-`37`, background `40`-`47`).
    #[error("unknown style code {raw}")]
    #[diagnostic(
        code(ansi_codeblock::unknown_style_code),
        help(
            "Only codes 1, 4, 30-37 and 40-47 are styleable; 0 is the clear \
             action, not a style."
        )
    )]
    UnknownStyleCode { raw: u8 },
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::StyleError;

    #[test]
    fn display_invalid_range() {
        let err = StyleError::InvalidRange {
            start: 3,
            end: 9,
            buffer_len: 5,
        };
        assert_eq!(
            err.to_string(),
            "invalid selection [3, 9) over buffer of length 5"
        );
    }

    #[test]
    fn display_unknown_style_code() {
        let err = StyleError::UnknownStyleCode { raw: 99 };
        assert_eq!(err.to_string(), "unknown style code 99");
    }
}
