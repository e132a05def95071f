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

use smallstr::SmallString;

use crate::{StyleCode, StyleError};

/// One node of styled content, as produced by an editor surface rendering a
/// composed range collection back onto the buffer.
///
/// Invariant (owned by the producer): nesting order reflects temporal order of
/// application — the innermost element carries the most recently applied
/// style. Serialization's restore logic depends on that strict LIFO nesting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyledNode {
    /// Literal text, appended verbatim (the format has no in-band escape
    /// collision with the fixed palette).
    Text(sizing::NodeTextStorage),
    /// Rendered as a single newline character.
    LineBreak,
    /// Exactly one style code plus ordered children.
    Styled {
        code: StyleCode,
        children: Vec<StyledNode>,
    },
}

pub mod sizing {
    use super::SmallString;

    /// Stack allocated storage for leaf text; spills to the heap past this.
    pub const DEFAULT_NODE_TEXT_STORAGE_SIZE: usize = 16;
    pub type NodeTextStorage = SmallString<[u8; DEFAULT_NODE_TEXT_STORAGE_SIZE]>;
}

impl StyledNode {
    #[must_use]
    pub fn text(arg_text: impl AsRef<str>) -> StyledNode {
        StyledNode::Text(arg_text.as_ref().into())
    }

    #[must_use]
    pub fn line_break() -> StyledNode { StyledNode::LineBreak }

    #[must_use]
    pub fn styled(code: StyleCode, children: Vec<StyledNode>) -> StyledNode {
        StyledNode::Styled { code, children }
    }

    /// Untrusted entry point for building a styled element from a raw code,
    /// eg: one parsed out of an `ansi-<code>` marker. Fails fast with
    /// [`StyleError::UnknownStyleCode`] instead of silently defaulting a slot,
    /// which would emit escape sequences indistinguishable from a valid unset
    /// state.
    ///
    /// # Errors
    ///
    /// [`StyleError::UnknownStyleCode`] when `raw` is outside the palette.
    pub fn try_styled(raw: u8, children: Vec<StyledNode>) -> Result<StyledNode, StyleError> {
        Ok(StyledNode::Styled {
            code: StyleCode::try_from(raw)?,
            children,
        })
    }
}
