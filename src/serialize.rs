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

//! Depth-first serialization of a [`StyledNode`] forest into an SGR escape
//! stream, with save/restore semantics at every nesting boundary.

use std::fmt::Write as _;

use smallstr::SmallString;
use smallvec::{SmallVec, smallvec};

use crate::{SgrSequence, StyleState, StyledNode};

pub mod sizing {
    use super::{SmallString, SmallVec, StyleState};

    /// Serialized output storage; document scale inputs spill to the heap.
    pub const DEFAULT_SERIALIZED_STORAGE_SIZE: usize = 64;
    pub type SerializedText = SmallString<[u8; DEFAULT_SERIALIZED_STORAGE_SIZE]>;

    /// Stack depth equals tree nesting depth, which stays tiny in practice.
    pub const MAX_STATE_STACK_SIZE: usize = 8;
    pub type InlineVecStateStack = SmallVec<[StyleState; MAX_STATE_STACK_SIZE]>;
}

/// Serialize a forest starting from the all-unset style state.
#[must_use]
pub fn serialize(nodes: &[StyledNode]) -> sizing::SerializedText {
    serialize_with(nodes, StyleState::default())
}

/// Serialize a forest starting from a caller-provided initial state.
///
/// Walk rules, per node:
/// - Text leaf: literal text, no escaping.
/// - Line break: a single `\n`.
/// - Styled element: push `top.apply(code)` and emit its introduce sequence;
///   recurse; pop; emit the unconditional full reset; then re-introduce the
///   parent state iff it has any set slot, so sibling content continues in
///   the correct style. SGR has no per-slot clear, so the reset-then-
///   reintroduce pair is exact and never diffed away, even when only one slot
///   actually changed.
///
/// The state stack is local to this invocation; after a full walk it is back
/// to just the initial state.
#[must_use]
pub fn serialize_with(
    nodes: &[StyledNode],
    initial_state: StyleState,
) -> sizing::SerializedText {
    tracing::debug!(node_count = nodes.len(), "serializing styled node forest");

    let mut acc = sizing::SerializedText::new();
    let mut stack: sizing::InlineVecStateStack = smallvec![initial_state];
    walk(nodes, &mut stack, &mut acc);
    debug_assert_eq!(stack.as_slice(), &[initial_state]);
    acc
}

fn walk(
    nodes: &[StyledNode],
    stack: &mut sizing::InlineVecStateStack,
    acc: &mut sizing::SerializedText,
) {
    for node in nodes {
        match node {
            StyledNode::Text(text) => acc.push_str(text),
            StyledNode::LineBreak => acc.push('\n'),
            StyledNode::Styled { code, children } => {
                let parent_state = stack.last().copied().unwrap_or_default();
                let new_state = parent_state.apply(*code);
                stack.push(new_state);
                emit_introduce(&new_state, acc);

                walk(children, stack, acc);

                stack.pop();
                emit(&SgrSequence::Reset, acc);
                emit_introduce(&parent_state, acc);
            }
        }
    }
}

fn emit_introduce(state: &StyleState, acc: &mut sizing::SerializedText) {
    if let Some(sequence) = SgrSequence::introduce(state) {
        emit(&sequence, acc);
    }
}

fn emit(sequence: &SgrSequence, acc: &mut sizing::SerializedText) {
    // Writing into a SmallString is infallible.
    _ = write!(acc, "{sequence}");
}
