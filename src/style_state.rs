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

use smallvec::SmallVec;

use crate::{SlotClass, StyleCode};

/// The effective style at one point of the output: one slot per class, each
/// either unset or holding exactly one [`StyleCode`].
///
/// This is the shared model between the range composer ("effective style at
/// offset X") and the tree serializer (one stack frame per nesting level).
/// `None` marks a slot unset and never appears in emitted output. Two states
/// are equal iff all three slots match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StyleState {
    pub decoration: Option<StyleCode>,
    pub foreground: Option<StyleCode>,
    pub background: Option<StyleCode>,
}

pub mod sizing {
    use super::SmallVec;

    /// A state can list at most one SGR parameter per slot.
    pub const MAX_SGR_PARAMS_SIZE: usize = 3;
    pub type InlineVecSgrParams = SmallVec<[u8; MAX_SGR_PARAMS_SIZE]>;
}

impl StyleState {
    /// Returns a copy of `self` with the slot matching the code's class
    /// overwritten. A later code of the same class silently supersedes the
    /// earlier one; the other two slots are untouched.
    #[must_use]
    pub fn apply(&self, code: StyleCode) -> StyleState {
        let mut copy = *self;
        match code.slot_class() {
            SlotClass::Decoration => copy.decoration = Some(code),
            SlotClass::Foreground => copy.foreground = Some(code),
            SlotClass::Background => copy.background = Some(code),
        }
        copy
    }

    /// `true` when all three slots are unset. Such a state emits no escape
    /// sequence at all.
    #[must_use]
    pub fn is_unset(&self) -> bool {
        self.decoration.is_none()
            && self.foreground.is_none()
            && self.background.is_none()
    }

    /// The SGR parameters for the set slots, in the fixed emission order:
    /// decoration, foreground, background.
    #[must_use]
    pub fn sgr_params(&self) -> sizing::InlineVecSgrParams {
        [self.decoration, self.foreground, self.background]
            .into_iter()
            .flatten()
            .map(|code| code.sgr_param())
            .collect()
    }
}
