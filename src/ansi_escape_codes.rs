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

//! More info:
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>

use std::fmt::{Display, Formatter, Result};

use crate::{StyleState, style_state::sizing::InlineVecSgrParams};

/// One SGR command on the wire: either a style-introduce sequence listing the
/// parameters of a [`StyleState`], or the single global reset.
///
/// The escape family targeted here has no per-slot clear; `Reset` drops all
/// three slots at once, which is why serialization restores ancestor state by
/// emitting a fresh introduce sequence right after each reset.
#[derive(Debug, Clone, PartialEq)]
pub enum SgrSequence {
    Introduce(InlineVecSgrParams),
    Reset,
}

pub mod sgr_sequence_impl {
    use super::{Display, Formatter, Result, SgrSequence, StyleState};

    pub const CSI: &str = "\x1b[";
    pub const SGR: &str = "m";

    impl SgrSequence {
        /// Build the introduce sequence for a state. An entirely unset state
        /// has no wire representation, hence [`None`].
        #[must_use]
        pub fn introduce(state: &StyleState) -> Option<SgrSequence> {
            let params = state.sgr_params();
            if params.is_empty() {
                None
            } else {
                Some(SgrSequence::Introduce(params))
            }
        }
    }

    impl Display for SgrSequence {
        /// SGR: set graphics mode command.
        /// More info:
        /// - <https://notes.burke.libbey.me/ansi-escape-codes/>
        /// - <https://en.wikipedia.org/wiki/ANSI_escape_code>
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            match self {
                SgrSequence::Reset => write!(f, "{CSI}0{SGR}"),
                SgrSequence::Introduce(params) => {
                    write!(f, "{CSI}")?;
                    for (index, param) in params.iter().enumerate() {
                        if index > 0 {
                            write!(f, ";")?;
                        }
                        write!(f, "{param}")?;
                    }
                    write!(f, "{SGR}")
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use smallvec::smallvec;

    use super::SgrSequence;
    use crate::{StyleCode, StyleState};

    #[test]
    fn reset() {
        let sgr_sequence = SgrSequence::Reset;
        assert_eq!(sgr_sequence.to_string(), "\x1b[0m");
    }

    #[test]
    fn introduce_single_param() {
        let sgr_sequence = SgrSequence::Introduce(smallvec![1]);
        assert_eq!(sgr_sequence.to_string(), "\x1b[1m");
    }

    #[test]
    fn introduce_multiple_params_joined_by_semicolon() {
        let sgr_sequence = SgrSequence::Introduce(smallvec![1, 31, 40]);
        assert_eq!(sgr_sequence.to_string(), "\x1b[1;31;40m");
    }

    #[test]
    fn introduce_from_state() {
        let state = StyleState::default()
            .apply(StyleCode::Bold)
            .apply(StyleCode::FgRed);
        let sgr_sequence = SgrSequence::introduce(&state);
        assert_eq!(
            sgr_sequence.map(|it| it.to_string()),
            Some("\x1b[1;31m".to_string())
        );
    }

    #[test]
    fn unset_state_has_no_introduce_sequence() {
        assert_eq!(SgrSequence::introduce(&StyleState::default()), None);
    }
}
