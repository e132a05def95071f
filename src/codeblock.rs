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

use crate::{StyledNode, serialize, serialize::sizing::SerializedText};

/// The fence pair is fixed: three backticks tagged `ansi`, one newline on
/// each side of the body. Chat clients key the terminal-style renderer off
/// this exact language hint.
pub const CODEBLOCK_FENCE_OPEN: &str = "```ansi\n";
pub const CODEBLOCK_FENCE_CLOSE: &str = "\n```";

/// Wrap an already-serialized escape stream in the codeblock fence. No other
/// transformation; not configurable.
#[must_use]
pub fn codeblock(serialized_body: &str) -> SerializedText {
    let mut acc = SerializedText::new();
    acc.push_str(CODEBLOCK_FENCE_OPEN);
    acc.push_str(serialized_body);
    acc.push_str(CODEBLOCK_FENCE_CLOSE);
    acc
}

/// Serialize a styled node forest and wrap it in the fence, in one call.
#[must_use]
pub fn to_ansi_codeblock(nodes: &[StyledNode]) -> SerializedText {
    codeblock(serialize(nodes).as_str())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{codeblock, to_ansi_codeblock};
    use crate::{StyleCode, StyledNode};

    #[test]
    fn wraps_body_in_ansi_fence() {
        assert_eq!(codeblock("hello").as_str(), "```ansi\nhello\n```");
    }

    #[test]
    fn empty_body_is_just_the_fence() {
        assert_eq!(codeblock("").as_str(), "```ansi\n\n```");
    }

    #[test]
    fn serializes_and_wraps_in_one_call() {
        let nodes = vec![StyledNode::styled(
            StyleCode::FgRed,
            vec![StyledNode::text("hi")],
        )];
        assert_eq!(
            to_ansi_codeblock(&nodes).as_str(),
            "```ansi\n\x1b[31mhi\x1b[0m\n```"
        );
    }
}
