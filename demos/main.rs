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

use ansi_codeblock::{StyleAction, StyleCode, StyledNode, apply_or_remove, codeblock,
                     render_ranges, selection, serialize, to_ansi_codeblock};
use strum::IntoEnumIterator as _;

fn main() -> Result<(), ansi_codeblock::StyleError> {
    // Compose style ranges over a flat buffer, the way an editor toolbar
    // would: select, click bold, select again, click a color.
    {
        let text = "Welcome to the colored text generator!";
        let ranges = apply_or_remove(
            text,
            &[],
            selection(0, 7),
            StyleAction::Apply(StyleCode::Bold),
        )?;
        let ranges = apply_or_remove(
            text,
            &ranges,
            selection(11, 18),
            StyleAction::Apply(StyleCode::FgTeal),
        )?;
        let ranges = apply_or_remove(
            text,
            &ranges,
            selection(11, 18),
            StyleAction::Apply(StyleCode::BgBlack),
        )?;

        let body = render_ranges(text, &ranges);
        println!("{}", codeblock(body.as_str()));
        println!();
    }

    // Serialize a nested styled tree directly.
    {
        let nodes = vec![StyledNode::styled(StyleCode::Bold, vec![
            StyledNode::text("bold "),
            StyledNode::styled(StyleCode::FgPink, vec![StyledNode::text("bold+pink")]),
            StyledNode::text(" bold again"),
            StyledNode::line_break(),
            StyledNode::styled(StyleCode::BgBlurple, vec![StyledNode::text(
                "bold on blurple",
            )]),
        ])];
        println!("{}", to_ansi_codeblock(&nodes));
        println!();
    }

    // Walk the palette.
    for code in StyleCode::iter() {
        let label = format!("{:>3} {}", code.sgr_param(), code.name());
        let nodes = vec![StyledNode::styled(code, vec![StyledNode::text(&label)])];
        println!("{}", serialize(&nodes));
    }

    Ok(())
}
