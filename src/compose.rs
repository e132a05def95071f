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

//! The range composer: apply or remove one style over a selection of a text
//! buffer, reconciling every previously-applied range so the resulting
//! collection stays free of contradictions.

use smallvec::smallvec;

use crate::{RangeEdit, Selection, StyleAction, StyleCode, StyleError, StyleRange,
            style_range::sizing::StyleRanges};

/// Apply one [`StyleAction`] over `selection`, returning the replacement range
/// collection. Pure: `existing` and its ranges are never mutated, so a caller
/// can re-render deterministically from the returned value.
///
/// Behavior per action:
/// - [`StyleAction::ClearAll`]: delete the styled portions inside the
///   selection. Ranges fully inside are removed, partial overlaps keep only
///   their outside portion, and a range containing the whole selection is
///   split into its before and after pieces.
/// - [`StyleAction::Apply`]: if a range with exactly the selection's bounds
///   already holds the code, this toggles it off (the range itself is dropped
///   once its code set empties). If an exact-bounds range exists without the
///   code, the code is appended to it. Otherwise a fresh range over the
///   selection is created and every overlapping range is clipped out of the
///   way — the new explicit range wins entirely over anything it covers.
///
/// # Errors
///
/// [`StyleError::InvalidRange`] when the selection is inverted or reaches past
/// the end of the buffer (offsets are character indices). The caller is
/// expected to clamp; this deliberately does not.
///
/// An empty selection is a guard, not an error: the input collection comes
/// back unchanged.
pub fn apply_or_remove(
    text: &str,
    existing: &[StyleRange],
    selection: Selection,
    action: StyleAction,
) -> Result<StyleRanges, StyleError> {
    let buffer_len = text.chars().count();
    if selection.start > selection.end || selection.end > buffer_len {
        return Err(StyleError::InvalidRange {
            start: selection.start,
            end: selection.end,
            buffer_len,
        });
    }
    if selection.is_empty() {
        return Ok(existing.iter().cloned().collect());
    }

    tracing::debug!(
        sel_start = selection.start,
        sel_end = selection.end,
        ?action,
        range_count = existing.len(),
        "composing style ranges"
    );

    match action {
        StyleAction::ClearAll => Ok(clear_selection(existing, selection)),
        StyleAction::Apply(code) => Ok(apply_code(existing, selection, code)),
    }
}

/// Keep only the portions of every range that fall outside the selection.
fn clear_selection(existing: &[StyleRange], sel: Selection) -> StyleRanges {
    let mut acc = StyleRanges::new();
    for range in existing {
        push_clipped(&mut acc, range, sel);
    }
    acc
}

fn apply_code(existing: &[StyleRange], sel: Selection, code: StyleCode) -> StyleRanges {
    // Toggle heuristic: only an exact-bounds range participates; partial
    // overlaps always go down the create-and-clip path.
    if let Some(index) = existing.iter().position(|range| range.bounds_match(sel)) {
        let mut acc: StyleRanges = existing.iter().cloned().collect();
        let range = &mut acc[index];
        match range.codes.iter().position(|it| *it == code) {
            Some(code_index) => {
                range.codes.remove(code_index);
                if range.codes.is_empty() {
                    acc.remove(index);
                }
            }
            None => range.codes.push(code),
        }
        return acc;
    }

    // No exact-bounds range: the new range claims the selection, everything
    // overlapping it is clipped to the outside.
    let mut acc = StyleRanges::new();
    for range in existing {
        push_clipped(&mut acc, range, sel);
    }
    acc.push(StyleRange {
        start: sel.start,
        end: sel.end,
        codes: smallvec![code],
    });
    acc
}

/// Map one range's [`RangeEdit`] decision into the output collection.
fn push_clipped(acc: &mut StyleRanges, range: &StyleRange, sel: Selection) {
    match range.clip_to(sel) {
        RangeEdit::Unaffected => acc.push(range.clone()),
        RangeEdit::Dropped => {}
        RangeEdit::TruncatedBefore(kept) | RangeEdit::TruncatedAfter(kept) => {
            acc.push(kept);
        }
        RangeEdit::Split(before, after) => {
            acc.push(before);
            acc.push(after);
        }
    }
}
