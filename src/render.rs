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

//! Render a flat `(text, ranges)` pair straight into an SGR escape stream,
//! without going through a [`crate::StyledNode`] tree. This is the direct
//! path for callers that hold a composed range collection and no editor
//! surface.

use std::fmt::Write as _;

use smallvec::SmallVec;

use crate::{SgrSequence, StyleRange, StyleState, serialize::sizing::SerializedText};

/// Walk the buffer segment by segment (segments are delimited by the range
/// boundaries) and emit each segment under its effective style state.
///
/// The effective state of a segment is the fold of every covering range's
/// codes in application order, so last-applied-wins resolution happens per
/// slot class. Between two segments whose states differ, a full reset is
/// emitted (SGR has no per-slot clear) followed by the introduce sequence of
/// the new state. Unstyled text passes through untouched; with no ranges at
/// all the text comes back verbatim.
#[must_use]
pub fn render_ranges(text: &str, ranges: &[StyleRange]) -> SerializedText {
    let mut acc = SerializedText::new();
    if ranges.is_empty() {
        acc.push_str(text);
        return acc;
    }

    let chars: Vec<char> = text.chars().collect();
    let boundaries = segment_boundaries(chars.len(), ranges);

    let mut previous_state = StyleState::default();
    for pair in boundaries.windows(2) {
        let (seg_start, seg_end) = (pair[0], pair[1]);
        let state = effective_state_at(seg_start, ranges);

        if state != previous_state {
            if !previous_state.is_unset() {
                _ = write!(acc, "{}", SgrSequence::Reset);
            }
            if let Some(sequence) = SgrSequence::introduce(&state) {
                _ = write!(acc, "{sequence}");
            }
        }
        for ch in &chars[seg_start..seg_end] {
            acc.push(*ch);
        }
        previous_state = state;
    }
    if !previous_state.is_unset() {
        _ = write!(acc, "{}", SgrSequence::Reset);
    }
    acc
}

/// Sorted, deduped cut points: buffer ends plus every range bound, clamped to
/// the buffer.
fn segment_boundaries(buffer_len: usize, ranges: &[StyleRange]) -> SmallVec<[usize; 8]> {
    let mut boundaries: SmallVec<[usize; 8]> = SmallVec::new();
    boundaries.push(0);
    boundaries.push(buffer_len);
    for range in ranges {
        boundaries.push(range.start.min(buffer_len));
        boundaries.push(range.end.min(buffer_len));
    }
    boundaries.sort_unstable();
    boundaries.dedup();
    boundaries
}

/// Fold the covering ranges in application order; within one range the codes
/// are applied in their stored order, so a later code of the same slot class
/// supersedes an earlier one.
fn effective_state_at(offset: usize, ranges: &[StyleRange]) -> StyleState {
    let mut state = StyleState::default();
    for range in ranges.iter().filter(|range| range.covers(offset)) {
        for code in &range.codes {
            state = state.apply(*code);
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::render_ranges;
    use crate::{StyleAction, StyleCode, StyleRange, apply_or_remove, selection};

    #[test]
    fn no_ranges_returns_text_verbatim() {
        assert_eq!(render_ranges("hello", &[]).as_str(), "hello");
    }

    #[test]
    fn full_buffer_range() {
        let ranges = [StyleRange::new(0, 5, StyleCode::FgRed)];
        assert_eq!(render_ranges("hello", &ranges).as_str(), "\x1b[31mhello\x1b[0m");
    }

    #[test]
    fn unstyled_prefix_and_suffix_pass_through() {
        let ranges = [StyleRange::new(2, 4, StyleCode::Bold)];
        assert_eq!(
            render_ranges("hello", &ranges).as_str(),
            "he\x1b[1mll\x1b[0mo"
        );
    }

    #[test]
    fn multiple_codes_on_one_range_emit_in_slot_order() {
        let mut range = StyleRange::new(0, 5, StyleCode::FgRed);
        range.codes.push(StyleCode::Bold);
        assert_eq!(
            render_ranges("hello", &[range]).as_str(),
            "\x1b[1;31mhello\x1b[0m"
        );
    }

    #[test]
    fn adjacent_ranges_reset_between_differing_states() {
        let ranges = [
            StyleRange::new(0, 2, StyleCode::FgRed),
            StyleRange::new(2, 5, StyleCode::FgBlue),
        ];
        assert_eq!(
            render_ranges("hello", &ranges).as_str(),
            "\x1b[31mhe\x1b[0m\x1b[34mllo\x1b[0m"
        );
    }

    #[test]
    fn composed_ranges_render_end_to_end() {
        let text = "hello world";
        let ranges =
            apply_or_remove(text, &[], selection(0, 11), StyleAction::Apply(StyleCode::Bold))
                .unwrap();
        let ranges =
            apply_or_remove(text, &ranges, selection(6, 11), StyleAction::Apply(StyleCode::FgPink))
                .unwrap();
        assert_eq!(
            render_ranges(text, &ranges).as_str(),
            "\x1b[1mhello \x1b[0m\x1b[35mworld\x1b[0m"
        );
    }

    #[test]
    fn character_offsets_slice_multibyte_text_correctly() {
        let ranges = [StyleRange::new(1, 2, StyleCode::FgGreen)];
        assert_eq!(
            render_ranges("héllo", &ranges).as_str(),
            "h\x1b[32mé\x1b[0mllo"
        );
    }
}
