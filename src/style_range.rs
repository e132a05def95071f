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

use smallvec::{SmallVec, smallvec};

use crate::StyleCode;

/// A user selection over the text buffer, as a half-open `[start, end)` pair
/// of character offsets. The item at `end` is not part of the selection:
///
/// ```text
/// ╭0123456789╮
/// 0he▓▓o worl│
/// ╰─┬──┬─────╯
///   │  │
///   │  ⎩end (exclusive)
///   ⎩start (inclusive)
/// ```
///
/// An empty selection (`start == end`) is legal and treated as a no-op by the
/// composer, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

/// Ergonomic constructor, in the spirit of `Selection::from((start, end))`.
#[must_use]
pub fn selection(start: usize, end: usize) -> Selection { Selection { start, end } }

impl Selection {
    #[must_use]
    pub fn is_empty(&self) -> bool { self.start == self.end }
}

/// One styled span over the text buffer: half-open bounds plus the codes
/// applied to it, retained in application order.
///
/// Invariant: `start < end`. Zero-width ranges and ranges with an empty code
/// set are never kept in a composed collection; they are dropped as part of
/// the operation that would produce them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRange {
    pub start: usize,
    pub end: usize,
    pub codes: sizing::InlineVecStyleCodes,
}

pub mod sizing {
    use super::{SmallVec, StyleCode, StyleRange};

    /// One code per slot class plus room for a superseded leftover, before
    /// spilling to the heap.
    pub const MAX_STYLE_RANGE_CODES_SIZE: usize = 4;
    pub type InlineVecStyleCodes = SmallVec<[StyleCode; MAX_STYLE_RANGE_CODES_SIZE]>;

    /// Realistic documents carry a handful of styled spans; spill beyond that.
    pub const MAX_STYLE_RANGES_SIZE: usize = 8;
    pub type StyleRanges = SmallVec<[StyleRange; MAX_STYLE_RANGES_SIZE]>;
}

/// The outcome of clipping one existing range against a selection. This is a
/// pure per-range decision; the composer maps it over the whole collection.
///
/// ```text
///             selection: [s,──────e)
/// Unaffected:                          [──)     (no overlap)
/// Dropped:              [──────)                (inside the selection)
/// TruncatedBefore:  [───┆xxx)                   (tail clipped off)
/// TruncatedAfter:           [xxx┆────)          (head clipped off)
/// Split:            [───┆xxxxxxx┆────)          (middle clipped out)
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeEdit {
    Unaffected,
    Dropped,
    TruncatedBefore(StyleRange),
    TruncatedAfter(StyleRange),
    Split(StyleRange, StyleRange),
}

impl StyleRange {
    #[must_use]
    pub fn new(start: usize, end: usize, code: StyleCode) -> StyleRange {
        StyleRange {
            start,
            end,
            codes: smallvec![code],
        }
    }

    /// Half-open overlap test: a range ending exactly where the selection
    /// begins does not overlap it.
    #[must_use]
    pub fn overlaps(&self, sel: Selection) -> bool {
        !(self.end <= sel.start || self.start >= sel.end)
    }

    /// Exact-bounds match, used by the toggle heuristic.
    #[must_use]
    pub fn bounds_match(&self, sel: Selection) -> bool {
        self.start == sel.start && self.end == sel.end
    }

    #[must_use]
    pub fn covers(&self, offset: usize) -> bool {
        (self.start..self.end).contains(&offset)
    }

    /// Decide what survives of `self` once the selection claims `[sel.start,
    /// sel.end)`. Surviving pieces keep the original code set.
    #[must_use]
    pub fn clip_to(&self, sel: Selection) -> RangeEdit {
        if !self.overlaps(sel) {
            return RangeEdit::Unaffected;
        }
        let covers_head = self.start < sel.start;
        let covers_tail = self.end > sel.end;
        match (covers_head, covers_tail) {
            (false, false) => RangeEdit::Dropped,
            (true, false) => RangeEdit::TruncatedBefore(self.with_bounds(self.start, sel.start)),
            (false, true) => RangeEdit::TruncatedAfter(self.with_bounds(sel.end, self.end)),
            (true, true) => RangeEdit::Split(
                self.with_bounds(self.start, sel.start),
                self.with_bounds(sel.end, self.end),
            ),
        }
    }

    fn with_bounds(&self, start: usize, end: usize) -> StyleRange {
        StyleRange {
            start,
            end,
            codes: self.codes.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::{RangeEdit, StyleRange, selection};
    use crate::StyleCode;

    #[test_case(0, 3,  5, 9,  false; "fully before")]
    #[test_case(10, 12, 5, 9, false; "fully after")]
    #[test_case(0, 5,  5, 9,  false; "touching at selection start is not overlap")]
    #[test_case(9, 12, 5, 9,  false; "touching at selection end is not overlap")]
    #[test_case(0, 6,  5, 9,  true;  "overlaps head")]
    #[test_case(8, 12, 5, 9,  true;  "overlaps tail")]
    #[test_case(6, 8,  5, 9,  true;  "inside")]
    #[test_case(0, 12, 5, 9,  true;  "contains")]
    fn half_open_overlap(r_start: usize, r_end: usize, s_start: usize, s_end: usize, expected: bool) {
        let range = StyleRange::new(r_start, r_end, StyleCode::Bold);
        assert_eq!(range.overlaps(selection(s_start, s_end)), expected);
    }

    #[test]
    fn clip_unaffected() {
        let range = StyleRange::new(0, 5, StyleCode::Bold);
        assert_eq!(range.clip_to(selection(5, 9)), RangeEdit::Unaffected);
    }

    #[test]
    fn clip_dropped_when_contained() {
        let range = StyleRange::new(5, 9, StyleCode::Bold);
        assert_eq!(range.clip_to(selection(5, 9)), RangeEdit::Dropped);
        let range = StyleRange::new(6, 8, StyleCode::Bold);
        assert_eq!(range.clip_to(selection(5, 9)), RangeEdit::Dropped);
    }

    #[test]
    fn clip_truncates_tail_when_overlapping_selection_start() {
        let range = StyleRange::new(2, 7, StyleCode::FgRed);
        let edit = range.clip_to(selection(5, 9));
        assert_eq!(
            edit,
            RangeEdit::TruncatedBefore(StyleRange::new(2, 5, StyleCode::FgRed))
        );
    }

    #[test]
    fn clip_truncates_head_when_overlapping_selection_end() {
        let range = StyleRange::new(7, 12, StyleCode::FgRed);
        let edit = range.clip_to(selection(5, 9));
        assert_eq!(
            edit,
            RangeEdit::TruncatedAfter(StyleRange::new(9, 12, StyleCode::FgRed))
        );
    }

    #[test]
    fn clip_splits_containing_range() {
        let range = StyleRange::new(0, 12, StyleCode::Bold);
        let edit = range.clip_to(selection(5, 9));
        assert_eq!(
            edit,
            RangeEdit::Split(
                StyleRange::new(0, 5, StyleCode::Bold),
                StyleRange::new(9, 12, StyleCode::Bold)
            )
        );
    }

    #[test]
    fn split_pieces_keep_the_full_code_set() {
        let mut range = StyleRange::new(0, 12, StyleCode::Bold);
        range.codes.push(StyleCode::FgTeal);
        if let RangeEdit::Split(before, after) = range.clip_to(selection(5, 9)) {
            assert_eq!(before.codes, range.codes);
            assert_eq!(after.codes, range.codes);
        } else {
            panic!("expected a split");
        }
    }
}
