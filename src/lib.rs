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

//! # ansi_codeblock
//!
//! Compose presentation styles (bold, underline, foreground and background
//! colors from a fixed 16-color palette) over ranges of plain text, and
//! serialize styled content into a single SGR escape-coded stream wrapped in
//! a fenced ```` ```ansi ```` codeblock — the format chat clients use to
//! render terminal-style colored text.
//!
//! The crate has two independent cores that share one style-state model:
//!
//! 1. The **range composer** ([`apply_or_remove`]) maintains a consistent,
//!    non-contradictory collection of [`StyleRange`]s over a text buffer as a
//!    user repeatedly selects sub-ranges and toggles attributes — splitting,
//!    truncating, and dropping overlapping ranges as needed.
//! 2. The **tree serializer** ([`serialize`]) walks a forest of
//!    [`StyledNode`]s with a style-state stack and emits correctly nested
//!    escape sequences, fully resetting and re-introducing ancestor state at
//!    every nesting boundary (SGR has no per-slot clear).
//!
//! A flat renderer ([`render_ranges`]) bridges the two: it turns a composed
//! range collection straight into an escape stream without an intermediate
//! node tree. [`codeblock`] / [`to_ansi_codeblock`] add the fixed fence.
//!
//! # Example usage
//!
//! Compose ranges and render them:
//!
//! ```rust
//! # fn main() -> Result<(), ansi_codeblock::StyleError> {
//! use ansi_codeblock::{StyleAction, StyleCode, apply_or_remove, codeblock,
//!                      render_ranges, selection};
//!
//! let text = "hello world";
//! let ranges = apply_or_remove(
//!     text, &[], selection(0, 5), StyleAction::Apply(StyleCode::Bold))?;
//! let ranges = apply_or_remove(
//!     text, &ranges, selection(0, 5), StyleAction::Apply(StyleCode::FgRed))?;
//!
//! let body = render_ranges(text, &ranges);
//! assert_eq!(
//!     codeblock(body.as_str()).as_str(),
//!     "```ansi\n\x1b[1;31mhello\x1b[0m world\n```"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! Serialize a styled node tree:
//!
//! ```rust
//! use ansi_codeblock::{StyleCode, StyledNode, to_ansi_codeblock};
//!
//! let nodes = vec![StyledNode::styled(StyleCode::Bold, vec![
//!     StyledNode::text("A"),
//!     StyledNode::styled(StyleCode::FgRed, vec![StyledNode::text("B")]),
//!     StyledNode::text("C"),
//! ])];
//! assert_eq!(
//!     to_ansi_codeblock(&nodes).as_str(),
//!     "```ansi\n\x1b[1mA\x1b[1;31mB\x1b[0m\x1b[1mC\x1b[0m\n```"
//! );
//! ```
//!
//! All operations are pure, synchronous transformations over their inputs —
//! no I/O, no shared mutable state — so they can be called repeatedly and
//! concurrently on independent inputs with no coordination.

// Attach modules (re-exported below to provide clean public API).
pub mod ansi_escape_codes;
pub mod codeblock;
pub mod compose;
pub mod error;
pub mod node;
pub mod render;
pub mod serialize;
pub mod style_code;
pub mod style_range;
pub mod style_state;

// Re-export public API using glob imports for an ergonomic, flat API surface.
// The `sizing` tuning modules intentionally stay behind their module paths.
pub use ansi_escape_codes::*;
pub use codeblock::{CODEBLOCK_FENCE_CLOSE, CODEBLOCK_FENCE_OPEN, codeblock,
                    to_ansi_codeblock};
pub use compose::*;
pub use error::*;
pub use node::StyledNode;
pub use render::*;
pub use serialize::{serialize, serialize_with};
pub use style_code::*;
pub use style_range::{RangeEdit, Selection, StyleRange, selection};
pub use style_state::StyleState;
