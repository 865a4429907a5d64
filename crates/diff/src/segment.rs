use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::alignment::AlignmentTable;

/// Represents the kind of a diff segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SegmentKind {
    /// Text present in both versions
    #[display(fmt = "Unchanged")]
    Unchanged,

    /// Text only present in the new version
    #[display(fmt = "Added")]
    Added,

    /// Text only present in the old version
    #[display(fmt = "Removed")]
    Removed,
}

impl SegmentKind {
    /// Whether text of this kind belongs to the old version
    pub fn in_old(self) -> bool {
        self != SegmentKind::Added
    }

    /// Whether text of this kind belongs to the new version
    pub fn in_new(self) -> bool {
        self != SegmentKind::Removed
    }
}

/// A maximal run of text sharing one diff kind
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiffSegment {
    /// What happened to this text
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: SegmentKind,

    /// The text itself
    pub text: String,
}

impl DiffSegment {
    /// Create a new segment
    pub fn new(kind: SegmentKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn unchanged(text: impl Into<String>) -> Self {
        Self::new(SegmentKind::Unchanged, text)
    }

    pub fn added(text: impl Into<String>) -> Self {
        Self::new(SegmentKind::Added, text)
    }

    pub fn removed(text: impl Into<String>) -> Self {
        Self::new(SegmentKind::Removed, text)
    }

    /// Check if this segment is an addition or removal
    pub fn is_change(&self) -> bool {
        self.kind != SegmentKind::Unchanged
    }
}

/// A unit that can be aligned and written back into segment text
pub trait DiffUnit: PartialEq {
    /// Append this unit's text to `out`
    fn push_onto(&self, out: &mut String);
}

impl DiffUnit for char {
    fn push_onto(&self, out: &mut String) {
        out.push(*self);
    }
}

impl DiffUnit for &str {
    fn push_onto(&self, out: &mut String) {
        out.push_str(self);
    }
}

/// A single per-unit edit, indexing into the old (`a`) or new (`b`) sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOp {
    /// `a[old] == b[new]`
    Unchanged { old: usize, new: usize },

    /// `b[new]` was inserted
    Added { new: usize },

    /// `a[old]` was deleted
    Removed { old: usize },
}

impl EditOp {
    /// The segment kind this operation contributes to
    pub fn kind(&self) -> SegmentKind {
        match self {
            EditOp::Unchanged { .. } => SegmentKind::Unchanged,
            EditOp::Added { .. } => SegmentKind::Added,
            EditOp::Removed { .. } => SegmentKind::Removed,
        }
    }
}

/// A minimal edit script in document order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditScript {
    ops: Vec<EditOp>,
}

impl EditScript {
    /// Reconstruct the edit script by walking `table` from the bottom-right
    /// corner back to the origin.
    ///
    /// When both neighbours tie, an insertion is preferred over a deletion.
    /// Reference outputs depend on this ordering, so it must not change.
    pub fn from_table<T: PartialEq>(a: &[T], b: &[T], table: &AlignmentTable) -> Self {
        let mut ops = Vec::with_capacity(a.len().max(b.len()));
        let mut i = a.len();
        let mut j = b.len();

        while i > 0 || j > 0 {
            if i > 0 && j > 0 && a[i - 1] == b[j - 1] {
                ops.push(EditOp::Unchanged {
                    old: i - 1,
                    new: j - 1,
                });
                i -= 1;
                j -= 1;
            } else if j > 0 && (i == 0 || table.get(i, j - 1) >= table.get(i - 1, j)) {
                ops.push(EditOp::Added { new: j - 1 });
                j -= 1;
            } else {
                ops.push(EditOp::Removed { old: i - 1 });
                i -= 1;
            }
        }

        ops.reverse();
        Self { ops }
    }

    /// Build the alignment table and reconstruct the script in one go
    pub fn compute<T: PartialEq>(a: &[T], b: &[T]) -> Self {
        let table = AlignmentTable::build(a, b);
        Self::from_table(a, b, &table)
    }

    /// Get the operations
    pub fn ops(&self) -> &[EditOp] {
        &self.ops
    }

    /// Get the number of operations
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Check if the script has no operations
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Get the number of unchanged units (the LCS length)
    pub fn unchanged_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, EditOp::Unchanged { .. }))
            .count()
    }

    /// Coalesce consecutive operations of the same kind into segments
    pub fn to_segments<T: DiffUnit>(&self, a: &[T], b: &[T]) -> Vec<DiffSegment> {
        let mut segments: Vec<DiffSegment> = Vec::new();

        for op in &self.ops {
            let unit = match *op {
                EditOp::Unchanged { new, .. } | EditOp::Added { new } => &b[new],
                EditOp::Removed { old } => &a[old],
            };

            let kind = op.kind();
            match segments.last_mut() {
                Some(last) if last.kind == kind => unit.push_onto(&mut last.text),
                _ => {
                    let mut text = String::new();
                    unit.push_onto(&mut text);
                    segments.push(DiffSegment::new(kind, text));
                }
            }
        }

        segments
    }
}

/// Concatenate every segment that belongs to the old version
pub fn reconstruct_old(segments: &[DiffSegment]) -> String {
    segments
        .iter()
        .filter(|s| s.kind.in_old())
        .map(|s| s.text.as_str())
        .collect()
}

/// Concatenate every segment that belongs to the new version
pub fn reconstruct_new(segments: &[DiffSegment]) -> String {
    segments
        .iter()
        .filter(|s| s.kind.in_new())
        .map(|s| s.text.as_str())
        .collect()
}

/// Character and segment counts for a list of segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiffSummary {
    /// The number of added characters
    pub added_chars: usize,

    /// The number of removed characters
    pub removed_chars: usize,

    /// The number of unchanged characters
    pub unchanged_chars: usize,

    /// The number of segments
    pub segment_count: usize,
}

impl DiffSummary {
    /// Summarize a list of segments
    pub fn from_segments(segments: &[DiffSegment]) -> Self {
        segments.iter().fold(Self::default(), |mut summary, segment| {
            let len = segment.text.chars().count();
            match segment.kind {
                SegmentKind::Added => summary.added_chars += len,
                SegmentKind::Removed => summary.removed_chars += len,
                SegmentKind::Unchanged => summary.unchanged_chars += len,
            }
            summary.segment_count += 1;
            summary
        })
    }

    /// Check if the diff has any changes
    pub fn has_changes(&self) -> bool {
        self.added_chars > 0 || self.removed_chars > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_tie_prefers_added() {
        // "a" -> "b": both neighbours of the corner hold 0
        let a = chars("a");
        let b = chars("b");

        let script = EditScript::compute(&a, &b);

        assert_eq!(
            script.ops(),
            &[EditOp::Removed { old: 0 }, EditOp::Added { new: 0 }]
        );
    }

    #[test]
    fn test_segments_are_coalesced() {
        let a = chars("abcxyz");
        let b = chars("abcXYZ");

        let segments = EditScript::compute(&a, &b).to_segments(&a, &b);

        assert_eq!(
            segments,
            vec![
                DiffSegment::unchanged("abc"),
                DiffSegment::removed("xyz"),
                DiffSegment::added("XYZ"),
            ]
        );
    }

    #[test]
    fn test_word_units_keep_their_text() {
        let a = vec!["Obat", " ", "batuk"];
        let b = vec!["Obat", " ", "flu"];

        let segments = EditScript::compute(&a, &b).to_segments(&a, &b);

        assert_eq!(
            segments,
            vec![
                DiffSegment::unchanged("Obat "),
                DiffSegment::removed("batuk"),
                DiffSegment::added("flu"),
            ]
        );
    }

    #[test]
    fn test_summary_counts() {
        let segments = vec![
            DiffSegment::unchanged("Dosis "),
            DiffSegment::removed("500mg"),
            DiffSegment::added("250mg"),
        ];

        let summary = DiffSummary::from_segments(&segments);

        assert_eq!(summary.unchanged_chars, 6);
        assert_eq!(summary.removed_chars, 5);
        assert_eq!(summary.added_chars, 5);
        assert_eq!(summary.segment_count, 3);
        assert!(summary.has_changes());
        assert_eq!(reconstruct_old(&segments), "Dosis 500mg");
        assert_eq!(reconstruct_new(&segments), "Dosis 250mg");
    }
}
