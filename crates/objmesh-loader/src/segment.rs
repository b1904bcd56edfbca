// ObjMesh - Wavefront Model Loading
// Copyright (C) 2025 ObjMesh Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published
// by the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.

//! Splitting an OBJ document into per-object line groups
//!
//! Vertex records (`v`, `vt`) and everything else are buffered separately.
//! An `o` line closes the current object when non-vertex lines have been
//! seen since the last flush; a `g` line closes it when vertex lines are
//! pending. Each emitted group lists its vertex lines first so faces can be
//! resolved in a single pass.
//!
//! A `g` flush keeps the vertex buffer: sibling groups under one `o` share
//! the same vertex lines and the same index offsets. Only an `o` flush
//! advances the offsets past the vertices consumed so far.

use crate::record::SourceLine;

/// Number of positions and texcoords declared by all earlier objects.
///
/// OBJ indices are global and 1-based; subtracting `1 + offset` turns them
/// into indices local to one object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexOffsets {
    /// `v` records before this object
    pub positions: usize,
    /// `vt` records before this object
    pub texcoords: usize,
}

impl IndexOffsets {
    /// Offsets for the object after one that declared `consumed` records
    #[must_use]
    pub fn advance(self, consumed: IndexOffsets) -> IndexOffsets {
        IndexOffsets {
            positions: self.positions + consumed.positions,
            texcoords: self.texcoords + consumed.texcoords,
        }
    }
}

/// Lines belonging to one object, vertex records first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectGroup<'a> {
    /// Vertex lines followed by the object's other lines
    pub lines: Vec<SourceLine<'a>>,
    /// Offsets to apply to this object's face indices
    pub offsets: IndexOffsets,
}

/// Incremental segmenter. Feed lines in document order with [`push`] and
/// call [`finish`] at end of input.
///
/// [`push`]: Segmenter::push
/// [`finish`]: Segmenter::finish
#[derive(Debug, Default)]
pub struct Segmenter<'a> {
    preamble: Vec<SourceLine<'a>>,
    vertices: Vec<SourceLine<'a>>,
    offsets: IndexOffsets,
    consumed: IndexOffsets,
}

impl<'a> Segmenter<'a> {
    /// Create a segmenter at the start of a document
    pub fn new() -> Self {
        Self::default()
    }

    /// Offsets that the next emitted group will carry
    pub fn offsets(&self) -> IndexOffsets {
        self.offsets
    }

    /// Consume one line; returns the group it closed, if any
    pub fn push(&mut self, line: SourceLine<'a>) -> Option<ObjectGroup<'a>> {
        if line.is_comment() {
            return None;
        }

        let keyword = line.keyword();
        let closes_object = (keyword == "o" && !self.preamble.is_empty())
            || (keyword == "g" && !self.vertices.is_empty());

        let flushed = if closes_object {
            let group = self.take_group();
            if keyword == "o" {
                self.vertices.clear();
                self.offsets = self.offsets.advance(self.consumed);
                self.consumed = IndexOffsets::default();
            }
            Some(group)
        } else {
            None
        };

        match keyword {
            "v" => {
                self.consumed.positions += 1;
                self.vertices.push(line);
            }
            "vt" => {
                self.consumed.texcoords += 1;
                self.vertices.push(line);
            }
            // Normals are recomputed and free-form data is not supported
            "vn" | "vp" => {}
            _ => self.preamble.push(line),
        }

        flushed
    }

    /// Flush whatever is left at end of input
    pub fn finish(mut self) -> Option<ObjectGroup<'a>> {
        if self.preamble.is_empty() && self.vertices.is_empty() {
            None
        } else {
            Some(self.take_group())
        }
    }

    fn take_group(&mut self) -> ObjectGroup<'a> {
        let mut lines = Vec::with_capacity(self.vertices.len() + self.preamble.len());
        lines.extend_from_slice(&self.vertices);
        lines.append(&mut self.preamble);
        ObjectGroup {
            lines,
            offsets: self.offsets,
        }
    }
}

/// Segment a whole document at once
pub fn segment<'a>(lines: impl IntoIterator<Item = SourceLine<'a>>) -> Vec<ObjectGroup<'a>> {
    let mut segmenter = Segmenter::new();
    let mut groups: Vec<ObjectGroup<'a>> = lines
        .into_iter()
        .filter_map(|line| segmenter.push(line))
        .collect();
    groups.extend(segmenter.finish());
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::source_lines;

    fn texts<'a>(group: &ObjectGroup<'a>) -> Vec<&'a str> {
        group.lines.iter().map(|l| l.text).collect()
    }

    #[test]
    fn test_single_object_without_markers() {
        let groups = segment(source_lines("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n"));
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].offsets, IndexOffsets::default());
        assert_eq!(texts(&groups[0]).len(), 4);
    }

    #[test]
    fn test_comments_are_dropped() {
        let groups = segment(source_lines("# header\nv 0 0 0\n# mid\nf 1 1 1\n"));
        assert_eq!(texts(&groups[0]), ["v 0 0 0", "f 1 1 1"]);
    }

    #[test]
    fn test_vertices_precede_other_lines() {
        let groups = segment(source_lines("o A\nv 0 0 0\nusemtl Red\nvt 0 1\nf 1/1 1/1 1/1\n"));
        assert_eq!(
            texts(&groups[0]),
            ["v 0 0 0", "vt 0 1", "o A", "usemtl Red", "f 1/1 1/1 1/1"]
        );
    }

    #[test]
    fn test_o_flush_advances_offsets() {
        let doc = "o A\nv 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0 0\nf 1/1 2/1 3/1\n\
                   o B\nv 0 0 1\nv 1 0 1\nv 0 1 1\nf 4 5 6\n";
        let groups = segment(source_lines(doc));
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].offsets, IndexOffsets::default());
        assert_eq!(
            groups[1].offsets,
            IndexOffsets {
                positions: 3,
                texcoords: 1
            }
        );
        assert_eq!(texts(&groups[1])[0], "v 0 0 1");
        assert_eq!(texts(&groups[1])[3], "o B");
    }

    #[test]
    fn test_g_flush_keeps_vertices_and_offsets() {
        let doc = "v 0 0 0\nv 1 0 0\nv 0 1 0\ng first\nf 1 2 3\ng second\nf 3 2 1\n";
        let groups = segment(source_lines(doc));
        // vertex-only group, then the two named groups
        assert_eq!(groups.len(), 3);
        assert_eq!(texts(&groups[0]), ["v 0 0 0", "v 1 0 0", "v 0 1 0"]);
        assert_eq!(&texts(&groups[1])[3..], ["g first", "f 1 2 3"]);
        assert_eq!(&texts(&groups[2])[3..], ["g second", "f 3 2 1"]);
        assert!(groups.iter().all(|g| g.offsets == IndexOffsets::default()));
    }

    #[test]
    fn test_leading_o_does_not_flush_empty_buffers() {
        let groups = segment(source_lines("o Only\nv 0 0 0\nf 1 1 1\n"));
        assert_eq!(groups.len(), 1);
    }

    #[test]
    fn test_vn_lines_do_not_shift_texcoord_offsets() {
        let doc = "o A\nv 0 0 0\nvn 0 0 1\nvt 0 0\nf 1/1/1 1/1/1 1/1/1\no B\nv 1 1 1\nf 2 2 2\n";
        let groups = segment(source_lines(doc));
        assert_eq!(
            groups[1].offsets,
            IndexOffsets {
                positions: 1,
                texcoords: 1
            }
        );
    }

    #[test]
    fn test_empty_document() {
        assert!(segment(source_lines("\n# nothing\n")).is_empty());
    }
}
