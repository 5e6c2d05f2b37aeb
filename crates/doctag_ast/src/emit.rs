//! Lossless text reconstruction.
//!
//! A doc comment tree is lossless: concatenating the content of every leaf
//! particle in traversal order reproduces the text the tree was parsed from,
//! byte for byte. This module implements that concatenation.

use std::ops::ControlFlow;

use crate::visitor::{VisitResult, Visitor, walk_node};
use crate::{DocNodeRef, DocParticle};

struct TextEmitter {
    out: String,
}

impl<'a> Visitor<'a> for TextEmitter {
    fn visit_particle(&mut self, node: &'a DocParticle) -> VisitResult {
        self.out.push_str(node.content());
        ControlFlow::Continue(())
    }
}

/// Reconstructs the text spanned by the given tree position.
///
/// For a tree built from excerpts over one source buffer this returns the
/// exact original substring; for a synthesized tree it returns the canonical
/// rendering.
pub fn node_text(node: DocNodeRef<'_>) -> String {
    let mut emitter = TextEmitter { out: String::new() };
    let _ = walk_node(&mut emitter, node);
    emitter.out
}
