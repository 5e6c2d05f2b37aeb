//! Visitor trait for traversing doc comment trees.
//!
//! Each `visit_*` method has a default implementation that walks children,
//! allowing you to override only the node kinds you care about.

use std::ops::ControlFlow;

use crate::{
    DocBlockTag, DocCodeSpan, DocErrorText, DocEscapedText, DocInlineTag, DocNodeRef,
    DocParagraph, DocParticle, DocPlainText, DocSection, DocSoftBreak,
};

use super::walk::walk_all;

/// Result type for visitor methods to control traversal.
///
/// - `ControlFlow::Continue(())` - continue visiting children
/// - `ControlFlow::Break(())` - stop traversal early
pub type VisitResult = ControlFlow<()>;

/// Visitor trait for traversing doc comment trees without modification.
///
/// Each `visit_*` method receives the concrete node type for its kind and
/// defaults to walking that node's children (particles included), so a
/// visitor that only overrides `visit_particle` sees every leaf of the tree
/// in source order.
///
/// # Lifetime
///
/// The `'a` lifetime ties visited nodes to the tree being walked.
///
/// # Control Flow
///
/// Return `ControlFlow::Continue(())` to continue traversal, or
/// `ControlFlow::Break(())` to stop early. Use the `?` operator
/// for convenient propagation.
pub trait Visitor<'a>: Sized {
    /// Called before visiting any tree position. Can be used to set up
    /// context.
    #[inline]
    fn enter_node(&mut self, _node: DocNodeRef<'a>) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Called after visiting a tree position and all its children.
    #[inline]
    fn exit_node(&mut self, _node: DocNodeRef<'a>) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Visit a bare particle leaf.
    fn visit_particle(&mut self, _node: &'a DocParticle) -> VisitResult {
        ControlFlow::Continue(()) // Leaf, nothing to walk
    }

    /// Visit a PlainText node.
    fn visit_plain_text(&mut self, node: &'a DocPlainText) -> VisitResult {
        walk_all(self, node.children())
    }

    /// Visit a SoftBreak node.
    fn visit_soft_break(&mut self, node: &'a DocSoftBreak) -> VisitResult {
        walk_all(self, node.children())
    }

    /// Visit an EscapedText node.
    fn visit_escaped_text(&mut self, node: &'a DocEscapedText) -> VisitResult {
        walk_all(self, node.children())
    }

    /// Visit an ErrorText node.
    fn visit_error_text(&mut self, node: &'a DocErrorText) -> VisitResult {
        walk_all(self, node.children())
    }

    /// Visit a CodeSpan node.
    fn visit_code_span(&mut self, node: &'a DocCodeSpan) -> VisitResult {
        walk_all(self, node.children())
    }

    /// Visit an InlineTag node.
    fn visit_inline_tag(&mut self, node: &'a DocInlineTag) -> VisitResult {
        walk_all(self, node.children())
    }

    /// Visit a BlockTag node.
    fn visit_block_tag(&mut self, node: &'a DocBlockTag) -> VisitResult {
        walk_all(self, node.children())
    }

    /// Visit a Paragraph node.
    fn visit_paragraph(&mut self, node: &'a DocParagraph) -> VisitResult {
        walk_all(self, node.children())
    }

    /// Visit a Section node.
    fn visit_section(&mut self, node: &'a DocSection) -> VisitResult {
        walk_all(self, node.children())
    }
}
