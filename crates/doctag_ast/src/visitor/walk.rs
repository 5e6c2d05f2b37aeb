//! Walk functions for tree traversal.
//!
//! These functions provide the traversal logic for the Visitor pattern.
//! They are used by the default implementations in the `Visitor` trait.

use std::ops::ControlFlow;

use crate::{DocNode, DocNodeRef};

use super::visit::{VisitResult, Visitor};

/// Walks a tree position by dispatching to the appropriate kind-specific
/// visitor method.
///
/// This function:
/// 1. Calls `enter_node` on the visitor
/// 2. Dispatches to the appropriate `visit_*` method based on kind
/// 3. Calls `exit_node` on the visitor
///
/// Returns `ControlFlow::Continue(())` to continue traversal, or
/// `ControlFlow::Break(())` to stop.
pub fn walk_node<'a, V>(visitor: &mut V, node: DocNodeRef<'a>) -> VisitResult
where
    V: Visitor<'a>,
{
    // Enter hook
    visitor.enter_node(node)?;

    // Dispatch to kind-specific method
    let result = match node {
        DocNodeRef::Particle(particle) => visitor.visit_particle(particle),
        DocNodeRef::Node(doc_node) => match doc_node {
            DocNode::Particle(particle) => visitor.visit_particle(particle),
            DocNode::PlainText(n) => visitor.visit_plain_text(n),
            DocNode::SoftBreak(n) => visitor.visit_soft_break(n),
            DocNode::EscapedText(n) => visitor.visit_escaped_text(n),
            DocNode::ErrorText(n) => visitor.visit_error_text(n),
            DocNode::CodeSpan(n) => visitor.visit_code_span(n),
            DocNode::InlineTag(n) => visitor.visit_inline_tag(n),
            DocNode::BlockTag(n) => visitor.visit_block_tag(n),
            DocNode::Paragraph(n) => visitor.visit_paragraph(n),
            DocNode::Section(n) => visitor.visit_section(n),
        },
    };

    result?;

    // Exit hook
    visitor.exit_node(node)
}

/// Walks all children of a tree position.
///
/// Supports early termination via `ControlFlow::Break`.
#[inline]
pub fn walk_children<'a, V>(visitor: &mut V, node: DocNodeRef<'a>) -> VisitResult
where
    V: Visitor<'a>,
{
    walk_all(visitor, node.children())
}

/// Walks each of the given tree positions in order.
#[inline]
pub fn walk_all<'a, V>(
    visitor: &mut V,
    children: impl IntoIterator<Item = DocNodeRef<'a>>,
) -> VisitResult
where
    V: Visitor<'a>,
{
    for child in children {
        walk_node(visitor, child)?;
    }
    ControlFlow::Continue(())
}
