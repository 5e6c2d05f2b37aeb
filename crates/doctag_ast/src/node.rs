//! DocNode definition.
//!
//! [`DocNode`] is the tagged union over every concrete node kind. Consumers
//! discriminate on [`DocNode::kind`] (or match on the variant directly) and
//! traverse with [`DocNode::children`], which always yields children in
//! source order. Concatenating the content of every leaf particle reached
//! this way reproduces the original comment text exactly.

use serde::Serialize;

use crate::{
    DocBlockTag, DocCodeSpan, DocErrorText, DocEscapedText, DocInlineTag, DocNodeKind,
    DocParagraph, DocParticle, DocPlainText, DocSection, DocSoftBreak,
};

/// A node in a doc comment tree.
///
/// One variant per kind in the closed [`DocNodeKind`] enumeration. A node
/// exclusively owns its children; nothing in the tree is shared between two
/// parents, and no parent back-references exist at this layer.
#[derive(Debug, Clone, PartialEq)]
pub enum DocNode {
    /// A bare literal text leaf.
    Particle(DocParticle),
    /// A run of plain comment text.
    PlainText(DocPlainText),
    /// A soft line break.
    SoftBreak(DocSoftBreak),
    /// A backslash-escaped character sequence.
    EscapedText(DocEscapedText),
    /// Text the parser could not interpret.
    ErrorText(DocErrorText),
    /// An inline code span.
    CodeSpan(DocCodeSpan),
    /// An inline tag such as `{@link target}`.
    InlineTag(DocInlineTag),
    /// A block tag such as `@remarks`.
    BlockTag(DocBlockTag),
    /// A paragraph of inline content.
    Paragraph(DocParagraph),
    /// A generic container of nodes.
    Section(DocSection),
}

impl DocNode {
    /// The kind discriminant of this node.
    pub const fn kind(&self) -> DocNodeKind {
        match self {
            DocNode::Particle(_) => DocNodeKind::Particle,
            DocNode::PlainText(_) => DocNodeKind::PlainText,
            DocNode::SoftBreak(_) => DocNodeKind::SoftBreak,
            DocNode::EscapedText(_) => DocNodeKind::EscapedText,
            DocNode::ErrorText(_) => DocNodeKind::ErrorText,
            DocNode::CodeSpan(_) => DocNodeKind::CodeSpan,
            DocNode::InlineTag(_) => DocNodeKind::InlineTag,
            DocNode::BlockTag(_) => DocNodeKind::BlockTag,
            DocNode::Paragraph(_) => DocNodeKind::Paragraph,
            DocNode::Section(_) => DocNodeKind::Section,
        }
    }

    /// Returns this node's children in source order.
    ///
    /// Particles are leaves and return no children. Every other kind returns
    /// its internal particles and owned child nodes in the order their spans
    /// appear in the comment text, left to right.
    pub fn children(&self) -> Vec<DocNodeRef<'_>> {
        match self {
            DocNode::Particle(_) => Vec::new(),
            DocNode::PlainText(node) => node.children(),
            DocNode::SoftBreak(node) => node.children(),
            DocNode::EscapedText(node) => node.children(),
            DocNode::ErrorText(node) => node.children(),
            DocNode::CodeSpan(node) => node.children(),
            DocNode::InlineTag(node) => node.children(),
            DocNode::BlockTag(node) => node.children(),
            DocNode::Paragraph(node) => node.children(),
            DocNode::Section(node) => node.children(),
        }
    }

    /// Returns a borrowed traversal handle for this node.
    #[inline]
    pub const fn as_ref(&self) -> DocNodeRef<'_> {
        DocNodeRef::Node(self)
    }
}

/// A borrowed view of a tree position: either a particle stored inside a
/// concrete node, or an owned [`DocNode`].
///
/// This is the uniform handle traversal code works with, since a node's
/// children mix internal particles (delimiters, literal runs) with owned
/// child nodes.
#[derive(Debug, Clone, Copy)]
pub enum DocNodeRef<'a> {
    /// A leaf particle.
    Particle(&'a DocParticle),
    /// A full node.
    Node(&'a DocNode),
}

impl<'a> DocNodeRef<'a> {
    /// The kind discriminant at this tree position.
    pub const fn kind(&self) -> DocNodeKind {
        match self {
            DocNodeRef::Particle(_) => DocNodeKind::Particle,
            DocNodeRef::Node(node) => node.kind(),
        }
    }

    /// Returns the children at this position in source order.
    pub fn children(&self) -> Vec<DocNodeRef<'a>> {
        match self {
            DocNodeRef::Particle(_) => Vec::new(),
            DocNodeRef::Node(node) => node.children(),
        }
    }

    /// Returns the particle at this position, if it is one.
    #[inline]
    pub const fn as_particle(&self) -> Option<&'a DocParticle> {
        match self {
            DocNodeRef::Particle(particle) => Some(particle),
            DocNodeRef::Node(_) => None,
        }
    }
}

impl From<DocParticle> for DocNode {
    fn from(node: DocParticle) -> Self {
        DocNode::Particle(node)
    }
}

impl From<DocPlainText> for DocNode {
    fn from(node: DocPlainText) -> Self {
        DocNode::PlainText(node)
    }
}

impl From<DocSoftBreak> for DocNode {
    fn from(node: DocSoftBreak) -> Self {
        DocNode::SoftBreak(node)
    }
}

impl From<DocEscapedText> for DocNode {
    fn from(node: DocEscapedText) -> Self {
        DocNode::EscapedText(node)
    }
}

impl From<DocErrorText> for DocNode {
    fn from(node: DocErrorText) -> Self {
        DocNode::ErrorText(node)
    }
}

impl From<DocCodeSpan> for DocNode {
    fn from(node: DocCodeSpan) -> Self {
        DocNode::CodeSpan(node)
    }
}

impl From<DocInlineTag> for DocNode {
    fn from(node: DocInlineTag) -> Self {
        DocNode::InlineTag(node)
    }
}

impl From<DocBlockTag> for DocNode {
    fn from(node: DocBlockTag) -> Self {
        DocNode::BlockTag(node)
    }
}

impl From<DocParagraph> for DocNode {
    fn from(node: DocParagraph) -> Self {
        DocNode::Paragraph(node)
    }
}

impl From<DocSection> for DocNode {
    fn from(node: DocSection) -> Self {
        DocNode::Section(node)
    }
}

impl Serialize for DocNode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        match self {
            DocNode::Particle(particle) => particle.serialize(serializer),
            DocNode::PlainText(node) => {
                let mut state = serializer.serialize_struct("DocNode", 2)?;
                state.serialize_field("kind", &self.kind())?;
                state.serialize_field("text", node.text())?;
                state.end()
            }
            DocNode::SoftBreak(_) => {
                let mut state = serializer.serialize_struct("DocNode", 1)?;
                state.serialize_field("kind", &self.kind())?;
                state.end()
            }
            DocNode::EscapedText(node) => {
                let mut state = serializer.serialize_struct("DocNode", 3)?;
                state.serialize_field("kind", &self.kind())?;
                state.serialize_field("escapeStyle", &node.escape_style())?;
                state.serialize_field("encodedText", node.encoded_text())?;
                state.end()
            }
            DocNode::ErrorText(node) => {
                let mut state = serializer.serialize_struct("DocNode", 3)?;
                state.serialize_field("kind", &self.kind())?;
                state.serialize_field("text", node.text())?;
                state.serialize_field("errorMessage", node.error_message())?;
                state.end()
            }
            DocNode::CodeSpan(node) => {
                let mut state = serializer.serialize_struct("DocNode", 2)?;
                state.serialize_field("kind", &self.kind())?;
                state.serialize_field("code", node.code())?;
                state.end()
            }
            DocNode::InlineTag(node) => {
                let mut state = serializer.serialize_struct("DocNode", 3)?;
                state.serialize_field("kind", &self.kind())?;
                state.serialize_field("tagName", node.tag_name())?;
                state.serialize_field("tagContent", node.tag_content())?;
                state.end()
            }
            DocNode::BlockTag(node) => {
                let mut state = serializer.serialize_struct("DocNode", 2)?;
                state.serialize_field("kind", &self.kind())?;
                state.serialize_field("tagName", node.tag_name())?;
                state.end()
            }
            DocNode::Paragraph(node) => {
                let mut state = serializer.serialize_struct("DocNode", 2)?;
                state.serialize_field("kind", &self.kind())?;
                state.serialize_field("children", node.nodes())?;
                state.end()
            }
            DocNode::Section(node) => {
                let mut state = serializer.serialize_struct("DocNode", 2)?;
                state.serialize_field("kind", &self.kind())?;
                state.serialize_field("children", node.nodes())?;
                state.end()
            }
        }
    }
}
