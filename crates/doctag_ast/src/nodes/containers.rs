//! Container nodes: sections and paragraphs.

use crate::{DocNode, DocNodeRef};

/// Constructor parameters for [`DocSection`].
#[derive(Debug, Clone, Default)]
pub struct DocSectionParameters {
    /// Initial child nodes, in source order.
    pub nodes: Vec<DocNode>,
}

/// A generic container of nodes.
///
/// Sections own their children exclusively (the tree is a tree, not a DAG).
/// A parser typically allocates an empty section and appends to it as it
/// consumes input; after the parse completes the section is read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct DocSection {
    nodes: Vec<DocNode>,
}

impl DocSection {
    /// Creates a new section.
    pub fn new(parameters: DocSectionParameters) -> Self {
        Self {
            nodes: parameters.nodes,
        }
    }

    /// Atomically replaces this node's children from new parameters.
    pub fn rebuild(&mut self, parameters: DocSectionParameters) {
        *self = Self::new(parameters);
    }

    /// Appends a child node.
    pub fn append_node(&mut self, node: DocNode) {
        self.nodes.push(node);
    }

    /// Appends a sequence of child nodes, preserving their order.
    pub fn append_nodes(&mut self, nodes: impl IntoIterator<Item = DocNode>) {
        self.nodes.extend(nodes);
    }

    /// The owned child nodes, in source order.
    #[inline]
    pub fn nodes(&self) -> &[DocNode] {
        &self.nodes
    }

    pub fn children(&self) -> Vec<DocNodeRef<'_>> {
        self.nodes.iter().map(DocNodeRef::Node).collect()
    }
}

impl Default for DocSection {
    fn default() -> Self {
        Self::new(DocSectionParameters::default())
    }
}

/// Constructor parameters for [`DocParagraph`].
#[derive(Debug, Clone, Default)]
pub struct DocParagraphParameters {
    /// Initial child nodes, in source order.
    pub nodes: Vec<DocNode>,
}

/// A paragraph of inline content.
#[derive(Debug, Clone, PartialEq)]
pub struct DocParagraph {
    nodes: Vec<DocNode>,
}

impl DocParagraph {
    /// Creates a new paragraph.
    pub fn new(parameters: DocParagraphParameters) -> Self {
        Self {
            nodes: parameters.nodes,
        }
    }

    /// Atomically replaces this node's children from new parameters.
    pub fn rebuild(&mut self, parameters: DocParagraphParameters) {
        *self = Self::new(parameters);
    }

    /// Appends a child node.
    pub fn append_node(&mut self, node: DocNode) {
        self.nodes.push(node);
    }

    /// The owned child nodes, in source order.
    #[inline]
    pub fn nodes(&self) -> &[DocNode] {
        &self.nodes
    }

    pub fn children(&self) -> Vec<DocNodeRef<'_>> {
        self.nodes.iter().map(DocNodeRef::Node).collect()
    }
}

impl Default for DocParagraph {
    fn default() -> Self {
        Self::new(DocParagraphParameters::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DocNodeKind, DocPlainText, DocPlainTextParameters, DocSoftBreak};

    fn plain(text: &str) -> DocNode {
        DocNode::PlainText(DocPlainText::new(DocPlainTextParameters {
            text: text.to_string(),
            text_excerpt: None,
        }))
    }

    #[test]
    fn test_empty_section() {
        let section = DocSection::default();
        assert!(section.nodes().is_empty());
        assert!(section.children().is_empty());
    }

    #[test]
    fn test_section_append_preserves_order() {
        let mut section = DocSection::default();
        section.append_node(plain("first"));
        section.append_node(DocNode::SoftBreak(DocSoftBreak::default()));
        section.append_node(plain("second"));

        assert_eq!(section.nodes().len(), 3);
        assert_eq!(section.nodes()[0].kind(), DocNodeKind::PlainText);
        assert_eq!(section.nodes()[1].kind(), DocNodeKind::SoftBreak);
        assert_eq!(section.nodes()[2].kind(), DocNodeKind::PlainText);
    }

    #[test]
    fn test_section_append_nodes() {
        let mut section = DocSection::default();
        section.append_nodes(vec![plain("a"), plain("b")]);
        assert_eq!(section.nodes().len(), 2);
    }

    #[test]
    fn test_paragraph_with_initial_nodes() {
        let paragraph = DocParagraph::new(DocParagraphParameters {
            nodes: vec![plain("hello"), plain("world")],
        });
        assert_eq!(paragraph.nodes().len(), 2);
        assert_eq!(paragraph.children().len(), 2);
    }

    #[test]
    fn test_nested_containers() {
        let paragraph = DocParagraph::new(DocParagraphParameters {
            nodes: vec![plain("inner")],
        });
        let section = DocSection::new(DocSectionParameters {
            nodes: vec![DocNode::Paragraph(paragraph)],
        });

        let children = section.children();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].kind(), DocNodeKind::Paragraph);
    }

    #[test]
    fn test_section_rebuild_replaces_children() {
        let mut section = DocSection::new(DocSectionParameters {
            nodes: vec![plain("old"), plain("stale")],
        });

        section.rebuild(DocSectionParameters {
            nodes: vec![plain("new")],
        });

        assert_eq!(section.nodes().len(), 1);
        match &section.nodes()[0] {
            DocNode::PlainText(text) => assert_eq!(text.text(), "new"),
            other => panic!("expected PlainText, got {:?}", other.kind()),
        }
    }
}
