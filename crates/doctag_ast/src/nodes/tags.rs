//! Block and inline tags.

use crate::{DocNodeRef, DocParticle, DocParticleParameters, Excerpt};

/// Constructor parameters for [`DocBlockTag`].
#[derive(Debug, Clone, Default)]
pub struct DocBlockTagParameters {
    /// Excerpt for the tag name, when parsed from source.
    pub tag_name_excerpt: Option<Excerpt>,
    /// The tag name, including the leading `@` (e.g. `@remarks`).
    pub tag_name: String,
}

/// A block tag such as `@remarks`, which introduces a new section of the
/// comment.
///
/// The content that follows the tag belongs to the surrounding section, not
/// to this node; the block tag itself is just the tag token.
#[derive(Debug, Clone, PartialEq)]
pub struct DocBlockTag {
    tag_name: DocParticle,
}

impl DocBlockTag {
    /// Creates a new block tag node.
    pub fn new(parameters: DocBlockTagParameters) -> Self {
        Self {
            tag_name: DocParticle::new(DocParticleParameters {
                content: parameters.tag_name,
                excerpt: parameters.tag_name_excerpt,
            }),
        }
    }

    /// Atomically replaces this node's children from new parameters.
    pub fn rebuild(&mut self, parameters: DocBlockTagParameters) {
        *self = Self::new(parameters);
    }

    /// The tag name, including the leading `@`.
    #[inline]
    pub fn tag_name(&self) -> &str {
        self.tag_name.content()
    }

    pub fn children(&self) -> Vec<DocNodeRef<'_>> {
        vec![DocNodeRef::Particle(&self.tag_name)]
    }
}

/// Constructor parameters for [`DocInlineTag`].
#[derive(Debug, Clone, Default)]
pub struct DocInlineTagParameters {
    /// Excerpt for the opening `{`, when parsed from source.
    pub opening_delimiter_excerpt: Option<Excerpt>,
    /// Excerpt for the tag name, when parsed from source.
    pub tag_name_excerpt: Option<Excerpt>,
    /// The tag name, including the leading `@` (e.g. `@link`).
    pub tag_name: String,
    /// Excerpt for the tag content, when parsed from source.
    pub tag_content_excerpt: Option<Excerpt>,
    /// The tag content (everything between the tag name and the closing
    /// brace), possibly empty.
    pub tag_content: String,
    /// Excerpt for the closing `}`, when parsed from source.
    pub closing_delimiter_excerpt: Option<Excerpt>,
}

/// An inline tag such as `{@link SomeTarget | display text}`.
#[derive(Debug, Clone, PartialEq)]
pub struct DocInlineTag {
    // The opening { delimiter
    opening_delimiter: DocParticle,
    tag_name: DocParticle,
    tag_content: DocParticle,
    // The closing } delimiter
    closing_delimiter: DocParticle,
}

impl DocInlineTag {
    /// Creates a new inline tag node, materializing all four particles.
    pub fn new(parameters: DocInlineTagParameters) -> Self {
        Self {
            opening_delimiter: DocParticle::from_excerpt_or(
                parameters.opening_delimiter_excerpt,
                "{",
            ),
            tag_name: DocParticle::new(DocParticleParameters {
                content: parameters.tag_name,
                excerpt: parameters.tag_name_excerpt,
            }),
            tag_content: DocParticle::new(DocParticleParameters {
                content: parameters.tag_content,
                excerpt: parameters.tag_content_excerpt,
            }),
            closing_delimiter: DocParticle::from_excerpt_or(
                parameters.closing_delimiter_excerpt,
                "}",
            ),
        }
    }

    /// Atomically replaces this node's children from new parameters.
    pub fn rebuild(&mut self, parameters: DocInlineTagParameters) {
        *self = Self::new(parameters);
    }

    /// The tag name, including the leading `@`.
    #[inline]
    pub fn tag_name(&self) -> &str {
        self.tag_name.content()
    }

    /// The tag content, possibly empty.
    #[inline]
    pub fn tag_content(&self) -> &str {
        self.tag_content.content()
    }

    /// Returns `[opening, tag name, tag content, closing]` in source order.
    pub fn children(&self) -> Vec<DocNodeRef<'_>> {
        vec![
            DocNodeRef::Particle(&self.opening_delimiter),
            DocNodeRef::Particle(&self.tag_name),
            DocNodeRef::Particle(&self.tag_content),
            DocNodeRef::Particle(&self.closing_delimiter),
        ]
    }
}
