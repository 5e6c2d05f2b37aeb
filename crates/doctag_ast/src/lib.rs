//! # doctag_ast
//!
//! Lossless AST types for doctag documentation comments.
//!
//! This crate provides the node/particle/excerpt framework used to model
//! TSDoc-style doc comments. A tree is **lossless**: concatenating the
//! content of its leaf particles in order reproduces the original comment
//! text byte for byte, so the same tree serves semantic analysis and exact
//! text regeneration alike.
//!
//! ## Architecture
//!
//! - [`Excerpt`] references a span of the original comment text
//! - [`DocParticle`] pairs literal text with an optional excerpt
//! - [`DocNode`] is a closed tagged union over every node kind; each kind
//!   materializes its particles at construction, so a constructed node is
//!   always fully populated
//! - Trees are immutable after construction; the only mutations are the
//!   construction-phase `append_node` on containers and the explicit
//!   `rebuild`, which replaces a node's children atomically
//!
//! The tokenizer, parser, and renderer are separate components; this crate
//! only models nodes the parser has already decided on.
//!
//! ## Example
//!
//! ```rust
//! use doctag_ast::emit::node_text;
//! use doctag_ast::{DocCodeSpan, DocCodeSpanParameters, DocNode, Excerpt, SourceText, Span};
//!
//! let source = SourceText::new("`hello`");
//! let node: DocNode = DocCodeSpan::new(DocCodeSpanParameters {
//!     opening_delimiter_excerpt: Some(Excerpt::new(&source, Span::new(0, 1))?),
//!     code_excerpt: Some(Excerpt::new(&source, Span::new(1, 6))?),
//!     code: "hello".to_string(),
//!     closing_delimiter_excerpt: Some(Excerpt::new(&source, Span::new(6, 7))?),
//! })
//! .into();
//!
//! assert_eq!(node_text(node.as_ref()), "`hello`");
//! # Ok::<(), doctag_ast::ExcerptError>(())
//! ```

pub mod emit;
mod node;
mod node_kind;
mod nodes;
mod particle;
mod source;
mod span;
pub mod visitor;

pub use node::{DocNode, DocNodeRef};
pub use node_kind::DocNodeKind;
pub use nodes::{
    DocBlockTag, DocBlockTagParameters, DocCodeSpan, DocCodeSpanParameters, DocErrorText,
    DocErrorTextParameters, DocEscapedText, DocEscapedTextParameters, DocInlineTag,
    DocInlineTagParameters, DocParagraph, DocParagraphParameters, DocPlainText,
    DocPlainTextParameters, DocSection, DocSectionParameters, DocSoftBreak,
    DocSoftBreakParameters, EscapeStyle,
};
pub use particle::{DocParticle, DocParticleParameters};
pub use source::{Excerpt, ExcerptError, SourceText};
pub use span::Span;

// Re-export commonly used visitor items for convenience
pub use visitor::{VisitResult, Visitor};
