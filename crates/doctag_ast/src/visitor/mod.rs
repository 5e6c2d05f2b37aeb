//! Visitor pattern for doc comment tree traversal.
//!
//! # Overview
//!
//! - [`Visitor`] - Read-only traversal trait
//! - [`walk_node`] - Dispatch function for kind-specific visitors
//! - [`walk_children`] - Traverse all children of a tree position
//!
//! # Examples
//!
//! ## Collecting code spans
//!
//! ```rust
//! use doctag_ast::{DocCodeSpan, DocCodeSpanParameters, DocNode, DocParagraph,
//!     DocParagraphParameters};
//! use doctag_ast::visitor::{Visitor, VisitResult, walk_node};
//! use std::ops::ControlFlow;
//!
//! struct CodeCollector {
//!     code: Vec<String>,
//! }
//!
//! impl<'a> Visitor<'a> for CodeCollector {
//!     fn visit_code_span(&mut self, node: &'a DocCodeSpan) -> VisitResult {
//!         self.code.push(node.code().to_string());
//!         ControlFlow::Continue(())
//!     }
//! }
//!
//! let paragraph: DocNode = DocParagraph::new(DocParagraphParameters {
//!     nodes: vec![DocCodeSpan::new(DocCodeSpanParameters {
//!         code: "x".to_string(),
//!         ..Default::default()
//!     })
//!     .into()],
//! })
//! .into();
//!
//! let mut collector = CodeCollector { code: Vec::new() };
//! let _ = walk_node(&mut collector, paragraph.as_ref());
//! assert_eq!(collector.code, vec!["x"]);
//! ```

mod visit;
mod walk;

pub use visit::{VisitResult, Visitor};
pub use walk::{walk_all, walk_children, walk_node};
