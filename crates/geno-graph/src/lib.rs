//! # geno-graph
//!
//! Cross-reference graph builder for genofhir.
//!
//! Turns the gene, therapy, and trial sections of a parsed report into one
//! finding per unique item, linked by bidirectional related edges:
//! - alteration -> therapy (untyped) and therapy -> alteration (`derived-from`)
//! - alteration -> trial (untyped) and trial -> alteration (`derived-from`)
//!
//! Therapies are deduplicated by name and trials by title across the whole
//! document. All state for one build lives in a [`GraphBuilder`]; the result
//! is an immutable [`FindingGraph`].

pub mod alterations;
pub mod assembler;
pub mod builder;
pub mod error;
mod graph;
pub mod therapies;
pub mod trials;
pub mod variants;

pub use assembler::{assemble, from_report};
pub use builder::{GeneEntry, GraphBuilder, NewFinding};
pub use error::GraphError;
pub use graph::FindingGraph;
