//! # geno-core
//!
//! Core types, identifier assignment, and error types for genofhir.
//!
//! This crate provides the foundational types shared across all genofhir crates:
//! - Finding entities produced by the cross-reference graph (alterations,
//!   therapies, clinical trials) and the sibling variant records
//! - Kind, relation, and classification enums
//! - Order-based identifier assignment (`<reportId>-<kind-tag>-<ordinal>`)
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
