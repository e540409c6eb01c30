//! Rule-based normalization of marketplace listings.
//!
//! Turns free-text product titles scraped from retail stores into canonical
//! records (brand, condition, SIM type, storage capacity and a cleaned model
//! name) so the same product can be compared across stores. The built-in rule
//! tables are compiled once into a [`RuleSet`] that every stage borrows.

pub mod assemble;
pub mod audit;
pub mod batch;
pub mod brand;
pub mod capacity;
pub mod condition;
pub mod device;
pub mod document;
pub mod error;
pub mod pipeline;
pub mod prepare;
pub mod residual;
pub mod ruleset;
pub mod sim;

mod rules;

pub use audit::{audit_store, has_seminuevo_pattern, SeminuevoAudit};
pub use batch::{normalize_store, StoreBatch};
pub use document::{parse_documents, DocumentBatch};
pub use error::NormalizeError;
pub use pipeline::{extract, normalize_listing, Extraction, Outcome};
pub use ruleset::RuleSet;
