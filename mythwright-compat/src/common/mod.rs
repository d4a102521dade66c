//! Helpers shared by the extractors and the format adapters.

pub mod inline;
pub mod whitespace;
