//! Variable definition tests
//!
//! Extraction over whole brews and the label normalizer, through the public API.

mod extract;
mod normalize;
