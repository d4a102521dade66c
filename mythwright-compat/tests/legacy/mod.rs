//! Legacy brew import tests
//!
//! Whole brews through markdown import and definition stripping.

mod import;
