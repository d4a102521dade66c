//! Document tree tests
//!
//! Coercion of loose input into trees and the shape validator.

mod ensure;
mod validate;
