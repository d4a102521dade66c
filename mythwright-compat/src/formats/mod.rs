//! Format adapters
//!
//! Conversions between document trees and their text representations:
//! HTML markup (both ways), plain text (out) and legacy markdown (in).

pub mod html;
pub mod markdown;
pub mod text;

pub use text::strip_markup;
