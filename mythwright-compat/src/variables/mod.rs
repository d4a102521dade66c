//! Legacy variable definitions
//!
//!     Legacy brews declare variables with a line-oriented block syntax:
//!
//!         [Title]: Legendary Sword
//!
//!         $[damage]: 2d6 + 3
//!
//!     A label in square brackets, a colon, and the content up to the next blank
//!     line. An optional `!` or `$` prefix marks a variant definition kind; it is
//!     recorded on the definition but never leaks into the label or content.
//!
//!     This module only finds definitions. Substitution and duplicate resolution
//!     belong to the callers; duplicates are returned in source order.

mod extract;
mod label;

pub use extract::{extract_variable_definitions, DefinitionMarker, VariableDefinition};
pub use label::normalize_var_name;
