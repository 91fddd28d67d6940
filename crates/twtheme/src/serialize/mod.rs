//! Renderers turning export rows into theme text.
//!
//! - [`to_css`]: a Tailwind 4 `@theme { ... }` block of custom properties
//! - [`to_nested`] / [`to_nested_json`]: a Tailwind 3 style config object
//!   grouped by value kind
//! - [`deep_merge`]: the recursive object merge used for nested colors

mod css;
mod merge;
mod nested;

pub use css::{to_css, DECLARATION_SEPARATOR};
pub use merge::{deep_merge, merge_into};
pub use nested::{group_key, to_nested, to_nested_json};
