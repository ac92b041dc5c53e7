//! Profile loading and merging.
//!
//! A profile is a `[profiles.<name>]` table in `config.toml` whose keys
//! overwrite or extend the `[default]` table. Derived values are computed
//! after the merge, and only for keys neither tier set.

mod apply;
mod store;
mod types;

pub use apply::apply_profile;
pub use store::{load_from_str, ProfileStore};
pub use types::ProfileOverrides;

#[cfg(test)]
mod tests;
