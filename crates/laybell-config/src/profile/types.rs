//! Profile override type.

use crate::schema::ParamValue;
use std::collections::BTreeMap;

/// A named partial override of the base configuration.
pub type ProfileOverrides = BTreeMap<String, ParamValue>;
