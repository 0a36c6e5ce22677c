//! Picking a resource by name or by ID

use crate::error::{Result, SpaceError};

/// How the user identified a resource on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<'a> {
    Id(&'a str),
    Name(&'a str),
}

impl<'a> Selector<'a> {
    /// Exactly one of the two flags must be set; empty values count as unset.
    ///
    /// `flags` names the pair for the error message, e.g. `("--name", "--id")`.
    pub fn pick(
        name: Option<&'a str>,
        id: Option<&'a str>,
        flags: (&str, &str),
    ) -> Result<Self> {
        let name = name.filter(|v| !v.is_empty());
        let id = id.filter(|v| !v.is_empty());
        match (name, id) {
            (Some(name), None) => Ok(Selector::Name(name)),
            (None, Some(id)) => Ok(Selector::Id(id)),
            _ => Err(SpaceError::Config(format!(
                "exactly one of {} or {} is required",
                flags.0, flags.1
            ))),
        }
    }

    /// Like [`Selector::pick`] but `None` when neither flag is set
    pub fn optional(
        name: Option<&'a str>,
        id: Option<&'a str>,
        flags: (&str, &str),
    ) -> Result<Option<Self>> {
        if name.is_none_or(str::is_empty) && id.is_none_or(str::is_empty) {
            return Ok(None);
        }
        Self::pick(name, id, flags).map(Some)
    }
}
