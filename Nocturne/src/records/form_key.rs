//! Stable record identity

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Master files shipped with the base game (Special Edition)
pub const BASE_MASTERS: &[&str] = &[
    "Skyrim.esm",
    "Update.esm",
    "Dawnguard.esm",
    "HearthFires.esm",
    "Dragonborn.esm",
];

/// Largest local form id (24 bits)
const MAX_LOCAL_ID: u32 = 0x00FF_FFFF;

/// Identity of a record: a local id within the plugin that defines it
///
/// Text form is `XXXXXX:Plugin.esm` with six upper-case hex digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FormKey {
    id: u32,
    plugin: String,
}

impl FormKey {
    /// Create a form key. Ids above 24 bits are masked.
    #[must_use]
    pub fn new(id: u32, plugin: impl Into<String>) -> Self {
        Self {
            id: id & MAX_LOCAL_ID,
            plugin: plugin.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }

    #[must_use]
    pub fn plugin(&self) -> &str {
        &self.plugin
    }

    /// Whether the defining plugin is one of the base game masters
    #[must_use]
    pub fn is_base_content(&self) -> bool {
        BASE_MASTERS
            .iter()
            .any(|master| master.eq_ignore_ascii_case(&self.plugin))
    }
}

impl fmt::Display for FormKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06X}:{}", self.id, self.plugin)
    }
}

impl FromStr for FormKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidFormKey(s.to_string());

        let (id, plugin) = s.trim().split_once(':').ok_or_else(invalid)?;
        if id.is_empty()
            || id.len() > 6
            || !id.bytes().all(|b| b.is_ascii_hexdigit())
            || plugin.is_empty()
        {
            return Err(invalid());
        }
        let id = u32::from_str_radix(id, 16).map_err(|_| invalid())?;

        Ok(Self::new(id, plugin))
    }
}

impl TryFrom<String> for FormKey {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FormKey> for String {
    fn from(key: FormKey) -> Self {
        key.to_string()
    }
}
