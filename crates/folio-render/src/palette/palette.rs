//! The concrete color mapping for one scheme.

use std::collections::BTreeMap;

use super::error::PaletteError;
use super::role::ColorRole;

/// An immutable mapping from every [`ColorRole`] to a CSS value.
///
/// Values are opaque CSS strings: plain colors (`#0f172a`,
/// `rgba(2, 6, 23, 0.7)`), gradients, and box shadows are all accepted. A
/// palette always has a non-empty value for every role; [`PaletteBuilder`]
/// refuses to build one otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    values: [String; ColorRole::COUNT],
}

impl Palette {
    /// Builds a palette from a complete `(role, value)` table.
    pub fn from_table(scheme: &str, table: &[(ColorRole, &str)]) -> Result<Self, PaletteError> {
        table
            .iter()
            .fold(PaletteBuilder::new(scheme), |builder, (role, value)| {
                builder.set(*role, *value)
            })
            .build()
    }

    /// Builds a palette from camelCase keys, as found in YAML configuration.
    pub fn from_keys(
        scheme: &str,
        entries: &BTreeMap<String, String>,
    ) -> Result<Self, PaletteError> {
        let mut builder = PaletteBuilder::new(scheme);
        for (key, value) in entries {
            let role = ColorRole::from_key(key).ok_or_else(|| PaletteError::UnknownRole {
                scheme: scheme.to_string(),
                role: key.clone(),
            })?;
            builder = builder.set(role, value.as_str());
        }
        builder.build()
    }

    /// Builds a palette from a table known to cover every role.
    pub(crate) fn from_static(table: &[(ColorRole, &str)]) -> Self {
        let mut values: [String; ColorRole::COUNT] = Default::default();
        for (role, value) in table {
            values[role.index()] = (*value).to_string();
        }
        Self { values }
    }

    /// The value assigned to `role`.
    pub fn get(&self, role: ColorRole) -> &str {
        &self.values[role.index()]
    }

    /// Iterates over `(role, value)` pairs in role order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorRole, &str)> {
        ColorRole::ALL
            .into_iter()
            .map(move |role| (role, self.get(role)))
    }
}

/// Collects role values and checks completeness.
#[derive(Debug, Clone)]
pub struct PaletteBuilder {
    scheme: String,
    values: [Option<String>; ColorRole::COUNT],
}

impl PaletteBuilder {
    /// Starts a palette for the named scheme (used in error messages).
    pub fn new(scheme: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            values: Default::default(),
        }
    }

    /// Assigns `value` to `role`, replacing any earlier assignment.
    pub fn set(mut self, role: ColorRole, value: impl Into<String>) -> Self {
        self.values[role.index()] = Some(value.into().trim().to_string());
        self
    }

    /// Builds the palette, failing on the first missing or empty role.
    pub fn build(self) -> Result<Palette, PaletteError> {
        let scheme = self.scheme;
        let mut values: [String; ColorRole::COUNT] = Default::default();
        for (role, value) in ColorRole::ALL.into_iter().zip(self.values) {
            match value {
                None => {
                    return Err(PaletteError::MissingRole {
                        scheme,
                        role: role.key(),
                    })
                }
                Some(v) if v.is_empty() => {
                    return Err(PaletteError::EmptyValue {
                        scheme,
                        role: role.key(),
                    })
                }
                Some(v) => values[role.index()] = v,
            }
        }
        Ok(Palette { values })
    }
}
