use crate::text::capitalize;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Placeholder stored in `type2` when a creature has a single type.
pub const NO_SECOND_TYPE: &str = "—";

fn default_second_type() -> String {
    NO_SECOND_TYPE.to_string()
}

/// Generation as delivered by the data source: either an ordinal or a label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Generation {
    Number(u32),
    Label(String),
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Label(label) => f.write_str(label),
        }
    }
}

impl From<u32> for Generation {
    fn from(n: u32) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for Generation {
    fn from(label: &str) -> Self {
        Self::Label(label.to_string())
    }
}

#[derive(Debug, Error)]
pub enum CreatureError {
    #[error("creature field `{0}` must not be empty")]
    EmptyField(&'static str),
    #[error("creature JSON is malformed: {0}")]
    Json(#[from] serde_json::Error),
}

/// The creature the player just identified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedCreature {
    pub name: String,
    pub image: String,
    pub type1: String,
    #[serde(default = "default_second_type")]
    pub type2: String,
    pub generation: Generation,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub habitat: String,
}

impl CapturedCreature {
    /// Parse and validate a single record.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a required field is empty.
    pub fn from_json(json: &str) -> Result<Self, CreatureError> {
        let creature: Self = serde_json::from_str(json)?;
        creature.validate()?;
        Ok(creature)
    }

    /// Check the fields the capture dialog cannot render without.
    ///
    /// # Errors
    ///
    /// Returns [`CreatureError::EmptyField`] naming the first blank field.
    pub fn validate(&self) -> Result<(), CreatureError> {
        for (field, value) in [
            ("name", &self.name),
            ("image", &self.image),
            ("type1", &self.type1),
        ] {
            if value.trim().is_empty() {
                return Err(CreatureError::EmptyField(field));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn has_second_type(&self) -> bool {
        self.type2 != NO_SECOND_TYPE
    }

    #[must_use]
    pub fn display_name(&self) -> String {
        capitalize(&self.name)
    }

    /// `Type1` or `Type1/Type2`, both capitalized.
    #[must_use]
    pub fn type_label(&self) -> String {
        let primary = capitalize(&self.type1);
        if self.has_second_type() {
            format!("{primary}/{}", capitalize(&self.type2))
        } else {
            primary
        }
    }

    /// Generation exactly as supplied.
    #[must_use]
    pub fn generation_label(&self) -> String {
        self.generation.to_string()
    }

    #[must_use]
    pub fn display_color(&self) -> String {
        capitalize(&self.color)
    }

    #[must_use]
    pub fn display_habitat(&self) -> String {
        capitalize(&self.habitat)
    }
}
