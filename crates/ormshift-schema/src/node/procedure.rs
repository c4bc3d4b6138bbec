use crate::prelude::*;
use derive_more::{Display, FromStr};

///
/// StoredProcedureMapping
///
/// A context-level wrapper around a native callable. Parameter order is the
/// declared order and is never re-sorted.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct StoredProcedureMapping {
    pub method_name: String,
    pub stored_proc_name: String,
    pub return_type: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<ParameterMapping>,
}

impl StoredProcedureMapping {
    #[must_use]
    pub fn new(
        method_name: impl Into<String>,
        stored_proc_name: impl Into<String>,
        return_type: impl Into<String>,
    ) -> Self {
        Self {
            method_name: method_name.into(),
            stored_proc_name: stored_proc_name.into(),
            return_type: return_type.into(),
            parameters: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_parameter(mut self, parameter: ParameterMapping) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Split the native name into `(schema, name)` on its last separator.
    #[must_use]
    pub fn qualified_name(&self) -> (Option<&str>, &str) {
        let name = self.stored_proc_name.trim();

        match name.rsplit_once('.') {
            Some((schema, proc)) if !schema.is_empty() => (Some(schema), proc),
            _ => (None, name),
        }
    }
}

///
/// ParameterMapping
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ParameterMapping {
    pub name: String,

    #[serde(rename = "type")]
    pub ty: String,

    #[serde(default)]
    pub direction: ParameterDirection,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

impl ParameterMapping {
    #[must_use]
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_direction(mut self, direction: ParameterDirection) -> Self {
        self.direction = direction;
        self
    }

    #[must_use]
    pub const fn with_size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }
}

///
/// ParameterDirection
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, Eq, FromStr, PartialEq, Serialize,
)]
pub enum ParameterDirection {
    #[default]
    Input,
    Output,
    InputOutput,
}

impl ParameterDirection {
    /// Pass-by-reference keyword for the generated wrapper, if any.
    #[must_use]
    pub const fn qualifier(self) -> Option<&'static str> {
        match self {
            Self::Input => None,
            Self::Output => Some("out"),
            Self::InputOutput => Some("ref"),
        }
    }
}

///
/// StoredProcedureResult
///
/// Key-less, table-less record shape returned by a stored procedure.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct StoredProcedureResult {
    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<EntityProperty>,
}

impl StoredProcedureResult {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_property(mut self, property: EntityProperty) -> Self {
        self.properties.push(property);
        self
    }
}

///
/// TESTS
///
