// models/src/clinic/role.rs

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ModelError, ModelResult};

/// The role a `User` signed up with. Decides which role-entity collection
/// resolution scans and which portal the front-end routes to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "Paciente")]
    Paciente,
    #[serde(rename = "Médico", alias = "Medico")]
    Medico,
    #[serde(rename = "Recepcionista")]
    Recepcionista,
}

impl Role {
    /// Backend collection holding this role's entity records.
    pub fn collection(&self) -> &'static str {
        match self {
            Role::Paciente => "patients",
            Role::Medico => "health-professionals",
            Role::Recepcionista => "receptionists",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Paciente => "Paciente",
            Role::Medico => "Médico",
            Role::Recepcionista => "Recepcionista",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Role {
    type Err = ModelError;

    fn from_str(s: &str) -> ModelResult<Self> {
        match s {
            "Paciente" => Ok(Role::Paciente),
            "Médico" | "Medico" => Ok(Role::Medico),
            "Recepcionista" => Ok(Role::Recepcionista),
            other => Err(ModelError::UnknownRole(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Role;

    #[test]
    fn should_parse_accented_and_plain_medico() {
        assert_eq!("Médico".parse::<Role>().unwrap(), Role::Medico);
        assert_eq!("Medico".parse::<Role>().unwrap(), Role::Medico);
    }

    #[test]
    fn should_deserialize_role_alias() {
        let role: Role = serde_json::from_str("\"Medico\"").unwrap();
        assert_eq!(role, Role::Medico);
    }

    #[test]
    fn should_map_roles_to_collections() {
        assert_eq!(Role::Paciente.collection(), "patients");
        assert_eq!(Role::Medico.collection(), "health-professionals");
        assert_eq!(Role::Recepcionista.collection(), "receptionists");
    }

    #[test]
    fn should_reject_unknown_role() {
        assert!("Enfermero".parse::<Role>().is_err());
    }
}
