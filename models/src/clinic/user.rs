// models/src/clinic/user.rs
//
// Canonical User schema. The backend historically served the same record
// with drifting key casing (`Teléfono` vs `telefono`, `Dirección` vs
// `Direccion`); the aliases below absorb every observed variant so callers
// only ever see one shape.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates;
use crate::clinic::role::Role;
use crate::identifiers::EntityId;

/// A domain user tied to an external identity. At most one per
/// external identity id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "UserID")]
    pub id: EntityId,
    #[serde(rename = "amplifyId", alias = "externalIdentityId")]
    pub external_id: String,
    #[serde(rename = "Nombre", alias = "nombre", default)]
    pub nombre: String,
    #[serde(rename = "Email", alias = "email", default)]
    pub email: String,
    #[serde(rename = "Teléfono", alias = "Telefono", alias = "telefono", default)]
    pub telefono: String,
    #[serde(rename = "Dirección", alias = "Direccion", alias = "direccion", default)]
    pub direccion: String,
    #[serde(rename = "Rol")]
    pub rol: Role,
    #[serde(rename = "FechaRegistro", with = "dates::flexible_date")]
    pub fecha_registro: NaiveDate,
}

/// Payload for `POST /users`, built from the profile form plus the
/// identity's stable external id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    #[serde(rename = "amplifyId")]
    pub external_id: String,
    #[serde(rename = "Nombre", default)]
    pub nombre: String,
    #[serde(rename = "Email", default)]
    pub email: String,
    #[serde(rename = "Teléfono", default)]
    pub telefono: String,
    #[serde(rename = "Dirección", default)]
    pub direccion: String,
    #[serde(rename = "Rol")]
    pub rol: Role,
    #[serde(rename = "FechaRegistro", with = "dates::flexible_date")]
    pub fecha_registro: NaiveDate,
}

impl User {
    /// Materializes the stored record the backend would return for a
    /// just-created profile.
    pub fn from_new(id: EntityId, new: &NewUser) -> Self {
        User {
            id,
            external_id: new.external_id.clone(),
            nombre: new.nombre.clone(),
            email: new.email.clone(),
            telefono: new.telefono.clone(),
            direccion: new.direccion.clone(),
            rol: new.rol,
            fecha_registro: new.fecha_registro,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::User;
    use crate::clinic::role::Role;
    use crate::identifiers::EntityId;

    #[test]
    fn should_absorb_field_name_drift() {
        // Mixed casing as served by different backend screens.
        let raw = r#"{
            "UserID": "7",
            "amplifyId": "ext-abc",
            "nombre": "Ana",
            "Email": "ana@clinic.es",
            "telefono": "600111222",
            "Direccion": "Calle Mayor 1",
            "Rol": "Paciente",
            "FechaRegistro": "2024-01-15"
        }"#;
        let user: User = serde_json::from_str(raw).unwrap();
        assert_eq!(user.id, EntityId(7));
        assert_eq!(user.telefono, "600111222");
        assert_eq!(user.direccion, "Calle Mayor 1");
        assert_eq!(user.rol, Role::Paciente);
    }

    #[test]
    fn should_default_missing_display_fields() {
        let raw = r#"{
            "UserID": 3,
            "amplifyId": "ext-x",
            "Rol": "Recepcionista",
            "FechaRegistro": "2024-02-02"
        }"#;
        let user: User = serde_json::from_str(raw).unwrap();
        assert_eq!(user.nombre, "");
        assert_eq!(user.email, "");
    }
}
