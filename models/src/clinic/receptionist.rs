// models/src/clinic/receptionist.rs

use serde::{Deserialize, Serialize};

use crate::identifiers::EntityId;

/// Role entity for a `User` with `Rol = Recepcionista`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receptionist {
    #[serde(rename = "RecepcionistaID")]
    pub id: EntityId,
    #[serde(rename = "UserID")]
    pub user_id: EntityId,
    #[serde(rename = "Oficina", default)]
    pub oficina: String,
    #[serde(rename = "Turno", default)]
    pub turno: String,
    #[serde(rename = "Departamento", default)]
    pub departamento: String,
    #[serde(rename = "Estado", default)]
    pub estado: String,
    #[serde(rename = "Salario", default)]
    pub salario: String,
    #[serde(rename = "Notas", default)]
    pub notas: String,
}

/// Payload for `POST /receptionists`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewReceptionist {
    #[serde(rename = "UserID")]
    pub user_id: EntityId,
    #[serde(rename = "Oficina", default)]
    pub oficina: String,
    #[serde(rename = "Turno", default)]
    pub turno: String,
    #[serde(rename = "Departamento", default = "default_departamento")]
    pub departamento: String,
    #[serde(rename = "Estado", default = "default_estado")]
    pub estado: String,
    #[serde(rename = "Salario", default)]
    pub salario: String,
    #[serde(rename = "Notas", default)]
    pub notas: String,
}

fn default_departamento() -> String {
    "Recepción".to_string()
}

fn default_estado() -> String {
    "Activo".to_string()
}

impl NewReceptionist {
    pub fn for_user(user_id: EntityId) -> Self {
        NewReceptionist {
            user_id,
            oficina: String::new(),
            turno: String::new(),
            departamento: default_departamento(),
            estado: default_estado(),
            salario: String::new(),
            notas: String::new(),
        }
    }
}

impl Receptionist {
    pub fn from_new(id: EntityId, new: &NewReceptionist) -> Self {
        Receptionist {
            id,
            user_id: new.user_id,
            oficina: new.oficina.clone(),
            turno: new.turno.clone(),
            departamento: new.departamento.clone(),
            estado: new.estado.clone(),
            salario: new.salario.clone(),
            notas: new.notas.clone(),
        }
    }
}
