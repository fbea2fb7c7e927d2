// models/src/clinic/health_professional.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates;
use crate::identifiers::EntityId;

/// Role entity for a `User` with `Rol = Médico`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthProfessional {
    #[serde(rename = "ProfesionalID")]
    pub id: EntityId,
    #[serde(rename = "UserID")]
    pub user_id: EntityId,
    #[serde(rename = "Especialidad", default)]
    pub especialidad: String,
    #[serde(rename = "NumeroLicencia", default)]
    pub numero_licencia: String,
    #[serde(rename = "Departamento", default)]
    pub departamento: String,
    #[serde(rename = "FechaContratacion", with = "dates::flexible_date_opt", default)]
    pub fecha_contratacion: Option<NaiveDate>,
    #[serde(rename = "Estado", default)]
    pub estado: String,
    #[serde(rename = "Salario", default)]
    pub salario: String,
}

/// Payload for `POST /health-professionals`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewHealthProfessional {
    #[serde(rename = "UserID")]
    pub user_id: EntityId,
    #[serde(rename = "Especialidad", default)]
    pub especialidad: String,
    #[serde(rename = "NumeroLicencia", default)]
    pub numero_licencia: String,
    #[serde(rename = "Departamento", default)]
    pub departamento: String,
    #[serde(rename = "FechaContratacion", with = "dates::flexible_date_opt", default)]
    pub fecha_contratacion: Option<NaiveDate>,
    #[serde(rename = "Estado", default = "default_estado")]
    pub estado: String,
    #[serde(rename = "Salario", default)]
    pub salario: String,
}

fn default_estado() -> String {
    "Activo".to_string()
}

impl NewHealthProfessional {
    pub fn for_user(user_id: EntityId) -> Self {
        NewHealthProfessional {
            user_id,
            especialidad: String::new(),
            numero_licencia: String::new(),
            departamento: String::new(),
            fecha_contratacion: None,
            estado: default_estado(),
            salario: String::new(),
        }
    }
}

impl HealthProfessional {
    pub fn from_new(id: EntityId, new: &NewHealthProfessional) -> Self {
        HealthProfessional {
            id,
            user_id: new.user_id,
            especialidad: new.especialidad.clone(),
            numero_licencia: new.numero_licencia.clone(),
            departamento: new.departamento.clone(),
            fecha_contratacion: new.fecha_contratacion,
            estado: new.estado.clone(),
            salario: new.salario.clone(),
        }
    }
}
