// models/src/clinic/patient.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates;
use crate::identifiers::EntityId;

/// Role entity for a `User` with `Rol = Paciente`. One-to-one with its user;
/// display attributes (name, email, phone) live on the `User` record and get
/// merged in by the join layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    #[serde(rename = "PacienteID")]
    pub id: EntityId,
    #[serde(rename = "UserID")]
    pub user_id: EntityId,
    #[serde(rename = "DNI", default)]
    pub dni: String,
    #[serde(rename = "FechaNacimiento", with = "dates::flexible_date_opt", default)]
    pub fecha_nacimiento: Option<NaiveDate>,
    #[serde(rename = "Genero", default)]
    pub genero: String,
    #[serde(rename = "Direccion", alias = "Dirección", default)]
    pub direccion: String,
    #[serde(rename = "NumeroSeguridadSocial", default)]
    pub numero_seguridad_social: String,
    #[serde(rename = "GrupoSanguineo", default)]
    pub grupo_sanguineo: String,
    #[serde(rename = "Alergias", default)]
    pub alergias: String,
    #[serde(rename = "AntecedentesPersonales", default)]
    pub antecedentes_personales: String,
    #[serde(rename = "AntecedentesFamiliares", default)]
    pub antecedentes_familiares: String,
    #[serde(rename = "NotasMedicas", default)]
    pub notas_medicas: String,
}

/// Payload for `POST /patients` from the patient intake form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPatient {
    #[serde(rename = "UserID")]
    pub user_id: EntityId,
    #[serde(rename = "DNI", default)]
    pub dni: String,
    #[serde(rename = "FechaNacimiento", with = "dates::flexible_date_opt", default)]
    pub fecha_nacimiento: Option<NaiveDate>,
    #[serde(rename = "Genero", default)]
    pub genero: String,
    #[serde(rename = "Direccion", default)]
    pub direccion: String,
    #[serde(rename = "NumeroSeguridadSocial", default)]
    pub numero_seguridad_social: String,
    #[serde(rename = "GrupoSanguineo", default)]
    pub grupo_sanguineo: String,
    #[serde(rename = "Alergias", default)]
    pub alergias: String,
    #[serde(rename = "AntecedentesPersonales", default)]
    pub antecedentes_personales: String,
    #[serde(rename = "AntecedentesFamiliares", default)]
    pub antecedentes_familiares: String,
    #[serde(rename = "NotasMedicas", default)]
    pub notas_medicas: String,
}

impl NewPatient {
    /// Blank intake form bound to a user.
    pub fn for_user(user_id: EntityId) -> Self {
        NewPatient {
            user_id,
            dni: String::new(),
            fecha_nacimiento: None,
            genero: String::new(),
            direccion: String::new(),
            numero_seguridad_social: String::new(),
            grupo_sanguineo: String::new(),
            alergias: String::new(),
            antecedentes_personales: String::new(),
            antecedentes_familiares: String::new(),
            notas_medicas: String::new(),
        }
    }
}

impl Patient {
    pub fn from_new(id: EntityId, new: &NewPatient) -> Self {
        Patient {
            id,
            user_id: new.user_id,
            dni: new.dni.clone(),
            fecha_nacimiento: new.fecha_nacimiento,
            genero: new.genero.clone(),
            direccion: new.direccion.clone(),
            numero_seguridad_social: new.numero_seguridad_social.clone(),
            grupo_sanguineo: new.grupo_sanguineo.clone(),
            alergias: new.alergias.clone(),
            antecedentes_personales: new.antecedentes_personales.clone(),
            antecedentes_familiares: new.antecedentes_familiares.clone(),
            notas_medicas: new.notas_medicas.clone(),
        }
    }
}
