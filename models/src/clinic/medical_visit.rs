// models/src/clinic/medical_visit.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dates;
use crate::identifiers::EntityId;

/// The clinical record of an appointment. Zero-or-one per `Appointment`;
/// created the first time the professional manages the visit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalVisit {
    #[serde(rename = "VisitaID")]
    pub id: EntityId,
    #[serde(rename = "CitaID")]
    pub cita_id: EntityId,
    #[serde(rename = "FechaHora", with = "dates::flexible_datetime")]
    pub fecha_hora: DateTime<Utc>,
    #[serde(rename = "MotivoConsulta", default)]
    pub motivo_consulta: String,
    #[serde(rename = "Diagnostico", default)]
    pub diagnostico: String,
    #[serde(rename = "Notas", default)]
    pub notas: String,
    #[serde(rename = "Duracion", default)]
    pub duracion: String,
}

/// Payload for `POST /medical-visits`. `FechaHora` is stamped by the caller
/// at creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMedicalVisit {
    #[serde(rename = "CitaID")]
    pub cita_id: EntityId,
    #[serde(rename = "FechaHora", with = "dates::flexible_datetime")]
    pub fecha_hora: DateTime<Utc>,
    #[serde(rename = "MotivoConsulta", default)]
    pub motivo_consulta: String,
    #[serde(rename = "Diagnostico", default)]
    pub diagnostico: String,
    #[serde(rename = "Notas", default)]
    pub notas: String,
    #[serde(rename = "Duracion", default)]
    pub duracion: String,
}

impl NewMedicalVisit {
    /// Blank visit for an appointment, stamped now.
    pub fn for_appointment(cita_id: EntityId) -> Self {
        NewMedicalVisit {
            cita_id,
            fecha_hora: Utc::now(),
            motivo_consulta: String::new(),
            diagnostico: String::new(),
            notas: String::new(),
            duracion: String::new(),
        }
    }
}

impl MedicalVisit {
    pub fn from_new(id: EntityId, new: &NewMedicalVisit) -> Self {
        MedicalVisit {
            id,
            cita_id: new.cita_id,
            fecha_hora: new.fecha_hora,
            motivo_consulta: new.motivo_consulta.clone(),
            diagnostico: new.diagnostico.clone(),
            notas: new.notas.clone(),
            duracion: new.duracion.clone(),
        }
    }
}
