// models/src/clinic/appointment.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dates;
use crate::identifiers::EntityId;

/// An appointment booked by a receptionist. References exactly one patient,
/// one receptionist and one professional; a `MedicalVisit` may be attached
/// lazily once the professional manages it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    #[serde(rename = "CitaID")]
    pub id: EntityId,
    #[serde(rename = "PacienteID")]
    pub paciente_id: EntityId,
    #[serde(rename = "RecepcionistaID")]
    pub recepcionista_id: EntityId,
    #[serde(rename = "ProfesionalID")]
    pub profesional_id: EntityId,
    #[serde(rename = "FechaHora", with = "dates::flexible_datetime")]
    pub fecha_hora: DateTime<Utc>,
    // Free-form on the backend; "Pendiente" on creation.
    #[serde(rename = "Estado", default)]
    pub estado: String,
    #[serde(rename = "Notas", default)]
    pub notas: String,
}

/// Payload for `POST /appointments` from the scheduling form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAppointment {
    #[serde(rename = "PacienteID")]
    pub paciente_id: EntityId,
    #[serde(rename = "RecepcionistaID")]
    pub recepcionista_id: EntityId,
    #[serde(rename = "ProfesionalID")]
    pub profesional_id: EntityId,
    #[serde(rename = "FechaHora", with = "dates::flexible_datetime")]
    pub fecha_hora: DateTime<Utc>,
    #[serde(rename = "Estado", default = "default_estado")]
    pub estado: String,
    #[serde(rename = "Notas", default)]
    pub notas: String,
}

fn default_estado() -> String {
    "Pendiente".to_string()
}

impl NewAppointment {
    pub fn new(
        paciente_id: EntityId,
        recepcionista_id: EntityId,
        profesional_id: EntityId,
        fecha_hora: DateTime<Utc>,
    ) -> Self {
        NewAppointment {
            paciente_id,
            recepcionista_id,
            profesional_id,
            fecha_hora,
            estado: default_estado(),
            notas: String::new(),
        }
    }
}

impl Appointment {
    pub fn from_new(id: EntityId, new: &NewAppointment) -> Self {
        Appointment {
            id,
            paciente_id: new.paciente_id,
            recepcionista_id: new.recepcionista_id,
            profesional_id: new.profesional_id,
            fecha_hora: new.fecha_hora,
            estado: new.estado.clone(),
            notas: new.notas.clone(),
        }
    }
}
