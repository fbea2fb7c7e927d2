// models/src/clinic/prescription.rs

use core::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates;
use crate::errors::{ModelError, ModelResult};
use crate::identifiers::EntityId;

/// Validity of a prescription.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum PrescriptionStatus {
    #[serde(rename = "Activa")]
    Activa,
    #[serde(rename = "Expirada")]
    Expirada,
}

impl fmt::Display for PrescriptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrescriptionStatus::Activa => write!(f, "Activa"),
            PrescriptionStatus::Expirada => write!(f, "Expirada"),
        }
    }
}

impl FromStr for PrescriptionStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> ModelResult<Self> {
        match s {
            "Activa" => Ok(PrescriptionStatus::Activa),
            "Expirada" => Ok(PrescriptionStatus::Expirada),
            other => Err(ModelError::UnknownStatus(other.to_string())),
        }
    }
}

/// A medication order attached to a `MedicalVisit`. Many per visit; deleted
/// in cascade when the visit is removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prescription {
    #[serde(rename = "PrescripcionID")]
    pub id: EntityId,
    #[serde(rename = "VisitaID")]
    pub visita_id: EntityId,
    #[serde(rename = "Medicamento", default)]
    pub medicamento: String,
    #[serde(rename = "Dosis", default)]
    pub dosis: String,
    #[serde(rename = "Instrucciones", default)]
    pub instrucciones: String,
    // Date-only on the wire; timestamps from older records get truncated.
    #[serde(rename = "FechaPrescripcion", with = "dates::flexible_date_opt", default)]
    pub fecha_prescripcion: Option<NaiveDate>,
    #[serde(rename = "FechaExpiracion", with = "dates::flexible_date_opt", default)]
    pub fecha_expiracion: Option<NaiveDate>,
    #[serde(rename = "Estado")]
    pub estado: PrescriptionStatus,
}

/// Payload for `POST /prescriptions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPrescription {
    #[serde(rename = "VisitaID")]
    pub visita_id: EntityId,
    #[serde(rename = "Medicamento", default)]
    pub medicamento: String,
    #[serde(rename = "Dosis", default)]
    pub dosis: String,
    #[serde(rename = "Instrucciones", default)]
    pub instrucciones: String,
    #[serde(rename = "FechaPrescripcion", with = "dates::flexible_date_opt", default)]
    pub fecha_prescripcion: Option<NaiveDate>,
    #[serde(rename = "FechaExpiracion", with = "dates::flexible_date_opt", default)]
    pub fecha_expiracion: Option<NaiveDate>,
    #[serde(rename = "Estado", default = "default_estado")]
    pub estado: PrescriptionStatus,
}

fn default_estado() -> PrescriptionStatus {
    PrescriptionStatus::Activa
}

impl Prescription {
    pub fn from_new(id: EntityId, new: &NewPrescription) -> Self {
        Prescription {
            id,
            visita_id: new.visita_id,
            medicamento: new.medicamento.clone(),
            dosis: new.dosis.clone(),
            instrucciones: new.instrucciones.clone(),
            fecha_prescripcion: new.fecha_prescripcion,
            fecha_expiracion: new.fecha_expiracion,
            estado: new.estado,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Prescription;
    use chrono::NaiveDate;

    #[test]
    fn should_truncate_timestamp_dates_on_the_wire() {
        let raw = r#"{
            "PrescripcionID": 100,
            "VisitaID": 10,
            "Medicamento": "Ibuprofeno",
            "Dosis": "600mg",
            "Instrucciones": "Cada 8 horas",
            "FechaPrescripcion": "2024-03-01T00:00:00.000Z",
            "FechaExpiracion": "",
            "Estado": "Activa"
        }"#;
        let prescription: Prescription = serde_json::from_str(raw).unwrap();
        assert_eq!(
            prescription.fecha_prescripcion,
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
        assert_eq!(prescription.fecha_expiracion, None);
    }
}
