// portal/src/views.rs
//
// Denormalized view models handed to the rendering layer. They carry
// everything a screen shows so presentation never touches the gateway.

use serde::Serialize;

use models::{
    Appointment, BloodTest, HealthProfessional, MedicalVisit, Patient, Prescription, Receptionist,
    User,
};

use crate::joins::JoinWarning;

/// A patient row with the display attributes of its backing user merged in.
/// Missing user rows leave the display fields empty rather than dropping
/// the patient.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatientSummary {
    #[serde(flatten)]
    pub patient: Patient,
    pub nombre: String,
    pub email: String,
    pub telefono: String,
    pub direccion: String,
    pub fecha_registro: Option<chrono::NaiveDate>,
}

impl PatientSummary {
    pub fn merge(patient: Patient, user: Option<&User>) -> Self {
        PatientSummary {
            nombre: user.map(|u| u.nombre.clone()).unwrap_or_default(),
            email: user.map(|u| u.email.clone()).unwrap_or_default(),
            telefono: user.map(|u| u.telefono.clone()).unwrap_or_default(),
            direccion: user.map(|u| u.direccion.clone()).unwrap_or_default(),
            fecha_registro: user.map(|u| u.fecha_registro),
            patient,
        }
    }
}

/// One visit with its prescriptions, as shown in the patient's history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisitRecord {
    pub visit: MedicalVisit,
    pub prescriptions: Vec<Prescription>,
}

/// The patient's full visit history. `warnings` is non-empty when a
/// dependent fetch failed and the view is rendering partial data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisitHistory {
    pub visits: Vec<VisitRecord>,
    pub warnings: Vec<JoinWarning>,
}

impl VisitHistory {
    pub fn is_degraded(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// A patient's profile as seen by a professional: record, appointment
/// history and lab panels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatientProfileView {
    pub patient: Patient,
    pub appointments: Vec<Appointment>,
    pub blood_tests: Vec<BloodTest>,
}

/// Reference data for the receptionist's scheduling form, with the acting
/// receptionist pre-resolved for the `RecepcionistaID` prefill.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchedulingContext {
    pub patients: Vec<Patient>,
    pub professionals: Vec<HealthProfessional>,
    pub receptionist: Option<Receptionist>,
}

/// An appointment plus the reference collections the edit form binds to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppointmentEditor {
    pub appointment: Appointment,
    pub patients: Vec<Patient>,
    pub professionals: Vec<HealthProfessional>,
    pub receptionists: Vec<Receptionist>,
}

/// The manage-visit dialog: the appointment's visit and its prescriptions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisitPanel {
    pub visit: MedicalVisit,
    pub prescriptions: Vec<Prescription>,
}
