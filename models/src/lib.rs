// models/src/lib.rs

pub mod clinic;
pub mod dates;
pub mod errors;
pub mod identifiers;

pub use clinic::{
    Appointment, BloodTest, HealthProfessional, MedicalVisit, NewAppointment, NewBloodTest,
    NewHealthProfessional, NewMedicalVisit, NewPatient, NewPrescription, NewReceptionist, NewUser,
    PanelPoint, Patient, Prescription, PrescriptionStatus, Receptionist, Role, User,
};
pub use errors::{ModelError, ModelResult};
pub use identifiers::EntityId;
