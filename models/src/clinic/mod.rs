// models/src/clinic/mod.rs

pub mod appointment;
pub mod blood_test;
pub mod health_professional;
pub mod medical_visit;
pub mod patient;
pub mod prescription;
pub mod receptionist;
pub mod role;
pub mod user;

pub use appointment::{Appointment, NewAppointment};
pub use blood_test::{BloodTest, NewBloodTest, PanelPoint};
pub use health_professional::{HealthProfessional, NewHealthProfessional};
pub use medical_visit::{MedicalVisit, NewMedicalVisit};
pub use patient::{NewPatient, Patient};
pub use prescription::{NewPrescription, Prescription, PrescriptionStatus};
pub use receptionist::{NewReceptionist, Receptionist};
pub use role::Role;
pub use user::{NewUser, User};
