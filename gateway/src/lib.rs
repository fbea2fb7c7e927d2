// gateway/src/lib.rs
//
// Typed client for the clinic REST backend. The trait is the seam the
// session and portal layers program against; `HttpGateway` is the real
// transport and `MockGateway` (feature `test-suite`) the in-memory double.

use async_trait::async_trait;

use models::{
    Appointment, BloodTest, EntityId, HealthProfessional, MedicalVisit, NewAppointment,
    NewBloodTest, NewHealthProfessional, NewMedicalVisit, NewPatient, NewPrescription,
    NewReceptionist, NewUser, Patient, Prescription, Receptionist, User,
};

pub mod config;
pub mod error;
pub mod http;
#[cfg(any(test, feature = "test-suite"))]
pub mod mock;

pub use config::{GatewayConfig, load_gateway_config};
pub use error::{GatewayError, GatewayResult};
pub use http::HttpGateway;
#[cfg(any(test, feature = "test-suite"))]
pub use mock::MockGateway;

/// The backend surface consumed by the core. Every list call returns the
/// whole collection; filtering happens client-side except where the backend
/// honors the `CitaID` / `VisitaID` query params.
#[async_trait]
pub trait ClinicGateway: Send + Sync {
    async fn list_users(&self) -> GatewayResult<Vec<User>>;
    async fn create_user(&self, new: &NewUser) -> GatewayResult<User>;

    async fn list_patients(&self) -> GatewayResult<Vec<Patient>>;
    async fn get_patient(&self, id: EntityId) -> GatewayResult<Patient>;
    async fn create_patient(&self, new: &NewPatient) -> GatewayResult<Patient>;
    async fn update_patient(&self, id: EntityId, patient: &Patient) -> GatewayResult<Patient>;

    async fn list_receptionists(&self) -> GatewayResult<Vec<Receptionist>>;
    async fn create_receptionist(&self, new: &NewReceptionist) -> GatewayResult<Receptionist>;

    async fn list_health_professionals(&self) -> GatewayResult<Vec<HealthProfessional>>;
    async fn create_health_professional(
        &self,
        new: &NewHealthProfessional,
    ) -> GatewayResult<HealthProfessional>;

    async fn list_appointments(&self) -> GatewayResult<Vec<Appointment>>;
    async fn get_appointment(&self, id: EntityId) -> GatewayResult<Appointment>;
    async fn create_appointment(&self, new: &NewAppointment) -> GatewayResult<Appointment>;
    async fn update_appointment(
        &self,
        id: EntityId,
        appointment: &Appointment,
    ) -> GatewayResult<Appointment>;

    async fn list_medical_visits(
        &self,
        cita_id: Option<EntityId>,
    ) -> GatewayResult<Vec<MedicalVisit>>;
    async fn create_medical_visit(&self, new: &NewMedicalVisit) -> GatewayResult<MedicalVisit>;
    async fn update_medical_visit(
        &self,
        id: EntityId,
        visit: &MedicalVisit,
    ) -> GatewayResult<MedicalVisit>;
    async fn delete_medical_visit(&self, id: EntityId) -> GatewayResult<()>;

    async fn list_prescriptions(
        &self,
        visita_id: Option<EntityId>,
    ) -> GatewayResult<Vec<Prescription>>;
    async fn create_prescription(&self, new: &NewPrescription) -> GatewayResult<Prescription>;
    async fn update_prescription(
        &self,
        id: EntityId,
        prescription: &Prescription,
    ) -> GatewayResult<Prescription>;
    async fn delete_prescription(&self, id: EntityId) -> GatewayResult<()>;

    async fn list_blood_tests(&self) -> GatewayResult<Vec<BloodTest>>;
    async fn create_blood_test(&self, new: &NewBloodTest) -> GatewayResult<BloodTest>;
    async fn update_blood_test(&self, id: EntityId, test: &BloodTest) -> GatewayResult<BloodTest>;
    async fn delete_blood_test(&self, id: EntityId) -> GatewayResult<()>;
}
