// gateway/src/http.rs

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use models::{
    Appointment, BloodTest, EntityId, HealthProfessional, MedicalVisit, NewAppointment,
    NewBloodTest, NewHealthProfessional, NewMedicalVisit, NewPatient, NewPrescription,
    NewReceptionist, NewUser, Patient, Prescription, Receptionist, User,
};

use crate::ClinicGateway;
use crate::config::GatewayConfig;
use crate::error::{GatewayError, GatewayResult};

/// `reqwest`-backed gateway. All responses are JSON; any non-2xx status is
/// a `GatewayError::Status` and never a panic.
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGateway {
    pub fn new(config: &GatewayConfig) -> GatewayResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(HttpGateway {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn decode<T: DeserializeOwned>(
        path: &str,
        response: reqwest::Response,
    ) -> GatewayResult<T> {
        let status = response.status();
        if !status.is_success() {
            warn!(path, status = status.as_u16(), "backend request failed");
            return Err(GatewayError::Status {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| GatewayError::Decode {
            path: path.to_string(),
            source,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> GatewayResult<T> {
        debug!(path, "GET");
        let response = self.client.get(self.url(path)).send().await?;
        Self::decode(path, response).await
    }

    async fn post_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> GatewayResult<T> {
        debug!(path, "POST");
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::decode(path, response).await
    }

    async fn put_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> GatewayResult<T> {
        debug!(path, "PUT");
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::decode(path, response).await
    }

    async fn delete(&self, path: &str) -> GatewayResult<()> {
        debug!(path, "DELETE");
        let response = self.client.delete(self.url(path)).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(path, status = status.as_u16(), "backend request failed");
            return Err(GatewayError::Status {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ClinicGateway for HttpGateway {
    async fn list_users(&self) -> GatewayResult<Vec<User>> {
        self.get_json("/users").await
    }

    async fn create_user(&self, new: &NewUser) -> GatewayResult<User> {
        self.post_json("/users", new).await
    }

    async fn list_patients(&self) -> GatewayResult<Vec<Patient>> {
        self.get_json("/patients").await
    }

    async fn get_patient(&self, id: EntityId) -> GatewayResult<Patient> {
        self.get_json(&format!("/patients/{id}")).await
    }

    async fn create_patient(&self, new: &NewPatient) -> GatewayResult<Patient> {
        self.post_json("/patients", new).await
    }

    async fn update_patient(&self, id: EntityId, patient: &Patient) -> GatewayResult<Patient> {
        self.put_json(&format!("/patients/{id}"), patient).await
    }

    async fn list_receptionists(&self) -> GatewayResult<Vec<Receptionist>> {
        self.get_json("/receptionists").await
    }

    async fn create_receptionist(&self, new: &NewReceptionist) -> GatewayResult<Receptionist> {
        self.post_json("/receptionists", new).await
    }

    async fn list_health_professionals(&self) -> GatewayResult<Vec<HealthProfessional>> {
        self.get_json("/health-professionals").await
    }

    async fn create_health_professional(
        &self,
        new: &NewHealthProfessional,
    ) -> GatewayResult<HealthProfessional> {
        self.post_json("/health-professionals", new).await
    }

    async fn list_appointments(&self) -> GatewayResult<Vec<Appointment>> {
        self.get_json("/appointments").await
    }

    async fn get_appointment(&self, id: EntityId) -> GatewayResult<Appointment> {
        self.get_json(&format!("/appointments/{id}")).await
    }

    async fn create_appointment(&self, new: &NewAppointment) -> GatewayResult<Appointment> {
        self.post_json("/appointments", new).await
    }

    async fn update_appointment(
        &self,
        id: EntityId,
        appointment: &Appointment,
    ) -> GatewayResult<Appointment> {
        self.put_json(&format!("/appointments/{id}"), appointment)
            .await
    }

    async fn list_medical_visits(
        &self,
        cita_id: Option<EntityId>,
    ) -> GatewayResult<Vec<MedicalVisit>> {
        let path = match cita_id {
            Some(id) => format!("/medical-visits?CitaID={id}"),
            None => "/medical-visits".to_string(),
        };
        self.get_json(&path).await
    }

    async fn create_medical_visit(&self, new: &NewMedicalVisit) -> GatewayResult<MedicalVisit> {
        self.post_json("/medical-visits", new).await
    }

    async fn update_medical_visit(
        &self,
        id: EntityId,
        visit: &MedicalVisit,
    ) -> GatewayResult<MedicalVisit> {
        self.put_json(&format!("/medical-visits/{id}"), visit).await
    }

    async fn delete_medical_visit(&self, id: EntityId) -> GatewayResult<()> {
        self.delete(&format!("/medical-visits/{id}")).await
    }

    async fn list_prescriptions(
        &self,
        visita_id: Option<EntityId>,
    ) -> GatewayResult<Vec<Prescription>> {
        let path = match visita_id {
            Some(id) => format!("/prescriptions?VisitaID={id}"),
            None => "/prescriptions".to_string(),
        };
        self.get_json(&path).await
    }

    async fn create_prescription(&self, new: &NewPrescription) -> GatewayResult<Prescription> {
        self.post_json("/prescriptions", new).await
    }

    async fn update_prescription(
        &self,
        id: EntityId,
        prescription: &Prescription,
    ) -> GatewayResult<Prescription> {
        self.put_json(&format!("/prescriptions/{id}"), prescription)
            .await
    }

    async fn delete_prescription(&self, id: EntityId) -> GatewayResult<()> {
        self.delete(&format!("/prescriptions/{id}")).await
    }

    async fn list_blood_tests(&self) -> GatewayResult<Vec<BloodTest>> {
        self.get_json("/blood-tests").await
    }

    async fn create_blood_test(&self, new: &NewBloodTest) -> GatewayResult<BloodTest> {
        self.post_json("/blood-tests", new).await
    }

    async fn update_blood_test(&self, id: EntityId, test: &BloodTest) -> GatewayResult<BloodTest> {
        self.put_json(&format!("/blood-tests/{id}"), test).await
    }

    async fn delete_blood_test(&self, id: EntityId) -> GatewayResult<()> {
        self.delete(&format!("/blood-tests/{id}")).await
    }
}
