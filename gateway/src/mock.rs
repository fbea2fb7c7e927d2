// gateway/src/mock.rs
//
// In-memory stand-in for the clinic backend, used by the session and portal
// test suites. Supports seeding, monotonic id assignment, cascade deletes
// and per-collection failure injection.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use models::{
    Appointment, BloodTest, EntityId, HealthProfessional, MedicalVisit, NewAppointment,
    NewBloodTest, NewHealthProfessional, NewMedicalVisit, NewPatient, NewPrescription,
    NewReceptionist, NewUser, Patient, Prescription, Receptionist, User,
};

use crate::ClinicGateway;
use crate::error::{GatewayError, GatewayResult};

#[derive(Default)]
struct MockState {
    users: Vec<User>,
    patients: Vec<Patient>,
    receptionists: Vec<Receptionist>,
    professionals: Vec<HealthProfessional>,
    appointments: Vec<Appointment>,
    visits: Vec<MedicalVisit>,
    prescriptions: Vec<Prescription>,
    blood_tests: Vec<BloodTest>,
    failing: HashSet<String>,
    calls: Vec<String>,
    next_id: i64,
}

pub struct MockGateway {
    state: Mutex<MockState>,
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl MockGateway {
    pub fn new() -> Self {
        MockGateway {
            state: Mutex::new(MockState {
                next_id: 1,
                ..MockState::default()
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().expect("mock state poisoned")
    }

    /// Makes every call against `collection` fail with a 503 until
    /// `restore` is called.
    pub fn fail(&self, collection: &str) {
        self.lock().failing.insert(collection.to_string());
    }

    pub fn restore(&self, collection: &str) {
        self.lock().failing.remove(collection);
    }

    /// Collections touched so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.lock().calls.clone()
    }

    pub fn put_user(&self, user: User) {
        self.lock().users.push(user);
    }

    pub fn put_patient(&self, patient: Patient) {
        self.lock().patients.push(patient);
    }

    pub fn put_receptionist(&self, receptionist: Receptionist) {
        self.lock().receptionists.push(receptionist);
    }

    pub fn put_health_professional(&self, professional: HealthProfessional) {
        self.lock().professionals.push(professional);
    }

    pub fn put_appointment(&self, appointment: Appointment) {
        self.lock().appointments.push(appointment);
    }

    pub fn put_medical_visit(&self, visit: MedicalVisit) {
        self.lock().visits.push(visit);
    }

    pub fn put_prescription(&self, prescription: Prescription) {
        self.lock().prescriptions.push(prescription);
    }

    pub fn put_blood_test(&self, test: BloodTest) {
        self.lock().blood_tests.push(test);
    }
}

fn touch(state: &mut MockState, collection: &'static str, path: &str) -> GatewayResult<()> {
    state.calls.push(collection.to_string());
    if state.failing.contains(collection) {
        return Err(GatewayError::Status {
            status: 503,
            path: path.to_string(),
        });
    }
    Ok(())
}

fn next_id(state: &mut MockState) -> EntityId {
    let id = state.next_id;
    state.next_id += 1;
    EntityId(id)
}

fn not_found(path: String) -> GatewayError {
    GatewayError::Status { status: 404, path }
}

#[async_trait]
impl ClinicGateway for MockGateway {
    async fn list_users(&self) -> GatewayResult<Vec<User>> {
        let mut state = self.lock();
        touch(&mut state, "users", "/users")?;
        Ok(state.users.clone())
    }

    async fn create_user(&self, new: &NewUser) -> GatewayResult<User> {
        let mut state = self.lock();
        touch(&mut state, "users", "/users")?;
        let id = next_id(&mut state);
        let user = User::from_new(id, new);
        state.users.push(user.clone());
        Ok(user)
    }

    async fn list_patients(&self) -> GatewayResult<Vec<Patient>> {
        let mut state = self.lock();
        touch(&mut state, "patients", "/patients")?;
        Ok(state.patients.clone())
    }

    async fn get_patient(&self, id: EntityId) -> GatewayResult<Patient> {
        let mut state = self.lock();
        touch(&mut state, "patients", "/patients")?;
        state
            .patients
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| not_found(format!("/patients/{id}")))
    }

    async fn create_patient(&self, new: &NewPatient) -> GatewayResult<Patient> {
        let mut state = self.lock();
        touch(&mut state, "patients", "/patients")?;
        let id = next_id(&mut state);
        let patient = Patient::from_new(id, new);
        state.patients.push(patient.clone());
        Ok(patient)
    }

    async fn update_patient(&self, id: EntityId, patient: &Patient) -> GatewayResult<Patient> {
        let mut state = self.lock();
        touch(&mut state, "patients", "/patients")?;
        let slot = state
            .patients
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| not_found(format!("/patients/{id}")))?;
        *slot = patient.clone();
        Ok(patient.clone())
    }

    async fn list_receptionists(&self) -> GatewayResult<Vec<Receptionist>> {
        let mut state = self.lock();
        touch(&mut state, "receptionists", "/receptionists")?;
        Ok(state.receptionists.clone())
    }

    async fn create_receptionist(&self, new: &NewReceptionist) -> GatewayResult<Receptionist> {
        let mut state = self.lock();
        touch(&mut state, "receptionists", "/receptionists")?;
        let id = next_id(&mut state);
        let receptionist = Receptionist::from_new(id, new);
        state.receptionists.push(receptionist.clone());
        Ok(receptionist)
    }

    async fn list_health_professionals(&self) -> GatewayResult<Vec<HealthProfessional>> {
        let mut state = self.lock();
        touch(&mut state, "health-professionals", "/health-professionals")?;
        Ok(state.professionals.clone())
    }

    async fn create_health_professional(
        &self,
        new: &NewHealthProfessional,
    ) -> GatewayResult<HealthProfessional> {
        let mut state = self.lock();
        touch(&mut state, "health-professionals", "/health-professionals")?;
        let id = next_id(&mut state);
        let professional = HealthProfessional::from_new(id, new);
        state.professionals.push(professional.clone());
        Ok(professional)
    }

    async fn list_appointments(&self) -> GatewayResult<Vec<Appointment>> {
        let mut state = self.lock();
        touch(&mut state, "appointments", "/appointments")?;
        Ok(state.appointments.clone())
    }

    async fn get_appointment(&self, id: EntityId) -> GatewayResult<Appointment> {
        let mut state = self.lock();
        touch(&mut state, "appointments", "/appointments")?;
        state
            .appointments
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| not_found(format!("/appointments/{id}")))
    }

    async fn create_appointment(&self, new: &NewAppointment) -> GatewayResult<Appointment> {
        let mut state = self.lock();
        touch(&mut state, "appointments", "/appointments")?;
        let id = next_id(&mut state);
        let appointment = Appointment::from_new(id, new);
        state.appointments.push(appointment.clone());
        Ok(appointment)
    }

    async fn update_appointment(
        &self,
        id: EntityId,
        appointment: &Appointment,
    ) -> GatewayResult<Appointment> {
        let mut state = self.lock();
        touch(&mut state, "appointments", "/appointments")?;
        let slot = state
            .appointments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| not_found(format!("/appointments/{id}")))?;
        *slot = appointment.clone();
        Ok(appointment.clone())
    }

    async fn list_medical_visits(
        &self,
        cita_id: Option<EntityId>,
    ) -> GatewayResult<Vec<MedicalVisit>> {
        let mut state = self.lock();
        touch(&mut state, "medical-visits", "/medical-visits")?;
        Ok(state
            .visits
            .iter()
            .filter(|v| cita_id.is_none_or(|id| v.cita_id == id))
            .cloned()
            .collect())
    }

    async fn create_medical_visit(&self, new: &NewMedicalVisit) -> GatewayResult<MedicalVisit> {
        let mut state = self.lock();
        touch(&mut state, "medical-visits", "/medical-visits")?;
        let id = next_id(&mut state);
        let visit = MedicalVisit::from_new(id, new);
        state.visits.push(visit.clone());
        Ok(visit)
    }

    async fn update_medical_visit(
        &self,
        id: EntityId,
        visit: &MedicalVisit,
    ) -> GatewayResult<MedicalVisit> {
        let mut state = self.lock();
        touch(&mut state, "medical-visits", "/medical-visits")?;
        let slot = state
            .visits
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or_else(|| not_found(format!("/medical-visits/{id}")))?;
        *slot = visit.clone();
        Ok(visit.clone())
    }

    async fn delete_medical_visit(&self, id: EntityId) -> GatewayResult<()> {
        let mut state = self.lock();
        touch(&mut state, "medical-visits", "/medical-visits")?;
        state.visits.retain(|v| v.id != id);
        // The backend cascades prescription deletion with the visit.
        state.prescriptions.retain(|p| p.visita_id != id);
        Ok(())
    }

    async fn list_prescriptions(
        &self,
        visita_id: Option<EntityId>,
    ) -> GatewayResult<Vec<Prescription>> {
        let mut state = self.lock();
        touch(&mut state, "prescriptions", "/prescriptions")?;
        Ok(state
            .prescriptions
            .iter()
            .filter(|p| visita_id.is_none_or(|id| p.visita_id == id))
            .cloned()
            .collect())
    }

    async fn create_prescription(&self, new: &NewPrescription) -> GatewayResult<Prescription> {
        let mut state = self.lock();
        touch(&mut state, "prescriptions", "/prescriptions")?;
        let id = next_id(&mut state);
        let prescription = Prescription::from_new(id, new);
        state.prescriptions.push(prescription.clone());
        Ok(prescription)
    }

    async fn update_prescription(
        &self,
        id: EntityId,
        prescription: &Prescription,
    ) -> GatewayResult<Prescription> {
        let mut state = self.lock();
        touch(&mut state, "prescriptions", "/prescriptions")?;
        let slot = state
            .prescriptions
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| not_found(format!("/prescriptions/{id}")))?;
        *slot = prescription.clone();
        Ok(prescription.clone())
    }

    async fn delete_prescription(&self, id: EntityId) -> GatewayResult<()> {
        let mut state = self.lock();
        touch(&mut state, "prescriptions", "/prescriptions")?;
        state.prescriptions.retain(|p| p.id != id);
        Ok(())
    }

    async fn list_blood_tests(&self) -> GatewayResult<Vec<BloodTest>> {
        let mut state = self.lock();
        touch(&mut state, "blood-tests", "/blood-tests")?;
        Ok(state.blood_tests.clone())
    }

    async fn create_blood_test(&self, new: &NewBloodTest) -> GatewayResult<BloodTest> {
        let mut state = self.lock();
        touch(&mut state, "blood-tests", "/blood-tests")?;
        let id = next_id(&mut state);
        let test = BloodTest::from_new(id, new);
        state.blood_tests.push(test.clone());
        Ok(test)
    }

    async fn update_blood_test(&self, id: EntityId, test: &BloodTest) -> GatewayResult<BloodTest> {
        let mut state = self.lock();
        touch(&mut state, "blood-tests", "/blood-tests")?;
        let slot = state
            .blood_tests
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| not_found(format!("/blood-tests/{id}")))?;
        *slot = test.clone();
        Ok(test.clone())
    }

    async fn delete_blood_test(&self, id: EntityId) -> GatewayResult<()> {
        let mut state = self.lock();
        touch(&mut state, "blood-tests", "/blood-tests")?;
        state.blood_tests.retain(|t| t.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::MockGateway;
    use crate::ClinicGateway;
    use crate::error::GatewayError;
    use chrono::Utc;
    use models::{EntityId, NewMedicalVisit, NewPrescription, NewUser, Role};

    fn new_user(external_id: &str, rol: Role) -> NewUser {
        NewUser {
            external_id: external_id.to_string(),
            nombre: "Test".to_string(),
            email: String::new(),
            telefono: String::new(),
            direccion: String::new(),
            rol,
            fecha_registro: Utc::now().date_naive(),
        }
    }

    #[tokio::test]
    async fn should_assign_monotonic_ids() {
        let gateway = MockGateway::new();
        let a = gateway
            .create_user(&new_user("ext-1", Role::Paciente))
            .await
            .unwrap();
        let b = gateway
            .create_user(&new_user("ext-2", Role::Medico))
            .await
            .unwrap();
        assert!(b.id.as_i64() > a.id.as_i64());
    }

    #[tokio::test]
    async fn should_inject_failures_per_collection() {
        let gateway = MockGateway::new();
        gateway.fail("users");
        let err = gateway.list_users().await.unwrap_err();
        assert!(matches!(err, GatewayError::Status { status: 503, .. }));
        gateway.restore("users");
        assert!(gateway.list_users().await.is_ok());
    }

    #[tokio::test]
    async fn should_cascade_prescriptions_on_visit_delete() {
        let gateway = MockGateway::new();
        let visit = gateway
            .create_medical_visit(&NewMedicalVisit::for_appointment(EntityId(1)))
            .await
            .unwrap();
        gateway
            .create_prescription(&NewPrescription {
                visita_id: visit.id,
                medicamento: "Paracetamol".to_string(),
                dosis: "1g".to_string(),
                instrucciones: String::new(),
                fecha_prescripcion: None,
                fecha_expiracion: None,
                estado: models::PrescriptionStatus::Activa,
            })
            .await
            .unwrap();
        gateway.delete_medical_visit(visit.id).await.unwrap();
        assert!(gateway.list_prescriptions(None).await.unwrap().is_empty());
    }
}
