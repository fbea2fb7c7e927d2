// portal/src/professional.rs
//
// Views for the health-professional portal.

use gateway::{ClinicGateway, GatewayResult};
use models::{Appointment, EntityId};

use crate::joins::{self, key_set};
use crate::views::{PatientProfileView, PatientSummary};

/// The professional's appointments, newest first.
pub async fn agenda<G: ClinicGateway>(
    gateway: &G,
    professional_id: EntityId,
) -> GatewayResult<Vec<Appointment>> {
    let mut appointments: Vec<Appointment> = gateway
        .list_appointments()
        .await?
        .into_iter()
        .filter(|a| a.profesional_id == professional_id)
        .collect();
    joins::newest_first(&mut appointments);
    Ok(appointments)
}

/// Patients who have at least one appointment with this professional, each
/// merged with its user's display attributes. The three source collections
/// are independent, so they are fetched as one batch.
pub async fn patient_roster<G: ClinicGateway>(
    gateway: &G,
    professional_id: EntityId,
) -> GatewayResult<Vec<PatientSummary>> {
    let (appointments, patients, users) = tokio::try_join!(
        gateway.list_appointments(),
        gateway.list_patients(),
        gateway.list_users(),
    )?;

    let patient_ids = key_set(
        appointments
            .iter()
            .filter(|a| a.profesional_id == professional_id)
            .map(|a| a.paciente_id),
    );

    Ok(patients
        .into_iter()
        .filter(|p| patient_ids.contains(&p.id))
        .map(|p| {
            let user = joins::user_for(&users, p.user_id);
            PatientSummary::merge(p, user)
        })
        .collect())
}

/// A single patient's profile with appointment history and lab panels.
pub async fn patient_profile<G: ClinicGateway>(
    gateway: &G,
    patient_id: EntityId,
) -> GatewayResult<PatientProfileView> {
    let patient = gateway.get_patient(patient_id).await?;
    let (appointments, blood_tests) =
        tokio::try_join!(gateway.list_appointments(), gateway.list_blood_tests())?;

    Ok(PatientProfileView {
        patient,
        appointments: appointments
            .into_iter()
            .filter(|a| a.paciente_id == patient_id)
            .collect(),
        blood_tests: blood_tests
            .into_iter()
            .filter(|t| t.paciente_id == patient_id)
            .collect(),
    })
}
