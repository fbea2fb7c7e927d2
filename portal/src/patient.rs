// portal/src/patient.rs
//
// Views for the patient portal.

use tracing::warn;

use gateway::{ClinicGateway, GatewayResult};
use models::{Appointment, EntityId, Patient};

use crate::joins::{self, JoinWarning, key_set};
use crate::views::{VisitHistory, VisitRecord};

/// The patient's appointments, newest first, for the calendar screen.
pub async fn calendar<G: ClinicGateway>(
    gateway: &G,
    patient_id: EntityId,
) -> GatewayResult<Vec<Appointment>> {
    let mut appointments: Vec<Appointment> = gateway
        .list_appointments()
        .await?
        .into_iter()
        .filter(|a| a.paciente_id == patient_id)
        .collect();
    joins::newest_first(&mut appointments);
    Ok(appointments)
}

/// The patient's own record, for the profile screen.
pub async fn profile<G: ClinicGateway>(
    gateway: &G,
    patient_id: EntityId,
) -> GatewayResult<Patient> {
    gateway.get_patient(patient_id).await
}

/// Saves profile edits back through the gateway.
pub async fn update_profile<G: ClinicGateway>(
    gateway: &G,
    patient: &Patient,
) -> GatewayResult<Patient> {
    gateway.update_patient(patient.id, patient).await
}

/// The patient's visit history: appointments anchor the join, visits are
/// filtered by membership in the appointment set, prescriptions by
/// membership in the visit set.
///
/// Each step depends on the previous one, so the fetches run sequentially.
/// If the prescriptions fetch fails after the visits arrived, the history
/// keeps the visits and records a warning instead of blanking the screen.
pub async fn visit_history<G: ClinicGateway>(
    gateway: &G,
    patient_id: EntityId,
) -> GatewayResult<VisitHistory> {
    let appointments = gateway.list_appointments().await?;
    let cita_ids = key_set(
        appointments
            .iter()
            .filter(|a| a.paciente_id == patient_id)
            .map(|a| a.id),
    );

    let visits: Vec<_> = gateway
        .list_medical_visits(None)
        .await?
        .into_iter()
        .filter(|v| cita_ids.contains(&v.cita_id))
        .collect();

    let mut warnings = Vec::new();
    let prescriptions = match gateway.list_prescriptions(None).await {
        Ok(prescriptions) => prescriptions,
        Err(err) => {
            warn!(error = %err, "prescriptions fetch failed, rendering visits without them");
            warnings.push(JoinWarning {
                collection: "prescriptions",
                detail: err.to_string(),
            });
            Vec::new()
        }
    };

    let visita_ids = key_set(visits.iter().map(|v| v.id));
    let in_scope: Vec<_> = prescriptions
        .into_iter()
        .filter(|p| visita_ids.contains(&p.visita_id))
        .collect();

    let records = visits
        .into_iter()
        .map(|visit| {
            let prescriptions = in_scope
                .iter()
                .filter(|p| p.visita_id == visit.id)
                .cloned()
                .collect();
            VisitRecord {
                visit,
                prescriptions,
            }
        })
        .collect();

    Ok(VisitHistory {
        visits: records,
        warnings,
    })
}
