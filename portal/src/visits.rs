// portal/src/visits.rs
//
// The manage-visit dialog: loading the panel for an appointment, plus the
// mutation pass-throughs for visits, prescriptions and blood panels.

use gateway::{ClinicGateway, GatewayResult};
use models::{
    BloodTest, EntityId, MedicalVisit, NewBloodTest, NewMedicalVisit, NewPrescription,
    Prescription,
};

use crate::views::VisitPanel;

/// Loads the visit recorded for an appointment together with its
/// prescriptions. `None` means no visit has been recorded yet and the
/// dialog opens in create mode.
pub async fn panel<G: ClinicGateway>(
    gateway: &G,
    cita_id: EntityId,
) -> GatewayResult<Option<VisitPanel>> {
    let visit = gateway
        .list_medical_visits(Some(cita_id))
        .await?
        .into_iter()
        .next();

    let Some(visit) = visit else {
        return Ok(None);
    };

    let prescriptions = gateway.list_prescriptions(Some(visit.id)).await?;
    Ok(Some(VisitPanel {
        visit,
        prescriptions,
    }))
}

pub async fn create_visit<G: ClinicGateway>(
    gateway: &G,
    new: &NewMedicalVisit,
) -> GatewayResult<MedicalVisit> {
    gateway.create_medical_visit(new).await
}

pub async fn update_visit<G: ClinicGateway>(
    gateway: &G,
    visit: &MedicalVisit,
) -> GatewayResult<MedicalVisit> {
    gateway.update_medical_visit(visit.id, visit).await
}

/// Deletes a visit. The backend cascades the visit's prescriptions.
pub async fn delete_visit<G: ClinicGateway>(gateway: &G, id: EntityId) -> GatewayResult<()> {
    gateway.delete_medical_visit(id).await
}

pub async fn add_prescription<G: ClinicGateway>(
    gateway: &G,
    new: &NewPrescription,
) -> GatewayResult<Prescription> {
    gateway.create_prescription(new).await
}

pub async fn update_prescription<G: ClinicGateway>(
    gateway: &G,
    prescription: &Prescription,
) -> GatewayResult<Prescription> {
    gateway.update_prescription(prescription.id, prescription).await
}

pub async fn remove_prescription<G: ClinicGateway>(
    gateway: &G,
    id: EntityId,
) -> GatewayResult<()> {
    gateway.delete_prescription(id).await
}

pub async fn record_blood_test<G: ClinicGateway>(
    gateway: &G,
    new: &NewBloodTest,
) -> GatewayResult<BloodTest> {
    gateway.create_blood_test(new).await
}

pub async fn update_blood_test<G: ClinicGateway>(
    gateway: &G,
    test: &BloodTest,
) -> GatewayResult<BloodTest> {
    gateway.update_blood_test(test.id, test).await
}

pub async fn remove_blood_test<G: ClinicGateway>(gateway: &G, id: EntityId) -> GatewayResult<()> {
    gateway.delete_blood_test(id).await
}
