// portal/src/receptionist.rs
//
// Views and pass-throughs for the receptionist portal.

use gateway::{ClinicGateway, GatewayResult};
use models::{Appointment, EntityId, NewAppointment, Role};

use crate::joins;
use crate::views::{AppointmentEditor, PatientSummary, SchedulingContext};

/// Every appointment in the clinic, for the receptionist's list.
pub async fn appointment_book<G: ClinicGateway>(gateway: &G) -> GatewayResult<Vec<Appointment>> {
    gateway.list_appointments().await
}

/// All patients merged with their user display attributes. Only users with
/// `Rol = Paciente` participate in the merge.
pub async fn patient_directory<G: ClinicGateway>(
    gateway: &G,
) -> GatewayResult<Vec<PatientSummary>> {
    let (patients, users) = tokio::try_join!(gateway.list_patients(), gateway.list_users())?;
    let patient_users: Vec<_> = users.into_iter().filter(|u| u.rol == Role::Paciente).collect();

    Ok(patients
        .into_iter()
        .map(|p| {
            let user = joins::user_for(&patient_users, p.user_id);
            PatientSummary::merge(p, user)
        })
        .collect())
}

/// Reference data for the new-appointment form. The acting receptionist is
/// located by `UserID` so the form can prefill `RecepcionistaID`.
pub async fn scheduling_context<G: ClinicGateway>(
    gateway: &G,
    user_id: EntityId,
) -> GatewayResult<SchedulingContext> {
    let (patients, professionals, receptionists) = tokio::try_join!(
        gateway.list_patients(),
        gateway.list_health_professionals(),
        gateway.list_receptionists(),
    )?;

    let receptionist = receptionists.into_iter().find(|r| r.user_id == user_id);

    Ok(SchedulingContext {
        patients,
        professionals,
        receptionist,
    })
}

/// The edit form's data: one appointment plus the reference collections.
pub async fn appointment_editor<G: ClinicGateway>(
    gateway: &G,
    cita_id: EntityId,
) -> GatewayResult<AppointmentEditor> {
    let appointment = gateway.get_appointment(cita_id).await?;
    let (patients, professionals, receptionists) = tokio::try_join!(
        gateway.list_patients(),
        gateway.list_health_professionals(),
        gateway.list_receptionists(),
    )?;

    Ok(AppointmentEditor {
        appointment,
        patients,
        professionals,
        receptionists,
    })
}

pub async fn create_appointment<G: ClinicGateway>(
    gateway: &G,
    new: &NewAppointment,
) -> GatewayResult<Appointment> {
    gateway.create_appointment(new).await
}

pub async fn update_appointment<G: ClinicGateway>(
    gateway: &G,
    appointment: &Appointment,
) -> GatewayResult<Appointment> {
    gateway.update_appointment(appointment.id, appointment).await
}
