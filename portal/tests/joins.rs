// portal/tests/joins.rs
//
// Join behavior against the in-memory gateway: anchor filtering, dependent
// scoping, display-field merges and degraded rendering on partial failure.

use chrono::{NaiveDate, TimeZone, Utc};

use gateway::MockGateway;
use models::{
    Appointment, EntityId, MedicalVisit, NewPatient, Patient, Prescription, PrescriptionStatus,
    Receptionist, Role, User,
};
use portal::{patient, professional, receptionist, visits};

fn user(id: i64, nombre: &str, rol: Role) -> User {
    User {
        id: EntityId(id),
        external_id: format!("ext-{id}"),
        nombre: nombre.to_string(),
        email: format!("{nombre}@clinic.es").to_lowercase(),
        telefono: "600000000".to_string(),
        direccion: "Calle Mayor 1".to_string(),
        rol,
        fecha_registro: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
    }
}

fn patient_row(id: i64, user_id: i64) -> Patient {
    Patient::from_new(EntityId(id), &NewPatient::for_user(EntityId(user_id)))
}

fn appointment(id: i64, paciente: i64, profesional: i64, day: u32, hour: u32) -> Appointment {
    Appointment {
        id: EntityId(id),
        paciente_id: EntityId(paciente),
        recepcionista_id: EntityId(2),
        profesional_id: EntityId(profesional),
        fecha_hora: Utc.with_ymd_and_hms(2024, 6, day, hour, 0, 0).unwrap(),
        estado: "Pendiente".to_string(),
        notas: String::new(),
    }
}

fn visit(id: i64, cita: i64) -> MedicalVisit {
    MedicalVisit {
        id: EntityId(id),
        cita_id: EntityId(cita),
        fecha_hora: Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap(),
        motivo_consulta: "Revisión".to_string(),
        diagnostico: String::new(),
        notas: String::new(),
        duracion: "30".to_string(),
    }
}

fn prescription(id: i64, visita: i64, medicamento: &str) -> Prescription {
    Prescription {
        id: EntityId(id),
        visita_id: EntityId(visita),
        medicamento: medicamento.to_string(),
        dosis: "1 comprimido".to_string(),
        instrucciones: String::new(),
        fecha_prescripcion: NaiveDate::from_ymd_opt(2024, 6, 1),
        fecha_expiracion: None,
        estado: PrescriptionStatus::Activa,
    }
}

fn clinic() -> MockGateway {
    let gateway = MockGateway::new();
    gateway.put_user(user(5, "Ana", Role::Paciente));
    gateway.put_user(user(6, "Luis", Role::Paciente));
    gateway.put_user(user(9, "Marta", Role::Medico));
    gateway.put_patient(patient_row(5, 5));
    gateway.put_patient(patient_row(6, 6));
    // Professional 9 sees patient 5 twice; professional 4 sees patient 6.
    gateway.put_appointment(appointment(1, 5, 9, 1, 9));
    gateway.put_appointment(appointment(2, 5, 9, 3, 15));
    gateway.put_appointment(appointment(3, 6, 4, 2, 11));
    gateway.put_medical_visit(visit(10, 1));
    gateway.put_medical_visit(visit(11, 3));
    gateway.put_prescription(prescription(100, 10, "Ibuprofeno"));
    gateway.put_prescription(prescription(101, 11, "Omeprazol"));
    gateway
}

#[tokio::test]
async fn should_scope_agenda_to_professional_newest_first() {
    let gateway = clinic();
    let agenda = professional::agenda(&gateway, EntityId(9)).await.unwrap();

    let ids: Vec<i64> = agenda.iter().map(|a| a.id.as_i64()).collect();
    assert_eq!(ids, vec![2, 1]);
}

#[tokio::test]
async fn should_match_actor_id_parsed_from_string() {
    // Ids arrive as strings from some backend screens; a parsed id must
    // join against numeric rows.
    let gateway = clinic();
    let actor: EntityId = "9".parse().unwrap();
    let agenda = professional::agenda(&gateway, actor).await.unwrap();
    assert_eq!(agenda.len(), 2);
}

#[tokio::test]
async fn should_filter_history_through_the_appointment_scope() {
    let gateway = clinic();
    let history = patient::visit_history(&gateway, EntityId(5)).await.unwrap();

    assert!(!history.is_degraded());
    assert_eq!(history.visits.len(), 1);

    let record = &history.visits[0];
    assert_eq!(record.visit.id, EntityId(10));
    // Prescription 101 belongs to another patient's visit and stays out.
    assert_eq!(record.prescriptions.len(), 1);
    assert_eq!(record.prescriptions[0].id, EntityId(100));
}

#[tokio::test]
async fn should_keep_visits_when_prescriptions_fail() {
    let gateway = clinic();
    gateway.fail("prescriptions");

    let history = patient::visit_history(&gateway, EntityId(5)).await.unwrap();

    assert!(history.is_degraded());
    assert_eq!(history.visits.len(), 1);
    assert!(history.visits[0].prescriptions.is_empty());
    assert_eq!(history.warnings[0].collection, "prescriptions");
}

#[tokio::test]
async fn should_fail_history_when_the_anchor_fetch_fails() {
    let gateway = clinic();
    gateway.fail("appointments");
    assert!(patient::visit_history(&gateway, EntityId(5)).await.is_err());
}

#[tokio::test]
async fn should_merge_display_fields_into_the_roster() {
    let gateway = clinic();
    let roster = professional::patient_roster(&gateway, EntityId(9))
        .await
        .unwrap();

    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].patient.id, EntityId(5));
    assert_eq!(roster[0].nombre, "Ana");
    assert_eq!(roster[0].email, "ana@clinic.es");
}

#[tokio::test]
async fn should_keep_patients_without_a_user_row_in_the_directory() {
    let gateway = clinic();
    // Orphan patient: no backing user record.
    gateway.put_patient(patient_row(7, 70));

    let directory = receptionist::patient_directory(&gateway).await.unwrap();
    let orphan = directory
        .iter()
        .find(|s| s.patient.id == EntityId(7))
        .unwrap();
    assert_eq!(orphan.nombre, "");
    assert_eq!(orphan.fecha_registro, None);
}

#[tokio::test]
async fn should_prefill_the_acting_receptionist_in_scheduling_context() {
    let gateway = clinic();
    gateway.put_user(user(2, "Eva", Role::Recepcionista));
    gateway.put_receptionist(Receptionist::from_new(
        EntityId(20),
        &models::NewReceptionist::for_user(EntityId(2)),
    ));

    let context = receptionist::scheduling_context(&gateway, EntityId(2))
        .await
        .unwrap();
    assert_eq!(context.patients.len(), 2);
    assert_eq!(context.receptionist.as_ref().unwrap().id, EntityId(20));

    let nobody = receptionist::scheduling_context(&gateway, EntityId(99))
        .await
        .unwrap();
    assert!(nobody.receptionist.is_none());
}

#[tokio::test]
async fn should_load_the_visit_panel_for_a_managed_appointment() {
    let gateway = clinic();
    let panel = visits::panel(&gateway, EntityId(1)).await.unwrap().unwrap();
    assert_eq!(panel.visit.id, EntityId(10));
    assert_eq!(panel.prescriptions.len(), 1);
}

#[tokio::test]
async fn should_report_no_panel_for_an_unmanaged_appointment() {
    let gateway = clinic();
    assert!(visits::panel(&gateway, EntityId(2)).await.unwrap().is_none());
}

#[tokio::test]
async fn should_scope_the_patient_profile_collections() {
    let gateway = clinic();
    let profile = professional::patient_profile(&gateway, EntityId(5))
        .await
        .unwrap();
    assert_eq!(profile.patient.id, EntityId(5));
    assert_eq!(profile.appointments.len(), 2);
    assert!(profile.blood_tests.is_empty());
}
