// portal/src/lib.rs
//
// Relational join layer: each view builder fetches whole collections from
// the gateway, filters and joins them in memory for one role-scoped actor,
// and returns a denormalized view model. Builders are read-only; the
// mutation pass-throughs live in `visits` next to the screens that use them.
//
// No consistency is guaranteed across the fetches inside one join; if the
// backend changes mid-join the result may reference a dangling id. That is
// accepted and never retried.

pub mod joins;
pub mod patient;
pub mod professional;
pub mod receptionist;
pub mod views;
pub mod visits;

pub use joins::JoinWarning;
pub use views::{
    AppointmentEditor, PatientProfileView, PatientSummary, SchedulingContext, VisitHistory,
    VisitPanel, VisitRecord,
};
