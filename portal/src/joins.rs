// portal/src/joins.rs

use std::collections::HashSet;

use serde::Serialize;

use models::{Appointment, EntityId, User};

/// Marks a view as degraded: one of its dependent fetches failed after the
/// anchor data was already assembled. The view still renders what it has.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JoinWarning {
    pub collection: &'static str,
    pub detail: String,
}

/// Newest-first ordering for appointment-like rows, applied before any
/// agenda or calendar view is handed to the renderer.
pub fn newest_first(appointments: &mut [Appointment]) {
    appointments.sort_by(|a, b| b.fecha_hora.cmp(&a.fecha_hora));
}

/// The set of keys produced by an anchor filter, used for membership tests
/// in dependent collections.
pub fn key_set<I>(ids: I) -> HashSet<EntityId>
where
    I: IntoIterator<Item = EntityId>,
{
    ids.into_iter().collect()
}

/// Finds the user record backing a role entity, for display-field merges.
pub fn user_for<'a>(users: &'a [User], user_id: EntityId) -> Option<&'a User> {
    users.iter().find(|u| u.id == user_id)
}

#[cfg(test)]
mod tests {
    use super::{key_set, newest_first};
    use chrono::{TimeZone, Utc};
    use models::{Appointment, EntityId};

    fn appointment(id: i64, hour: u32) -> Appointment {
        Appointment {
            id: EntityId(id),
            paciente_id: EntityId(1),
            recepcionista_id: EntityId(2),
            profesional_id: EntityId(3),
            fecha_hora: Utc.with_ymd_and_hms(2024, 6, 1, hour, 0, 0).unwrap(),
            estado: "Pendiente".to_string(),
            notas: String::new(),
        }
    }

    #[test]
    fn should_sort_newest_first() {
        let mut rows = vec![appointment(1, 9), appointment(2, 15), appointment(3, 12)];
        newest_first(&mut rows);
        let order: Vec<i64> = rows.iter().map(|a| a.id.as_i64()).collect();
        assert_eq!(order, vec![2, 3, 1]);
    }

    #[test]
    fn should_collect_key_set() {
        let set = key_set([EntityId(1), EntityId(2), EntityId(1)]);
        assert_eq!(set.len(), 2);
    }
}
