// session/src/context.rs

use serde::Serialize;
use uuid::Uuid;

use models::{EntityId, Role};

/// The `{UserID, Rol, RoleEntityID}` triple exposed once resolution reaches
/// `Ready`. Handed to the join layer and to portal selection; there is
/// exactly one role-entity id per session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActorContext {
    pub session_id: Uuid,
    pub user_id: EntityId,
    pub role: Role,
    pub role_entity_id: EntityId,
}
