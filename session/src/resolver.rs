// session/src/resolver.rs

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

use gateway::{ClinicGateway, GatewayError};
use models::{
    EntityId, NewHealthProfessional, NewPatient, NewReceptionist, NewUser, Role,
};

use crate::context::ActorContext;
use crate::identity::IdentityClaims;

/// Where the session stands in the resolution state machine. `NeedsUserProfile`
/// and `NeedsEntityProfile` are terminal until the matching form is submitted.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Unauthenticated,
    ResolvingUser,
    NeedsUserProfile,
    ResolvingEntity { user_id: EntityId, role: Role },
    NeedsEntityProfile { user_id: EntityId, role: Role },
    Ready(ActorContext),
}

impl SessionState {
    fn name(&self) -> &'static str {
        match self {
            SessionState::Unauthenticated => "Unauthenticated",
            SessionState::ResolvingUser => "ResolvingUser",
            SessionState::NeedsUserProfile => "NeedsUserProfile",
            SessionState::ResolvingEntity { .. } => "ResolvingEntity",
            SessionState::NeedsEntityProfile { .. } => "NeedsEntityProfile",
            SessionState::Ready(_) => "Ready",
        }
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error("operation not valid in state {0}")]
    InvalidState(&'static str),
    #[error("submitted entity form does not match role {expected}")]
    RoleMismatch { expected: Role },
}

/// The role-specific intake form submitted from `NeedsEntityProfile`.
#[derive(Debug, Clone, PartialEq)]
pub enum RoleEntityForm {
    Patient(NewPatient),
    Receptionist(NewReceptionist),
    HealthProfessional(NewHealthProfessional),
}

impl RoleEntityForm {
    fn role(&self) -> Role {
        match self {
            RoleEntityForm::Patient(_) => Role::Paciente,
            RoleEntityForm::Receptionist(_) => Role::Recepcionista,
            RoleEntityForm::HealthProfessional(_) => Role::Medico,
        }
    }
}

/// A signed-in session and its resolution driver.
///
/// Resolution is idempotent: re-running `resolve` against unchanged backend
/// state lands in the same place. Every gateway failure propagates without
/// touching `state`, so a failed step leaves the session exactly where it
/// was and the caller can retry.
pub struct Session<G: ClinicGateway> {
    gateway: Arc<G>,
    claims: Option<IdentityClaims>,
    session_id: Uuid,
    state: SessionState,
}

impl<G: ClinicGateway> Session<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Session {
            gateway,
            claims: None,
            session_id: Uuid::nil(),
            state: SessionState::Unauthenticated,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The resolved actor, if the session is `Ready`.
    pub fn actor(&self) -> Option<&ActorContext> {
        match &self.state {
            SessionState::Ready(actor) => Some(actor),
            _ => None,
        }
    }

    /// Begins a session for an authenticated identity. The context lives
    /// from here until `sign_out`.
    pub fn sign_in(&mut self, claims: IdentityClaims) {
        info!(subject = %claims.subject, "session started");
        self.session_id = Uuid::new_v4();
        self.claims = Some(claims);
        self.state = SessionState::ResolvingUser;
    }

    /// Drops the session context entirely.
    pub fn sign_out(&mut self) {
        info!("session cleared");
        self.claims = None;
        self.session_id = Uuid::nil();
        self.state = SessionState::Unauthenticated;
    }

    /// Runs resolution from scratch: find the User by external identity id,
    /// then find the role entity by UserID. Both lookups fetch the whole
    /// collection and scan linearly; not-found is a normal transition.
    pub async fn resolve(&mut self) -> Result<&SessionState, SessionError> {
        let claims = self
            .claims
            .as_ref()
            .ok_or(SessionError::InvalidState("Unauthenticated"))?;

        let users = self.gateway.list_users().await?;
        let next = match users.iter().find(|u| u.external_id == claims.subject) {
            None => {
                debug!(subject = %claims.subject, "no user record, profile needed");
                SessionState::NeedsUserProfile
            }
            Some(user) => self.resolve_entity(user.rol, user.id).await?,
        };
        self.state = next;
        debug!(state = self.state.name(), "resolution settled");
        Ok(&self.state)
    }

    /// Submits the user profile form from `NeedsUserProfile`, then continues
    /// with entity resolution using the returned UserID and submitted Rol.
    pub async fn submit_user_profile(
        &mut self,
        new: NewUser,
    ) -> Result<&SessionState, SessionError> {
        if !matches!(self.state, SessionState::NeedsUserProfile) {
            return Err(SessionError::InvalidState(self.state.name()));
        }
        let user = self.gateway.create_user(&new).await?;
        info!(user_id = %user.id, role = %user.rol, "user profile created");
        let next = self.resolve_entity(user.rol, user.id).await?;
        self.state = next;
        Ok(&self.state)
    }

    /// Submits the role-specific intake form from `NeedsEntityProfile`, then
    /// re-runs entity resolution to pick up the new role-entity id.
    pub async fn submit_entity_profile(
        &mut self,
        form: RoleEntityForm,
    ) -> Result<&SessionState, SessionError> {
        let (user_id, role) = match &self.state {
            SessionState::NeedsEntityProfile { user_id, role } => (*user_id, *role),
            _ => return Err(SessionError::InvalidState(self.state.name())),
        };
        if form.role() != role {
            return Err(SessionError::RoleMismatch { expected: role });
        }
        match form {
            RoleEntityForm::Patient(new) => {
                self.gateway.create_patient(&new).await?;
            }
            RoleEntityForm::Receptionist(new) => {
                self.gateway.create_receptionist(&new).await?;
            }
            RoleEntityForm::HealthProfessional(new) => {
                self.gateway.create_health_professional(&new).await?;
            }
        }
        info!(user_id = %user_id, role = %role, "role entity created");
        let next = self.resolve_entity(role, user_id).await?;
        self.state = next;
        Ok(&self.state)
    }

    /// Scans the role's collection for an entity owned by `user_id`. Returns
    /// the next state without mutating the session, so callers only commit
    /// on success.
    async fn resolve_entity(
        &self,
        role: Role,
        user_id: EntityId,
    ) -> Result<SessionState, SessionError> {
        let role_entity_id = match role {
            Role::Paciente => self
                .gateway
                .list_patients()
                .await?
                .iter()
                .find(|p| p.user_id == user_id)
                .map(|p| p.id),
            Role::Medico => self
                .gateway
                .list_health_professionals()
                .await?
                .iter()
                .find(|p| p.user_id == user_id)
                .map(|p| p.id),
            Role::Recepcionista => self
                .gateway
                .list_receptionists()
                .await?
                .iter()
                .find(|r| r.user_id == user_id)
                .map(|r| r.id),
        };

        Ok(match role_entity_id {
            Some(role_entity_id) => SessionState::Ready(ActorContext {
                session_id: self.session_id,
                user_id,
                role,
                role_entity_id,
            }),
            None => SessionState::NeedsEntityProfile { user_id, role },
        })
    }
}
