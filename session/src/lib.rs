// session/src/lib.rs
//
// Session & entity resolution: maps an authenticated identity to a domain
// User and its role entity, and tells the caller which screen comes next.
// The session context is an explicit object with a defined lifecycle
// (created at sign-in, cleared at sign-out); nothing here is global.

pub mod context;
pub mod identity;
pub mod resolver;
pub mod scope;

pub use context::ActorContext;
pub use identity::{IdentityClaims, IdentityError, IdentityProvider};
pub use resolver::{RoleEntityForm, Session, SessionError, SessionState};
pub use scope::{ScopeToken, ViewScope};
