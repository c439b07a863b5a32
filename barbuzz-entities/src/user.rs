use crate::id::Id;

/// Account as provided by the external authentication service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Id,
    pub username: String,
}
