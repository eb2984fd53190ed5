use serde::Serialize;

/// The authenticated site owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminIdentity {
    pub email: String,
}
