use crate::auth::domain::model::{enums::user_role::UserRole, value_objects::subject_id::SubjectId};

#[derive(Clone, Debug)]
pub struct AuthenticatedPrincipal {
    pub subject_id: SubjectId,
    pub email: Option<String>,
    pub role: UserRole,
}
