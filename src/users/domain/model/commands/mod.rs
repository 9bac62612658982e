pub mod promote_user_command;
pub mod reconcile_subject_command;
pub mod register_user_command;
