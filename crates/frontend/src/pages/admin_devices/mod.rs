pub mod delete_confirm;
pub mod import_confirm;
pub mod rubric_prefix;
