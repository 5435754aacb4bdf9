pub mod header;
pub mod login_form;
pub mod logo;
pub mod register_form;
pub mod toast;
