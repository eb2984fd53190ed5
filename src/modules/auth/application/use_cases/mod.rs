pub mod lockout_status;
pub mod login_admin;
