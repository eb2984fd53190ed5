mod current_admin;
mod lockout_status;
mod login_admin;

pub use current_admin::*;
pub use lockout_status::*;
pub use login_admin::*;
