pub mod entities;
pub mod lockout;
