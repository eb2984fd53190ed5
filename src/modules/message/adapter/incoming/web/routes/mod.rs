mod contact;
mod messages;
mod notifications;

pub use contact::*;
pub use messages::*;
pub use notifications::*;
