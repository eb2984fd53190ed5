mod admin_posts;
mod public_post;

pub use admin_posts::*;
pub use public_post::*;
