mod certifications;
mod documents;
mod experience;

pub use certifications::*;
pub use documents::*;
pub use experience::*;
