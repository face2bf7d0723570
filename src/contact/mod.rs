//! Contact form validation and intake.

mod intake;
mod validation;

pub use intake::*;
pub use validation::*;
