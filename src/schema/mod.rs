pub mod artifact;
pub mod form;
pub mod question;

pub use form::*;
pub use question::*;
