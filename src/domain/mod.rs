//! Domain value objects and types.
//!
//! Every field a contact carries is a validated value object: a `Name`,
//! a `Phone`, or a `Birthday`. Validation happens at construction (and again
//! on deserialization), so an invalid value cannot be represented.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::{Birthday, BIRTHDAY_FORMAT};
pub use errors::ValidationError;
pub use name::Name;
pub use phone::{Phone, PHONE_DIGITS};
