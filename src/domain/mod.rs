pub mod errors;
pub mod pet;
