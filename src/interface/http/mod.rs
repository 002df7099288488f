pub mod pets_handler;
pub mod problem;
