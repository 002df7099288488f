pub mod dto;
pub mod pet_service;
