use std::sync::Arc;

use crate::application::pet_service::PetService;

#[derive(Clone)]
pub struct AppState {
    pub pet_service: Arc<PetService>,
}

impl AppState {
    pub fn new(pet_service: Arc<PetService>) -> Self {
        Self { pet_service }
    }
}
