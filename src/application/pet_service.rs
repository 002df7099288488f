use std::sync::Arc;

use tracing::{debug, info};

use crate::{
    application::dto::{CreatePetRequest, ListPetsQuery, PetResponse, UpdatePetRequest},
    domain::errors::DomainError,
    infrastructure::PetRepository,
};

const PET_NOT_FOUND: &str = "Pet not found";

#[derive(Clone)]
pub struct PetService {
    repository: Arc<dyn PetRepository>,
}

impl PetService {
    pub fn new(repository: Arc<dyn PetRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_pets(&self, query: ListPetsQuery) -> Vec<PetResponse> {
        self.repository
            .list(query.into_filter())
            .await
            .into_iter()
            .map(PetResponse::from)
            .collect()
    }

    pub async fn get_pet(&self, id: u64) -> Result<PetResponse, DomainError> {
        let Some(pet) = self.repository.get(id).await else {
            debug!(pet_id = id, "pet lookup missed");
            return Err(DomainError::not_found(PET_NOT_FOUND));
        };
        Ok(PetResponse::from(pet))
    }

    pub async fn create_pet(&self, request: CreatePetRequest) -> Result<PetResponse, DomainError> {
        request.validate()?;

        let created = self.repository.create(request.into_domain()).await;
        info!(pet_id = created.id, pet_type = ?created.pet_type, "pet created");

        Ok(PetResponse::from(created))
    }

    pub async fn update_pet(
        &self,
        id: u64,
        request: UpdatePetRequest,
    ) -> Result<PetResponse, DomainError> {
        request.validate()?;

        let Some(updated) = self.repository.update(id, request.into_patch()).await else {
            debug!(pet_id = id, "update target missing");
            return Err(DomainError::not_found(PET_NOT_FOUND));
        };
        info!(pet_id = updated.id, pet_type = ?updated.pet_type, "pet updated");

        Ok(PetResponse::from(updated))
    }

    pub async fn delete_pet(&self, id: u64) -> Result<(), DomainError> {
        if !self.repository.delete(id).await {
            debug!(pet_id = id, "delete target missing");
            return Err(DomainError::not_found(PET_NOT_FOUND));
        }
        info!(pet_id = id, "pet deleted");

        Ok(())
    }
}
