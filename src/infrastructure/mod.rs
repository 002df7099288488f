use async_trait::async_trait;

use crate::domain::pet::{NewPet, Pet, PetFilter, PetPatch};

pub mod in_memory_pet_repository;

/// Authoritative pet storage. Absence is reported as a value, never as an error.
#[async_trait]
pub trait PetRepository: Send + Sync {
    async fn list(&self, filter: PetFilter) -> Vec<Pet>;
    async fn get(&self, id: u64) -> Option<Pet>;
    async fn create(&self, pet: NewPet) -> Pet;
    async fn update(&self, id: u64, patch: PetPatch) -> Option<Pet>;
    async fn delete(&self, id: u64) -> bool;
}
