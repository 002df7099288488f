use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetType {
    Dog,
    Cat,
    Bird,
    Rodent,
    Other,
}

/// Stored snapshot of one pet. Never mutated in place once it is in the store;
/// updates build a new value with [`Pet::merged`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pet {
    pub id: u64,
    pub name: String,
    pub pet_type: PetType,
    pub age: u8,
    pub vaccinated: bool,
    pub owner_name: String,
    pub created_at: DateTime<Utc>,
}

impl Pet {
    pub fn from_new(id: u64, pet: NewPet, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: pet.name,
            pet_type: pet.pet_type,
            age: pet.age,
            vaccinated: pet.vaccinated,
            owner_name: pet.owner_name,
            created_at,
        }
    }

    /// Overlays the fields present in `patch`; `id` and `created_at` are carried over.
    pub fn merged(&self, patch: PetPatch) -> Self {
        Self {
            id: self.id,
            name: patch.name.unwrap_or_else(|| self.name.clone()),
            pet_type: patch.pet_type.unwrap_or(self.pet_type),
            age: patch.age.unwrap_or(self.age),
            vaccinated: patch.vaccinated.unwrap_or(self.vaccinated),
            owner_name: patch.owner_name.unwrap_or_else(|| self.owner_name.clone()),
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPet {
    pub name: String,
    pub pet_type: PetType,
    pub age: u8,
    pub vaccinated: bool,
    pub owner_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PetPatch {
    pub name: Option<String>,
    pub pet_type: Option<PetType>,
    pub age: Option<u8>,
    pub vaccinated: Option<bool>,
    pub owner_name: Option<String>,
}

/// List predicates. Every supplied predicate must hold; `None` leaves the field unconstrained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PetFilter {
    pub pet_type: Option<PetType>,
    pub vaccinated: Option<bool>,
}

impl PetFilter {
    pub fn matches(&self, pet: &Pet) -> bool {
        if let Some(pet_type) = self.pet_type {
            if pet.pet_type != pet_type {
                return false;
            }
        }

        if let Some(vaccinated) = self.vaccinated {
            if pet.vaccinated != vaccinated {
                return false;
            }
        }

        true
    }
}
