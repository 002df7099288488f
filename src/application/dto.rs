use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, de};

use crate::domain::{
    errors::DomainError,
    pet::{NewPet, Pet, PetFilter, PetPatch, PetType},
};

const MAX_TEXT_LEN: usize = 100;
const MAX_AGE: u8 = 100;

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePetRequest {
    pub name: String,
    pub pet_type: PetType,
    pub age: u8,
    #[serde(default)]
    pub vaccinated: bool,
    pub owner_name: String,
}

impl CreatePetRequest {
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_text("name", &self.name)?;
        validate_age(self.age)?;
        validate_text("owner_name", &self.owner_name)?;
        Ok(())
    }

    pub fn into_domain(self) -> NewPet {
        NewPet {
            name: self.name,
            pet_type: self.pet_type,
            age: self.age,
            vaccinated: self.vaccinated,
            owner_name: self.owner_name,
        }
    }
}

/// PATCH body. The outer `Option` records whether the field was sent at all,
/// the inner one whether it was sent as `null`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePetRequest {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub pet_type: Option<Option<PetType>>,
    #[serde(default, deserialize_with = "present")]
    pub age: Option<Option<u8>>,
    #[serde(default, deserialize_with = "present")]
    pub vaccinated: Option<Option<bool>>,
    #[serde(default, deserialize_with = "present")]
    pub owner_name: Option<Option<String>>,
}

impl UpdatePetRequest {
    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(name) = required("name", &self.name)? {
            validate_text("name", name)?;
        }
        required("pet_type", &self.pet_type)?;
        if let Some(age) = required("age", &self.age)? {
            validate_age(*age)?;
        }
        required("vaccinated", &self.vaccinated)?;
        if let Some(owner_name) = required("owner_name", &self.owner_name)? {
            validate_text("owner_name", owner_name)?;
        }
        Ok(())
    }

    /// Explicit nulls collapse to "keep"; call [`UpdatePetRequest::validate`] first.
    pub fn into_patch(self) -> PetPatch {
        PetPatch {
            name: self.name.flatten(),
            pet_type: self.pet_type.flatten(),
            age: self.age.flatten(),
            vaccinated: self.vaccinated.flatten(),
            owner_name: self.owner_name.flatten(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListPetsQuery {
    #[serde(default)]
    pub pet_type: Option<PetType>,
    #[serde(default, deserialize_with = "lax_bool")]
    pub vaccinated: Option<bool>,
}

impl ListPetsQuery {
    pub fn into_filter(self) -> PetFilter {
        PetFilter {
            pet_type: self.pet_type,
            vaccinated: self.vaccinated,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PetResponse {
    pub id: u64,
    pub name: String,
    pub pet_type: PetType,
    pub age: u8,
    pub vaccinated: bool,
    pub owner_name: String,
    pub created_at: DateTime<Utc>,
}

impl From<Pet> for PetResponse {
    fn from(value: Pet) -> Self {
        Self {
            id: value.id,
            name: value.name,
            pet_type: value.pet_type,
            age: value.age,
            vaccinated: value.vaccinated,
            owner_name: value.owner_name,
            created_at: value.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub service: &'static str,
    pub status: &'static str,
    pub date: NaiveDate,
}

fn present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Query-string boolean that also takes `1/0`, `yes/no`, `on/off`, `t/f`, `y/n` in any case.
fn lax_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };

    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "t" | "y" => Ok(Some(true)),
        "false" | "0" | "no" | "off" | "f" | "n" => Ok(Some(false)),
        _ => Err(de::Error::custom(format!(
            "vaccinated must be a boolean, got `{raw}`"
        ))),
    }
}

fn required<'a, T>(
    field: &str,
    value: &'a Option<Option<T>>,
) -> Result<Option<&'a T>, DomainError> {
    match value {
        None => Ok(None),
        Some(None) => Err(DomainError::validation(format!("{field} must not be null"))),
        Some(Some(inner)) => Ok(Some(inner)),
    }
}

fn validate_text(field: &str, value: &str) -> Result<(), DomainError> {
    if value.is_empty() {
        return Err(DomainError::validation(format!("{field} must not be empty")));
    }
    if value.chars().count() > MAX_TEXT_LEN {
        return Err(DomainError::validation(format!(
            "{field} must be at most {MAX_TEXT_LEN} characters"
        )));
    }
    Ok(())
}

fn validate_age(age: u8) -> Result<(), DomainError> {
    if age > MAX_AGE {
        return Err(DomainError::validation(format!(
            "age must be between 0 and {MAX_AGE}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn create_request(value: serde_json::Value) -> CreatePetRequest {
        serde_json::from_value(value).expect("create request should parse")
    }

    fn update_request(value: serde_json::Value) -> UpdatePetRequest {
        serde_json::from_value(value).expect("update request should parse")
    }

    #[test]
    fn create_defaults_vaccinated_to_false() {
        let request = create_request(json!({
            "name": "Rex",
            "pet_type": "dog",
            "age": 5,
            "owner_name": "Bob"
        }));

        assert!(!request.vaccinated);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn create_rejects_out_of_range_fields() {
        let too_old = create_request(json!({
            "name": "Rex",
            "pet_type": "dog",
            "age": 101,
            "owner_name": "Bob"
        }));
        assert!(matches!(too_old.validate(), Err(DomainError::Validation(_))));

        let blank_name = create_request(json!({
            "name": "",
            "pet_type": "dog",
            "age": 1,
            "owner_name": "Bob"
        }));
        assert!(matches!(blank_name.validate(), Err(DomainError::Validation(_))));

        let long_owner = create_request(json!({
            "name": "Rex",
            "pet_type": "dog",
            "age": 1,
            "owner_name": "x".repeat(101)
        }));
        assert!(matches!(long_owner.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn create_counts_characters_not_bytes() {
        let request = create_request(json!({
            "name": "é".repeat(100),
            "pet_type": "bird",
            "age": 0,
            "owner_name": "Zoë"
        }));

        assert!(request.validate().is_ok());
    }

    #[test]
    fn create_rejects_unknown_pet_type_at_parse_time() {
        let parsed = serde_json::from_value::<CreatePetRequest>(json!({
            "name": "Rex",
            "pet_type": "dinosaur",
            "age": 5,
            "owner_name": "Bob"
        }));

        assert!(parsed.is_err());
    }

    #[test]
    fn update_distinguishes_omitted_from_null() {
        let omitted = update_request(json!({ "age": 4 }));
        assert_eq!(omitted.name, None);
        assert_eq!(omitted.age, Some(Some(4)));
        assert!(omitted.validate().is_ok());

        let nulled = update_request(json!({ "name": null }));
        assert_eq!(nulled.name, Some(None));
        let error = nulled.validate().expect_err("null name must be rejected");
        assert!(matches!(error, DomainError::Validation(message) if message.contains("name")));
    }

    #[test]
    fn update_rejects_null_on_every_field() {
        for field in ["name", "pet_type", "age", "vaccinated", "owner_name"] {
            let request = update_request(json!({ field: null }));
            assert!(
                matches!(request.validate(), Err(DomainError::Validation(_))),
                "{field} null must be rejected"
            );
        }
    }

    #[test]
    fn update_into_patch_keeps_only_present_values() {
        let request = update_request(json!({ "age": 4, "vaccinated": false }));
        request.validate().expect("patch should be valid");

        assert_eq!(
            request.into_patch(),
            PetPatch {
                age: Some(4),
                vaccinated: Some(false),
                ..PetPatch::default()
            }
        );
    }

    #[test]
    fn list_query_accepts_lax_booleans() {
        for (raw, expected) in [
            ("true", true),
            ("True", true),
            ("1", true),
            ("YES", true),
            ("on", true),
            ("false", false),
            ("0", false),
            ("No", false),
            ("off", false),
            ("f", false),
        ] {
            let query = serde_json::from_value::<ListPetsQuery>(json!({ "vaccinated": raw }))
                .expect("lax boolean should parse");
            assert_eq!(query.vaccinated, Some(expected), "{raw}");
        }

        let omitted = serde_json::from_value::<ListPetsQuery>(json!({}))
            .expect("empty query should parse");
        assert_eq!(omitted.vaccinated, None);

        let unknown = serde_json::from_value::<ListPetsQuery>(json!({ "vaccinated": "maybe" }));
        assert!(unknown.is_err());
    }

    #[test]
    fn empty_update_is_valid() {
        let request = update_request(json!({}));
        assert!(request.validate().is_ok());
        assert_eq!(request.into_patch(), PetPatch::default());
    }
}
