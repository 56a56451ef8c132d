use serde::{Deserialize, Serialize};

use crate::custom_errors::service_errors::ServiceError;

/// Body of `POST /players` on the roster API. Id and status are assigned
/// by the server.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CreatePlayerRequest {
    pub name: String,
    pub breed: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

/// Fields posted by the new-player form, as typed.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct NewPlayerForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub breed: String,
    #[serde(default, rename = "imageUrl")]
    pub image_url: String,
}

impl NewPlayerForm {
    /// Trims every field and rejects the first blank one.
    pub fn validate(self) -> Result<CreatePlayerRequest, ServiceError> {
        let name = non_empty(self.name, "name")?;
        let breed = non_empty(self.breed, "breed")?;
        let image_url = non_empty(self.image_url, "image URL")?;
        Ok(CreatePlayerRequest {
            name,
            breed,
            image_url,
        })
    }
}

fn non_empty(value: String, field: &'static str) -> Result<String, ServiceError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::EmptyField(field));
    }
    Ok(trimmed.to_string())
}
