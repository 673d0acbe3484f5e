// ============================================================================
// API CLIENT - HTTP only (stateless, no cache, no retry)
// ============================================================================

use gloo_net::http::{Request, Response};

use crate::error::ApiError;
use crate::models::{dedup_by_id, Pet, PetStatus};

/// Remote pet operations. One network attempt per call.
#[allow(async_fn_in_trait)]
pub trait PetApi {
    /// Pets with the given status, duplicates removed (first occurrence wins)
    async fn list_by_status(&self, status: PetStatus) -> Result<Vec<Pet>, ApiError>;

    async fn get_by_id(&self, id: i64) -> Result<Pet, ApiError>;

    /// Full-record replace
    async fn update(&self, pet: &Pet) -> Result<Pet, ApiError>;
}

/// petstore client over fetch
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn list_url(&self, status: PetStatus) -> String {
        format!("{}/pet/findByStatus?status={}", self.base_url, status.as_str())
    }

    pub fn pet_url(&self, id: i64) -> String {
        format!("{}/pet/{}", self.base_url, id)
    }

    pub fn update_url(&self) -> String {
        format!("{}/pet", self.base_url)
    }
}

fn status_error(response: &Response) -> String {
    format!("HTTP {}: {}", response.status(), response.status_text())
}

impl PetApi for ApiClient {
    async fn list_by_status(&self, status: PetStatus) -> Result<Vec<Pet>, ApiError> {
        let url = self.list_url(status);
        log::info!("📋 [PETS] GET {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Fetch { reason: format!("Network error: {}", e) })?;

        if !response.ok() {
            return Err(ApiError::Fetch { reason: status_error(&response) });
        }

        let pets = response
            .json::<Vec<Pet>>()
            .await
            .map_err(|e| ApiError::Fetch { reason: format!("Parse error: {}", e) })?;

        let received = pets.len();
        let unique = dedup_by_id(pets);
        if unique.len() != received {
            log::warn!(
                "⚠️ [PETS] upstream returned {} duplicate ids for status={}",
                received - unique.len(),
                status
            );
        }
        log::info!("✅ [PETS] {} pets with status={}", unique.len(), status);
        Ok(unique)
    }

    async fn get_by_id(&self, id: i64) -> Result<Pet, ApiError> {
        let url = self.pet_url(id);
        log::info!("🔍 [PETS] GET {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::NotFound { id, reason: format!("Network error: {}", e) })?;

        if !response.ok() {
            return Err(ApiError::NotFound { id, reason: status_error(&response) });
        }

        response
            .json::<Pet>()
            .await
            .map_err(|e| ApiError::NotFound { id, reason: format!("Parse error: {}", e) })
    }

    async fn update(&self, pet: &Pet) -> Result<Pet, ApiError> {
        let id = pet.id;
        let url = self.update_url();
        log::info!("📝 [PETS] PUT {} (id={})", url, id);

        let response = Request::put(&url)
            .json(pet)
            .map_err(|e| ApiError::Update { id, reason: format!("Serialization error: {}", e) })?
            .send()
            .await
            .map_err(|e| ApiError::Update { id, reason: format!("Network error: {}", e) })?;

        if !response.ok() {
            return Err(ApiError::Update { id, reason: status_error(&response) });
        }

        let updated = response
            .json::<Pet>()
            .await
            .map_err(|e| ApiError::Update { id, reason: format!("Parse error: {}", e) })?;
        log::info!("✅ [PETS] pet {} updated", updated.id);
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_endpoint_urls() {
        let client = ApiClient::with_base_url("https://petstore.swagger.io/v2/");
        assert_eq!(
            client.list_url(PetStatus::Pending),
            "https://petstore.swagger.io/v2/pet/findByStatus?status=pending"
        );
        assert_eq!(client.pet_url(12), "https://petstore.swagger.io/v2/pet/12");
        assert_eq!(client.update_url(), "https://petstore.swagger.io/v2/pet");
    }
}
