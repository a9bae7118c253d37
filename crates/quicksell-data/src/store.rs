//! The remote product store.

use std::collections::HashMap;

use quicksell_core::{NewListing, Product, SellerProfile, UserId};
use serde::Serialize;

use crate::error::FetchError;
use crate::query;

/// Connection settings for the hosted backend.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Base URL of the backend project, without a trailing slash.
    pub base_url: String,
    /// Public (anon) API key, sent as the `apikey` header.
    pub anon_key: String,
}

/// Operations the marketplace needs from the remote data service.
///
/// The feed loader and the UI program against this trait; tests substitute
/// an in-memory implementation.
#[allow(async_fn_in_trait)]
pub trait ProductStore {
    /// All unsold products, newest first. Ordering and the sold filter are
    /// applied server-side.
    async fn list_unsold_products(&self) -> Result<Vec<Product>, FetchError>;

    /// Batched profile lookup keyed by seller ID. IDs with no profile row
    /// are simply absent from the map.
    async fn fetch_profiles(
        &self,
        ids: &[UserId],
    ) -> Result<HashMap<UserId, SellerProfile>, FetchError>;

    /// Insert a new product tagged with the given seller.
    async fn insert_product(
        &self,
        listing: &NewListing,
        seller: &UserId,
    ) -> Result<(), FetchError>;
}

/// Product row payload for an insert.
#[derive(Serialize)]
struct InsertRow<'a> {
    title: &'a str,
    description: &'a str,
    price: f64,
    image_url: Option<&'a str>,
    category: Option<&'a str>,
    condition: quicksell_core::Condition,
    seller_id: &'a str,
}

/// HTTP implementation of [`ProductStore`] against a Supabase-style
/// PostgREST backend.
#[derive(Debug, Clone)]
pub struct SupabaseStore {
    config: RemoteConfig,
    /// Bearer token for the current session; the anon key when signed out.
    access_token: String,
}

impl SupabaseStore {
    /// Create a store authenticated with the anon key only.
    pub fn new(config: RemoteConfig) -> Self {
        let anon = config.anon_key.clone();
        Self {
            config,
            access_token: anon,
        }
    }

    // A client per request keeps this type plain data; on wasm a held
    // reqwest::Client would make the store !Send.
    fn http(&self) -> reqwest::Client {
        reqwest::Client::new()
    }

    /// Use a session access token for subsequent requests.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = token.into();
        self
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.config.base_url.trim_end_matches('/'), table)
    }

    fn authed(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.header("apikey", &self.config.anon_key)
            .bearer_auth(&self.access_token)
    }

    async fn check(resp: reqwest::Response) -> Result<reqwest::Response, FetchError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let message = resp
            .text()
            .await
            .unwrap_or_else(|_| status.canonical_reason().unwrap_or("request failed").to_string());
        Err(FetchError::Http {
            status: status.as_u16(),
            message,
        })
    }
}

impl ProductStore for SupabaseStore {
    async fn list_unsold_products(&self) -> Result<Vec<Product>, FetchError> {
        tracing::debug!("fetching unsold products");
        let resp = self
            .authed(self.http().get(self.table_url("products")))
            .query(&query::unsold_products_query())
            .send()
            .await?;
        let products: Vec<Product> = Self::check(resp).await?.json().await?;
        tracing::debug!(count = products.len(), "products fetched");
        Ok(products)
    }

    async fn fetch_profiles(
        &self,
        ids: &[UserId],
    ) -> Result<HashMap<UserId, SellerProfile>, FetchError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        tracing::debug!(count = ids.len(), "fetching seller profiles");
        let resp = self
            .authed(self.http().get(self.table_url("profiles")))
            .query(&[
                ("select", "id,username,full_name"),
                ("id", query::id_in_filter(ids).as_str()),
            ])
            .send()
            .await?;
        let rows: Vec<SellerProfile> = Self::check(resp).await?.json().await?;
        Ok(rows.into_iter().map(|p| (p.id.clone(), p)).collect())
    }

    async fn insert_product(
        &self,
        listing: &NewListing,
        seller: &UserId,
    ) -> Result<(), FetchError> {
        tracing::debug!(title = %listing.title, "inserting product");
        let row = InsertRow {
            title: &listing.title,
            description: &listing.description,
            price: listing.price,
            image_url: listing.image_url.as_deref(),
            category: listing.category.as_deref(),
            condition: listing.condition,
            seller_id: seller.as_str(),
        };
        let resp = self
            .authed(self.http().post(self.table_url("products")))
            .header("Prefer", "return=minimal")
            .json(&row)
            .send()
            .await?;
        Self::check(resp).await?;
        Ok(())
    }
}
