use async_trait::async_trait;
use reqwest::RequestBuilder;
use url::Url;

use super::values::{Document, FIELD_PATHS, ListDocumentsResponse, encode_fields};
use super::{send, send_json};
use crate::backend::{AuthGateway, BackendError, BackendErrorKind, BackendResult, ItemStore};
use crate::config::FirebaseConfig;
use crate::models::{Item, ItemFields, ItemId};

const PAGE_SIZE: &str = "300";

/// Item store backed by a Firestore collection via the v1 REST API.
///
/// Requests are authorized with the gateway's current id token.
pub struct FirestoreStore {
    http: reqwest::Client,
    base_url: String,
    project_id: String,
    gateway: AuthGateway,
}

impl FirestoreStore {
    pub fn new(config: &FirebaseConfig, http: reqwest::Client, gateway: AuthGateway) -> Self {
        Self {
            http,
            base_url: config.effective_firestore_base_url(),
            project_id: config.project_id.clone(),
            gateway,
        }
    }

    fn collection_url(&self, collection: &str) -> BackendResult<Url> {
        self.documents_url(&[collection])
    }

    fn document_url(&self, collection: &str, id: &ItemId) -> BackendResult<Url> {
        self.documents_url(&[collection, id.as_str()])
    }

    fn documents_url(&self, tail: &[&str]) -> BackendResult<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            BackendError::new(
                BackendErrorKind::Network,
                format!("Invalid Firestore base URL {:?}: {e}", self.base_url),
            )
        })?;
        url.path_segments_mut()
            .map_err(|()| {
                BackendError::new(
                    BackendErrorKind::Network,
                    format!("Firestore base URL cannot be a base: {}", self.base_url),
                )
            })?
            .pop_if_empty()
            .extend([
                "v1",
                "projects",
                self.project_id.as_str(),
                "databases",
                "(default)",
                "documents",
            ])
            .extend(tail);
        Ok(url)
    }

    /// Attaches the bearer token when a session exists.
    async fn authorize(&self, builder: RequestBuilder) -> BackendResult<RequestBuilder> {
        match self.gateway.fresh_id_token().await {
            Ok(token) => Ok(builder.bearer_auth(token)),
            Err(e) if e.kind == BackendErrorKind::Unauthenticated => Ok(builder),
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl ItemStore for FirestoreStore {
    async fn list_all(&self, collection: &str) -> BackendResult<Vec<Item>> {
        let url = self.collection_url(collection)?;
        let mut items = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut request = self.http.get(url.clone()).query(&[("pageSize", PAGE_SIZE)]);
            if let Some(token) = page_token.as_deref() {
                request = request.query(&[("pageToken", token)]);
            }
            let page: ListDocumentsResponse = send_json(self.authorize(request).await?).await?;

            for doc in page.documents {
                let name = doc.name.clone();
                match doc.into_item() {
                    Some(item) => items.push(item),
                    None => tracing::warn!(document = %name, "skipping malformed item document"),
                }
            }

            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(next) => page_token = Some(next),
                None => break,
            }
        }

        tracing::debug!(collection, count = items.len(), "listed items");
        Ok(items)
    }

    async fn create(&self, collection: &str, fields: &ItemFields) -> BackendResult<ItemId> {
        let url = self.collection_url(collection)?;
        let request = self.http.post(url).json(&encode_fields(fields));
        let doc: Document = send_json(self.authorize(request).await?).await?;
        let id = doc.id().ok_or_else(|| {
            BackendError::parse(format!("Created document has no id: {}", doc.name))
        })?;
        tracing::debug!(collection, id = %id, "created item");
        Ok(id)
    }

    async fn update(
        &self,
        collection: &str,
        id: &ItemId,
        fields: &ItemFields,
    ) -> BackendResult<()> {
        let url = self.document_url(collection, id)?;
        let mut query: Vec<(&str, &str)> = FIELD_PATHS
            .iter()
            .map(|path| ("updateMask.fieldPaths", *path))
            .collect();
        query.push(("currentDocument.exists", "true"));

        let request = self.http.patch(url).query(&query).json(&encode_fields(fields));
        send(self.authorize(request).await?).await?;
        tracing::debug!(collection, id = %id, "updated item");
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &ItemId) -> BackendResult<()> {
        let url = self.document_url(collection, id)?;
        let request = self.http.delete(url);
        send(self.authorize(request).await?).await?;
        tracing::debug!(collection, id = %id, "deleted item");
        Ok(())
    }
}
