//! Item store handlers.
//!
//! Every result echoes the mount and request ids of the effect that issued
//! it. Failures are always logged; whether the user sees them is decided by
//! the reducer.

use std::sync::Arc;

use stockroom_core::backend::{BackendError, ItemStore};
use stockroom_core::models::{Item, ItemFields, ItemId};

use crate::common::{MountId, RequestId};
use crate::events::{StoreUiEvent, UiEvent};

fn log_failure(op: &str, collection: &str, error: &BackendError) {
    tracing::warn!(
        op,
        collection,
        kind = %error.kind,
        error = %error,
        details = error.details.as_deref().unwrap_or(""),
        "Item store call failed"
    );
}

pub async fn load_items(
    store: Arc<dyn ItemStore>,
    collection: String,
    mount: MountId,
    req: RequestId,
) -> UiEvent {
    let event = match store.list_all(&collection).await {
        Ok(items) => {
            tracing::info!(count = items.len(), "Items loaded");
            StoreUiEvent::ItemsLoaded { mount, req, items }
        }
        Err(error) => {
            log_failure("list", &collection, &error);
            StoreUiEvent::LoadFailed {
                mount,
                req,
                error: error.to_string(),
            }
        }
    };
    UiEvent::Store(event)
}

pub async fn create_item(
    store: Arc<dyn ItemStore>,
    collection: String,
    mount: MountId,
    req: RequestId,
    fields: ItemFields,
) -> UiEvent {
    let event = match store.create(&collection, &fields).await {
        Ok(id) => StoreUiEvent::ItemCreated {
            mount,
            req,
            item: Item::from_fields(id, fields),
        },
        Err(error) => {
            log_failure("create", &collection, &error);
            StoreUiEvent::CreateFailed {
                mount,
                req,
                error: error.to_string(),
            }
        }
    };
    UiEvent::Store(event)
}

pub async fn update_item(
    store: Arc<dyn ItemStore>,
    collection: String,
    mount: MountId,
    req: RequestId,
    id: ItemId,
    fields: ItemFields,
) -> UiEvent {
    let event = match store.update(&collection, &id, &fields).await {
        Ok(()) => StoreUiEvent::ItemUpdated {
            mount,
            req,
            id,
            fields,
        },
        Err(error) => {
            log_failure("update", &collection, &error);
            StoreUiEvent::UpdateFailed {
                mount,
                req,
                error: error.to_string(),
            }
        }
    };
    UiEvent::Store(event)
}

pub async fn delete_item(
    store: Arc<dyn ItemStore>,
    collection: String,
    mount: MountId,
    req: RequestId,
    id: ItemId,
) -> UiEvent {
    let event = match store.delete(&collection, &id).await {
        Ok(()) => StoreUiEvent::ItemDeleted { mount, req, id },
        Err(error) => {
            log_failure("delete", &collection, &error);
            StoreUiEvent::DeleteFailed {
                mount,
                req,
                error: error.to_string(),
            }
        }
    };
    UiEvent::Store(event)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use stockroom_core::backend::{BackendErrorKind, BackendResult};
    use stockroom_core::models::Quantity;

    use super::*;

    /// In-memory store; `fail` makes every call return a network error.
    #[derive(Default)]
    struct FakeStore {
        docs: Mutex<Vec<Item>>,
        fail: bool,
    }

    impl FakeStore {
        fn check(&self) -> BackendResult<()> {
            if self.fail {
                return Err(BackendError::new(BackendErrorKind::Network, "offline"));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl ItemStore for FakeStore {
        async fn list_all(&self, collection: &str) -> BackendResult<Vec<Item>> {
            assert_eq!(collection, "items");
            self.check()?;
            Ok(self.docs.lock().unwrap().clone())
        }

        async fn create(&self, _collection: &str, fields: &ItemFields) -> BackendResult<ItemId> {
            self.check()?;
            let mut docs = self.docs.lock().unwrap();
            let id = ItemId::new(format!("doc-{}", docs.len()));
            docs.push(Item::from_fields(id.clone(), fields.clone()));
            Ok(id)
        }

        async fn update(
            &self,
            _collection: &str,
            id: &ItemId,
            fields: &ItemFields,
        ) -> BackendResult<()> {
            self.check()?;
            let mut docs = self.docs.lock().unwrap();
            let item = docs
                .iter_mut()
                .find(|item| &item.id == id)
                .ok_or_else(|| BackendError::http_status(404, ""))?;
            item.apply(fields);
            Ok(())
        }

        async fn delete(&self, _collection: &str, id: &ItemId) -> BackendResult<()> {
            self.check()?;
            self.docs.lock().unwrap().retain(|item| &item.id != id);
            Ok(())
        }
    }

    fn fields(name: &str, quantity: u64) -> ItemFields {
        ItemFields {
            name: name.to_string(),
            quantity: Quantity::new(quantity).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_create_echoes_ids_and_returned_item() {
        let store: Arc<dyn ItemStore> = Arc::new(FakeStore::default());
        let event = create_item(
            Arc::clone(&store),
            "items".to_string(),
            MountId(3),
            RequestId(4),
            fields("Bolt", 2),
        )
        .await;

        let UiEvent::Store(StoreUiEvent::ItemCreated { mount, req, item }) = event else {
            panic!("expected ItemCreated, got {event:?}");
        };
        assert_eq!(mount, MountId(3));
        assert_eq!(req, RequestId(4));
        assert_eq!(item.id.as_str(), "doc-0");
        assert_eq!(item.name, "Bolt");
    }

    #[tokio::test]
    async fn test_load_failure_carries_message() {
        let store: Arc<dyn ItemStore> = Arc::new(FakeStore {
            fail: true,
            ..FakeStore::default()
        });
        let event = load_items(store, "items".to_string(), MountId(1), RequestId(2)).await;
        assert!(matches!(
            event,
            UiEvent::Store(StoreUiEvent::LoadFailed { ref error, .. }) if error.contains("offline")
        ));
    }

    #[tokio::test]
    async fn test_update_missing_document_fails() {
        let store: Arc<dyn ItemStore> = Arc::new(FakeStore::default());
        let event = update_item(
            store,
            "items".to_string(),
            MountId(1),
            RequestId(2),
            ItemId::new("gone"),
            fields("Nut", 1),
        )
        .await;
        assert!(matches!(
            event,
            UiEvent::Store(StoreUiEvent::UpdateFailed { ref error, .. }) if error.contains("404")
        ));
    }

    #[tokio::test]
    async fn test_delete_then_list_is_empty() {
        let store: Arc<dyn ItemStore> = Arc::new(FakeStore::default());
        let UiEvent::Store(StoreUiEvent::ItemCreated { item, .. }) = create_item(
            Arc::clone(&store),
            "items".to_string(),
            MountId(1),
            RequestId(1),
            fields("Nut", 1),
        )
        .await
        else {
            panic!("create failed");
        };

        let event = delete_item(
            Arc::clone(&store),
            "items".to_string(),
            MountId(1),
            RequestId(2),
            item.id.clone(),
        )
        .await;
        assert!(matches!(
            event,
            UiEvent::Store(StoreUiEvent::ItemDeleted { ref id, .. }) if *id == item.id
        ));

        let UiEvent::Store(StoreUiEvent::ItemsLoaded { items, .. }) =
            load_items(store, "items".to_string(), MountId(1), RequestId(3)).await
        else {
            panic!("load failed");
        };
        assert!(items.is_empty());
    }
}
