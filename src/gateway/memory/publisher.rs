use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use crate::core::events::{DomainEvent, DomainEventType};
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// Keeps (name, key, kind) of every published event so tests can inspect them.
#[derive(Debug, Clone, Default)]
pub(crate) struct MemoryPublisher {
    events: Arc<RwLock<Vec<(String, String, DomainEventType)>>>,
}

impl MemoryPublisher {
    pub(crate) async fn published(&self) -> Vec<(String, String, DomainEventType)> {
        self.events.read().await.clone()
    }
}

#[async_trait]
impl EventPublisher for MemoryPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        self.events.write().await.push((event.name.clone(), event.key.clone(), event.kind));
        Ok(())
    }
}
