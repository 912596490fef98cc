//! Deletion sync between original messages and their translation replies.

use std::{collections::HashMap, sync::Arc};

use dioxus_logger::tracing;
use tokio::sync::RwLock;

use crate::{
    model::message::{DeletedMessage, MessageLink},
    service::gateway::MessageGateway,
};

/// Tracks which translation reply belongs to which original message.
///
/// Links live only for the current process run. A link is removed only when its
/// original is deleted, so the map grows by one entry per translated message for
/// as long as the process runs. Cheap to clone; clones share the same map.
#[derive(Clone, Default)]
pub struct LifecycleTracker {
    links: Arc<RwLock<HashMap<u64, MessageLink>>>,
}

impl LifecycleTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `reply_id` was posted in `channel_id` as the translation of
    /// `original_id`.
    pub async fn link(&self, original_id: u64, channel_id: u64, reply_id: u64) {
        self.links.write().await.insert(
            original_id,
            MessageLink {
                channel_id,
                reply_id,
            },
        );
    }

    /// Reply linked to an original message, if any.
    #[cfg(test)]
    pub async fn get(&self, original_id: u64) -> Option<MessageLink> {
        self.links.read().await.get(&original_id).copied()
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.links.read().await.len()
    }

    /// Deletes the translation reply of a deleted original message.
    ///
    /// The link is taken out of the map before any Discord call, so each reply gets
    /// at most one deletion attempt even if the delete event is delivered twice.
    /// Fetch and delete failures are logged and dropped. Messages without a link are
    /// ignored.
    ///
    /// # Arguments
    /// - `deleted` - The message-deleted event
    /// - `gateway` - Discord operations used to check and delete the reply
    ///
    /// # Returns
    /// - `true` - A reply was found and deleted
    /// - `false` - No link existed, the reply was already gone, or a call failed
    pub async fn on_deleted(&self, deleted: DeletedMessage, gateway: &dyn MessageGateway) -> bool {
        let Some(link) = self.links.write().await.remove(&deleted.id) else {
            return false;
        };

        match gateway.message_exists(link.channel_id, link.reply_id).await {
            Ok(true) => {}
            Ok(false) => {
                tracing::debug!(
                    "Translation {} for message {} is already gone",
                    link.reply_id,
                    deleted.id
                );
                return false;
            }
            Err(e) => {
                tracing::warn!("Could not fetch translation {}: {}", link.reply_id, e);
                return false;
            }
        }

        match gateway.delete_message(link.channel_id, link.reply_id).await {
            Ok(()) => {
                tracing::info!("Deleted translation for message {}", deleted.id);
                true
            }
            Err(e) => {
                tracing::warn!("Could not delete translation {}: {}", link.reply_id, e);
                false
            }
        }
    }
}
