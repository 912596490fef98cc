use super::*;
use crate::model::message::DeletedMessage;

use super::fake::RecordingGateway;

mod on_deleted;

const CHANNEL_ID: u64 = 100;

fn deleted(id: u64) -> DeletedMessage {
    DeletedMessage {
        id,
        channel_id: CHANNEL_ID,
    }
}
