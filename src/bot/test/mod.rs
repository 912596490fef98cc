use test_utils::serenity::{create_test_message, TestMessage};

use crate::model::message::IncomingMessage;
