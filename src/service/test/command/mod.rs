use super::*;
use crate::{
    error::AppError,
    model::settings::{AddLanguageOutcome, RemoveLanguageOutcome},
};

mod configure;
mod translate;

const CHANNEL_ID: u64 = 100;
const GUILD_ID: u64 = 200;
