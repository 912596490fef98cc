use super::*;
use crate::model::settings::{AddLanguageOutcome, RemoveLanguageOutcome};

mod entry;
mod languages;
mod load;
