use crate::{
    data::settings::SettingsRepository,
    error::AppError,
    model::{
        language::{LanguageCode, LanguageSet},
        settings::{ScopeKey, Settings},
    },
};
use test_utils::builder::TestBuilder;

mod save;

fn set(list: &[&str]) -> LanguageSet {
    LanguageSet::from_codes(list.iter().map(LanguageCode::new)).unwrap()
}
