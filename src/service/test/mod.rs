use std::sync::Arc;

use test_utils::{builder::TestBuilder, context::TestContext};

use crate::{
    data::settings::SettingsRepository,
    model::{
        language::{LanguageCode, LanguageSet},
        settings::{ScopeKey, Settings},
    },
    service::{
        command::CommandService, detector::LanguageDetector, lifecycle::LifecycleTracker,
        pipeline::AutoTranslatePipeline, settings::SettingsStore,
        translation::TranslationEngine,
    },
};

use self::fake::{FixedIdentifier, ScriptedBackend};

mod command;
mod lifecycle;
mod settings;

fn set(list: &[&str]) -> LanguageSet {
    LanguageSet::from_codes(list.iter().map(LanguageCode::new)).unwrap()
}

fn codes(list: &[&str]) -> Vec<LanguageCode> {
    list.iter().map(LanguageCode::new).collect()
}

/// Services wired to fakes and a temporary settings file.
struct Harness {
    test: TestContext,
    repository: SettingsRepository,
    store: SettingsStore,
    backend: Arc<ScriptedBackend>,
    identifier: Arc<FixedIdentifier>,
    lifecycle: LifecycleTracker,
}

impl Harness {
    fn new(settings: Settings, backend: ScriptedBackend, detected: &'static str) -> Self {
        let test = TestBuilder::new().build().unwrap();
        let repository = SettingsRepository::new(test.settings_path());

        Self {
            store: SettingsStore::with_settings(repository.clone(), settings),
            repository,
            test,
            backend: Arc::new(backend),
            identifier: Arc::new(FixedIdentifier::new(detected)),
            lifecycle: LifecycleTracker::new(),
        }
    }

    fn engine(&self) -> TranslationEngine {
        TranslationEngine::new(self.backend.clone())
    }

    fn detector(&self) -> LanguageDetector {
        LanguageDetector::new(self.identifier.clone())
    }

    fn pipeline(&self) -> AutoTranslatePipeline {
        AutoTranslatePipeline::new(
            self.store.clone(),
            self.detector(),
            self.engine(),
            self.lifecycle.clone(),
        )
    }

    fn commands(&self) -> CommandService {
        CommandService::new(self.store.clone(), self.detector(), self.engine())
    }
}

fn channel_settings(channel_id: u64, list: &[&str]) -> Settings {
    let mut settings = Settings::default();
    settings.insert(ScopeKey::Channel(channel_id), set(list));
    settings
}
