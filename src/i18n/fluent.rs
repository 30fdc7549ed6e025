// SPDX-License-Identifier: MPL-2.0
use crate::app::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const DEFAULT_LOCALE: &str = "en-US";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, None, &Config::default())
    }
}

impl I18n {
    /// Builds the translation bundles and resolves the active locale.
    ///
    /// `i18n_dir` may point at a directory of `<locale>.ftl` files; they are
    /// loaded after the embedded ones and override messages with the same id.
    pub fn new(cli_lang: Option<String>, i18n_dir: Option<String>, config: &Config) -> Self {
        let mut i18n = Self {
            bundles: HashMap::new(),
            available_locales: Vec::new(),
            current_locale: default_locale(),
        };

        for file in Asset::iter() {
            let filename = file.as_ref();
            if let Some(content) = Asset::get(filename) {
                i18n.add_source(filename, &String::from_utf8_lossy(content.data.as_ref()));
            }
        }

        if let Some(dir) = i18n_dir {
            i18n.load_directory(Path::new(&dir));
        }

        if let Some(locale) = resolve_locale(cli_lang, config, &i18n.available_locales) {
            i18n.current_locale = locale;
        }
        i18n
    }

    fn load_directory(&mut self, dir: &Path) {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(dir = %dir.display(), %err, "cannot read i18n directory");
                return;
            }
        };
        for entry in entries.flatten() {
            let path = entry.path();
            let Some(filename) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            match fs::read_to_string(&path) {
                Ok(content) => self.add_source(filename, &content),
                Err(err) => tracing::warn!(file = %path.display(), %err, "cannot read ftl file"),
            }
        }
    }

    fn add_source(&mut self, filename: &str, content: &str) {
        let Some(locale_str) = filename.strip_suffix(".ftl") else {
            return;
        };
        let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
            tracing::warn!(filename, "ignoring ftl file with invalid locale name");
            return;
        };

        let resource = match FluentResource::try_new(content.to_string()) {
            Ok(res) => res,
            Err((res, errors)) => {
                tracing::warn!(filename, count = errors.len(), "ftl file has syntax errors");
                res
            }
        };

        let bundle = self.bundles.entry(locale.clone()).or_insert_with(|| {
            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            // Plain strings in widgets; no bidi isolation marks around placeables.
            bundle.set_use_isolating(false);
            bundle
        });
        bundle.add_resource_overriding(resource);

        if !self.available_locales.contains(&locale) {
            self.available_locales.push(locale);
        }
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, value.to_string());
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs<'_>>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, args, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

fn default_locale() -> LanguageIdentifier {
    DEFAULT_LOCALE.parse().unwrap_or_default()
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. Check CLI args
    if let Some(lang_str) = cli_lang {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 2. Check config file
    if let Some(lang_str) = &config.general.language {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 3. Check OS locale
    if let Some(os_locale_str) = sys_locale::get_locale() {
        if let Ok(os_lang) = os_locale_str.parse::<LanguageIdentifier>() {
            if available.contains(&os_lang) {
                return Some(os_lang);
            }
        }
    }

    DEFAULT_LOCALE
        .parse::<LanguageIdentifier>()
        .ok()
        .filter(|lang| available.contains(lang))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn english() -> I18n {
        I18n::new(Some("en-US".to_string()), None, &Config::default())
    }

    #[test]
    fn test_resolve_locale_cli() {
        let config = Config::default();
        let available: Vec<LanguageIdentifier> =
            vec!["en-US".parse().unwrap(), "fr".parse().unwrap()];
        let lang = resolve_locale(Some("fr".to_string()), &config, &available);
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn test_resolve_locale_config() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let available: Vec<LanguageIdentifier> =
            vec!["en-US".parse().unwrap(), "fr".parse().unwrap()];
        let lang = resolve_locale(None, &config, &available);
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn test_resolve_locale_cli_beats_config() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let available: Vec<LanguageIdentifier> =
            vec!["en-US".parse().unwrap(), "fr".parse().unwrap()];
        let lang = resolve_locale(Some("en-US".to_string()), &config, &available);
        assert_eq!(lang, Some("en-US".parse().unwrap()));
    }

    #[test]
    fn test_resolve_locale_default() {
        let config = Config::default();
        let available: Vec<LanguageIdentifier> =
            vec!["en-US".parse().unwrap(), "fr".parse().unwrap()];
        let lang = resolve_locale(None, &config, &available);
        // System dependent: whatever comes back must be one of the bundles.
        if let Some(l) = lang {
            assert!(available.contains(&l));
        }
    }

    #[test]
    fn embedded_bundles_are_loaded() {
        let i18n = english();
        assert!(i18n.available_locales.contains(&"en-US".parse().unwrap()));
        assert!(i18n.available_locales.contains(&"fr".parse().unwrap()));
        assert_eq!(i18n.tr("results-show-original"), "Show Original Text");
    }

    #[test]
    fn missing_key_is_marked() {
        let i18n = english();
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn arguments_are_interpolated_without_isolation_marks() {
        let i18n = english();
        let counter = i18n.tr_with_args("results-counter", &[("current", "1"), ("total", "2")]);
        assert_eq!(counter, "1 / 2");
    }

    #[test]
    fn set_locale_ignores_unknown_locales() {
        let mut i18n = english();
        i18n.set_locale("de".parse().unwrap());
        assert_eq!(i18n.current_locale().to_string(), "en-US");
        i18n.set_locale("fr".parse().unwrap());
        assert_eq!(i18n.current_locale().to_string(), "fr");
    }

    #[test]
    fn i18n_dir_overrides_embedded_messages() {
        let dir = tempdir().expect("failed to create temp dir");
        fs::write(
            dir.path().join("en-US.ftl"),
            "results-show-summary = Back to summary\n",
        )
        .expect("failed to write ftl");

        let i18n = I18n::new(
            Some("en-US".to_string()),
            Some(dir.path().to_string_lossy().into_owned()),
            &Config::default(),
        );
        assert_eq!(i18n.tr("results-show-summary"), "Back to summary");
        // Untouched messages still come from the embedded bundle.
        assert_eq!(i18n.tr("results-show-original"), "Show Original Text");
    }
}
