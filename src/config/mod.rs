use std::env;

use crate::error::{OgpError, OgpResult};
use crate::models::{Locale, OpenGraph};

/// Site-wide defaults applied to records before rendering.
///
/// Read from `OGP_SITE_NAME`, `OGP_TYPE`, `OGP_LOCALE` and
/// `OGP_LOCALE_ALTERNATES` (comma-separated).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub site_name: Option<String>,
    pub r#type: Option<String>,
    pub locale: Option<Locale>,
    pub locale_alternates: Vec<Locale>,
}

impl Config {
    pub fn from_env() -> OgpResult<Self> {
        dotenvy::dotenv().ok();

        let config = Config {
            site_name: var("OGP_SITE_NAME")?,
            r#type: var("OGP_TYPE")?,
            locale: var("OGP_LOCALE")?.map(Locale::from),
            locale_alternates: var("OGP_LOCALE_ALTERNATES")?
                .map(|list| parse_list(&list))
                .unwrap_or_default(),
        };

        tracing::debug!(
            site_name = config.site_name.is_some(),
            og_type = config.r#type.is_some(),
            locale = config.locale.is_some(),
            locale_alternates = config.locale_alternates.len(),
            "Open Graph defaults loaded"
        );

        Ok(config)
    }

    /// Fill fields that are blank in `og`. Values already set are kept.
    pub fn apply(&self, og: &mut OpenGraph) {
        if og.site_name.is_empty() {
            if let Some(site_name) = &self.site_name {
                og.site_name.clone_from(site_name);
            }
        }
        if og.r#type.is_empty() {
            if let Some(ty) = &self.r#type {
                og.r#type.clone_from(ty);
            }
        }
        if og.locale.is_empty() {
            if let Some(locale) = &self.locale {
                og.locale = locale.clone();
            }
        }
        if og.locale_alternates.is_empty() {
            og.locale_alternates.clone_from(&self.locale_alternates);
        }
    }
}

/// Missing and empty variables are both treated as unset.
fn var(key: &str) -> OgpResult<Option<String>> {
    match env::var(key) {
        Ok(value) if value.is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => {
            Err(OgpError::Config(format!("{key} is not valid unicode")))
        }
    }
}

fn parse_list(list: &str) -> Vec<Locale> {
    list.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| Locale::from(item.to_owned()))
        .collect()
}
