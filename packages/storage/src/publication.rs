//! Publishing records and slug rules.
//!
//! A published portfolio is reachable at `{base}/{slug}` when it has a
//! custom slug and at `{base}/{document_id}` otherwise. Both forms share one
//! path space: slugs are unique across documents and never equal another
//! document's id. Unpublishing releases the slug.

use crate::{StorageError, StorageResult};
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;

pub const SLUG_MIN_LEN: usize = 3;
pub const SLUG_MAX_LEN: usize = 50;

fn slug_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[a-z0-9](?:[a-z0-9-]{1,48}[a-z0-9])$").expect("slug pattern compiles")
    })
}

/// Check a custom slug: 3-50 characters, lowercase letters, digits and
/// inner hyphens.
pub fn validate_slug(slug: &str) -> StorageResult<()> {
    let invalid = |reason: &str| StorageError::InvalidSlug {
        slug: slug.to_string(),
        reason: reason.to_string(),
    };

    if slug.len() < SLUG_MIN_LEN || slug.len() > SLUG_MAX_LEN {
        return Err(invalid("must be between 3 and 50 characters"));
    }
    if !slug_pattern().is_match(slug) {
        return Err(invalid(
            "use lowercase letters, digits and hyphens, starting and ending with a letter or digit",
        ));
    }
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishOptions {
    pub is_public: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_slug: Option<String>,
}

impl PublishOptions {
    pub fn public() -> Self {
        Self {
            is_public: true,
            custom_slug: None,
        }
    }

    pub fn with_slug(slug: impl Into<String>) -> Self {
        Self {
            is_public: true,
            custom_slug: Some(slug.into()),
        }
    }

    pub fn unpublish() -> Self {
        Self::default()
    }

    /// The custom slug this request would claim, checked against the slug rules
    pub fn requested_slug(&self) -> StorageResult<Option<&str>> {
        match (&self.custom_slug, self.is_public) {
            (Some(slug), true) => {
                validate_slug(slug)?;
                Ok(Some(slug.as_str()))
            }
            _ => Ok(None),
        }
    }
}

/// Publication state of one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    pub is_public: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

/// Answer to a publish request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishResult {
    /// `None` once unpublished
    pub public_url: Option<String>,
    pub publication: Publication,
}

/// Publication state of every document, keyed by document id
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PublicationIndex {
    entries: BTreeMap<String, Publication>,
}

impl PublicationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, document_id: &str) -> Option<&Publication> {
        self.entries.get(document_id)
    }

    /// Document currently holding `slug` while public
    pub fn owner_of(&self, slug: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, p)| p.is_public && p.slug.as_deref() == Some(slug))
            .map(|(id, _)| id.as_str())
    }

    /// Validate and record a publish request. Nothing changes on rejection.
    pub fn apply(
        &mut self,
        document_id: &str,
        options: &PublishOptions,
        now: DateTime<Utc>,
    ) -> StorageResult<Publication> {
        let publication = if options.is_public {
            // The path this document will answer on must not belong to another
            let path = options.requested_slug()?.unwrap_or(document_id);
            let owned_elsewhere = self.owner_of(path).is_some_and(|owner| owner != document_id)
                || (path != document_id && self.entries.contains_key(path));
            if owned_elsewhere {
                return Err(StorageError::SlugTaken(path.to_string()));
            }

            // Republishing keeps the original publish time
            let published_at = self
                .entries
                .get(document_id)
                .filter(|p| p.is_public)
                .and_then(|p| p.published_at)
                .unwrap_or(now);

            Publication {
                is_public: true,
                slug: options.custom_slug.clone(),
                published_at: Some(published_at),
            }
        } else {
            Publication {
                is_public: false,
                slug: None,
                published_at: None,
            }
        };

        self.entries
            .insert(document_id.to_string(), publication.clone());
        Ok(publication)
    }
}

/// Public address of a document, if it is published
pub fn public_url(base: &str, document_id: &str, publication: &Publication) -> Option<String> {
    if !publication.is_public {
        return None;
    }
    let path = publication.slug.as_deref().unwrap_or(document_id);
    Some(format!("{}/{}", base.trim_end_matches('/'), path))
}
