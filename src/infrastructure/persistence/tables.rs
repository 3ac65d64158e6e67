//! In-process table shape shared by the memory and file backends.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::entities::{BatchInput, BatchOutput, Link};
use crate::domain::errors::{BatchError, StorageError};

/// The two tables kept by the map-based backends.
///
/// Serialized as `{"links": {code: url}, "user_links": {user: [codes]}}`,
/// which is also the on-disk layout of [`super::FileStorage`].
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tables {
    #[serde(default)]
    pub links: BTreeMap<String, String>,
    #[serde(default)]
    pub user_links: BTreeMap<String, Vec<String>>,
}

impl Tables {
    /// Stores `link` and records it for `user_id`.
    ///
    /// Returns `true` when the short code was already present.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::HashCollision`] when the code belongs to a
    /// different URL. Nothing is changed in that case.
    pub fn insert(&mut self, link: Link, user_id: Option<&str>) -> Result<bool, StorageError> {
        let existed = match self.links.get(&link.short_code) {
            Some(stored) if *stored != link.long_url => {
                return Err(StorageError::hash_collision(link.short_code));
            }
            Some(_) => true,
            None => {
                self.links.insert(link.short_code.clone(), link.long_url.clone());
                false
            }
        };

        if let Some(user_id) = user_id {
            let codes = self.user_links.entry(user_id.to_string()).or_default();
            if !codes.contains(&link.short_code) {
                codes.push(link.short_code);
            }
        }

        Ok(existed)
    }

    pub fn long_url(&self, short_code: &str) -> Option<String> {
        self.links.get(short_code).cloned()
    }

    pub fn user_links(&self, user_id: &str) -> Option<Vec<String>> {
        self.user_links
            .get(user_id)
            .filter(|codes| !codes.is_empty())
            .cloned()
    }

    /// Removes the link for `long_url` from both tables.
    pub fn remove(&mut self, long_url: &str) {
        let short_code = Link::new(long_url).short_code;
        self.links.remove(&short_code);
        for codes in self.user_links.values_mut() {
            codes.retain(|code| code != &short_code);
        }
        self.user_links.retain(|_, codes| !codes.is_empty());
    }
}

/// Maps the result of a single save onto the `Storage` contract.
pub(crate) fn save_outcome(short_code: String, existed: bool) -> Result<String, StorageError> {
    if existed {
        Err(StorageError::link_exists(short_code))
    } else {
        Ok(short_code)
    }
}

/// Applies single-save semantics to every record, in order, with no user.
///
/// A conflict still yields the code; the first hard failure stops the batch
/// and returns what was accumulated.
pub(crate) async fn save_each<F, Fut>(
    records: &[BatchInput],
    mut save: F,
) -> Result<Vec<BatchOutput>, BatchError>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<String, StorageError>>,
{
    let mut output = Vec::with_capacity(records.len());

    for record in records {
        let short_url = match save(record.original_url.clone()).await {
            Ok(code) => code,
            Err(StorageError::LinkAlreadyExists { short_code }) => short_code,
            Err(err) => return Err(BatchError::new(err, output)),
        };

        output.push(BatchOutput {
            correlation_id: record.correlation_id.clone(),
            short_url,
        });
    }

    Ok(output)
}
