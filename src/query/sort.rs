//! Sort directive resolution
//!
//! Maps a compact `<target>_<order>` directive into a fully ordered list of
//! backend sort keys. Every resolved list ends in a fixed tie-break chain so
//! output ordering is deterministic: records equal in every category field
//! and in date still separate on score, which is the accepted final
//! tie-break for stable pagination.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::error::{Result, SquallError};

/// Sort direction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// One backend sort key
///
/// Serializes as the backend's single-key form: `{"date_modified": "desc"}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortKey {
    pub field: &'static str,
    pub order: SortOrder,
}

impl SortKey {
    fn new(field: &'static str, order: SortOrder) -> Self {
        Self { field, order }
    }
}

impl Serialize for SortKey {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.field, &self.order)?;
        map.end()
    }
}

const DATE_MODIFIED: &str = "date_modified";
const DATE_CREATED: &str = "date_created";
const NODE_NAME: &str = "sort_node_name";
const FILE_NAME: &str = "sort_file_name";
const WIKI_NAME: &str = "sort_wiki_name";
const USER_NAME: &str = "sort_user_name";
const INSTITUTION_NAME: &str = "sort_institution_name";
const SCORE: &str = "_score";

/// Category sort fields in canonical tie-break order
const CATEGORY_FIELDS: [&str; 5] = [NODE_NAME, FILE_NAME, WIKI_NAME, USER_NAME, INSTITUTION_NAME];

/// Resolve a sort directive into a deterministic list of sort keys
///
/// Recognized targets are the five category names (`project`, `file`,
/// `wiki`, `user`, `institution`, default order ascending) and the two date
/// targets (`created`, `modified`, default order descending). A category
/// target sorts its own field first, then the remaining category fields in
/// canonical order, then modification date descending, then score. A date
/// target sorts the date first, then all five category fields ascending,
/// then score.
///
/// An unrecognized target, or an order component that is present but neither
/// `asc` nor `desc`, is an error: silently defaulting would silently change
/// result ordering.
pub fn resolve_sort(directive: &str) -> Result<Vec<SortKey>> {
    let (target, order) = split_directive(directive)?;

    let primary = match target {
        "project" => Some(NODE_NAME),
        "file" => Some(FILE_NAME),
        "wiki" => Some(WIKI_NAME),
        "user" => Some(USER_NAME),
        "institution" => Some(INSTITUTION_NAME),
        _ => None,
    };

    if let Some(primary) = primary {
        let order = order.unwrap_or(SortOrder::Asc);
        let mut keys = vec![SortKey::new(primary, order)];
        keys.extend(
            CATEGORY_FIELDS
                .iter()
                .copied()
                .filter(|field| *field != primary)
                .map(|field| SortKey::new(field, order)),
        );
        keys.push(SortKey::new(DATE_MODIFIED, SortOrder::Desc));
        keys.push(SortKey::new(SCORE, SortOrder::Asc));
        return Ok(keys);
    }

    let date_field = match target {
        "created" => DATE_CREATED,
        "modified" => DATE_MODIFIED,
        _ => {
            return Err(SquallError::InvalidSortSpecification(
                directive.to_string(),
            ))
        }
    };

    let order = order.unwrap_or(SortOrder::Desc);
    let mut keys = vec![SortKey::new(date_field, order)];
    keys.extend(
        CATEGORY_FIELDS
            .iter()
            .copied()
            .map(|field| SortKey::new(field, SortOrder::Asc)),
    );
    keys.push(SortKey::new(SCORE, SortOrder::Asc));
    Ok(keys)
}

/// Split `<target>[_<order>]`; a trailing component must be a valid order
fn split_directive(directive: &str) -> Result<(&str, Option<SortOrder>)> {
    match directive.rsplit_once('_') {
        Some((target, "asc")) => Ok((target, Some(SortOrder::Asc))),
        Some((target, "desc")) => Ok((target, Some(SortOrder::Desc))),
        Some(_) => Err(SquallError::InvalidSortSpecification(
            directive.to_string(),
        )),
        None => Ok((directive, None)),
    }
}
