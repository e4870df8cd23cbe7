//! Listing Query
//!
//! Wire form of the listing parameters. Client-side names differ from the
//! query-string names; absent values are left out so the server applies its
//! own defaults.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Query string of `GET /api/projects`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(rename = "sort_by", skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(rename = "sort_dir", skip_serializing_if = "Option::is_none")]
    pub sort_dir: Option<SortDirection>,
}
