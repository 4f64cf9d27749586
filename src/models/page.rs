//! Paginated user listing payload.

use serde::{Deserialize, Serialize};

use super::user::UserRecord;

/// Support banner attached to every listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Support {
    pub url: String,
    pub text: String,
}

/// One page of the user listing, shaped like the Reqres response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagePayload {
    pub page: i64,
    pub per_page: u32,
    pub total: u32,
    pub total_pages: u32,
    pub data: Vec<UserRecord>,
    pub support: Support,
}

impl PagePayload {
    /// Whether the page holds no more records than `per_page` allows.
    pub fn within_page_size(&self) -> bool {
        self.data.len() <= self.per_page as usize
    }
}
