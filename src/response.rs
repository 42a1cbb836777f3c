use serde::Serialize;
use utoipa::ToSchema;

use crate::services::pagination::Page;

/// Paging details echoed next to a listing. Single-record responses leave every field empty.
#[derive(Debug, Serialize, ToSchema, Clone, Default, PartialEq, Eq)]
pub struct Meta {
    pub page: Option<u64>,
    #[serde(rename = "recordPerPage")]
    pub record_per_page: Option<u64>,
    pub total_count: Option<i64>,
}

impl Meta {
    pub fn for_page<T>(page: &Page<T>) -> Self {
        Self {
            page: Some(page.window.page),
            record_per_page: Some(page.window.page_size),
            total_count: Some(page.total_count),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

/// Envelope of every JSON body the service writes, errors included.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T, meta: Option<Meta>) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
            meta,
        }
    }
}

impl ApiResponse<()> {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
            meta: None,
        }
    }
}
