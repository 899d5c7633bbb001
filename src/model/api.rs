use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};

/// The response when an error occurs with an API request
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Pagination metadata attached to enveloped list responses, page numbers are 1-based
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    /// Current page
    pub page: u32,
    /// Items per page
    pub limit: u32,
    /// Total items across all pages
    pub total: u32,
    /// Total pages
    pub pages: u32,
}

/// Body returned by the backend, either wrapped in `{ success, data, pagination }` or bare.
///
/// The shape is resolved once when the body is decoded, callers only ever see `T`. An object
/// is only treated as an envelope when it carries both `success` and `data`, bare records
/// never do.
#[derive(Debug)]
pub enum ApiResponse<T> {
    Envelope {
        success: bool,
        data: T,
        pagination: Option<PaginationMeta>,
    },
    Bare(T),
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Decodes a response body
    ///
    /// The shape is picked from the keys of the body before `T` is decoded, so a record that
    /// doesn't match `T` fails with the error of that record rather than of the shape.
    pub fn from_value(body: Value) -> Result<Self, serde_json::Error> {
        match body {
            Value::Object(map) if map.contains_key("success") && map.contains_key("data") => {
                Self::from_envelope(map)
            }
            body => Ok(Self::Bare(serde_json::from_value(body)?)),
        }
    }

    fn from_envelope(mut map: Map<String, Value>) -> Result<Self, serde_json::Error> {
        let success = serde_json::from_value(map.remove("success").unwrap_or(Value::Null))?;
        let data = serde_json::from_value(map.remove("data").unwrap_or(Value::Null))?;
        let pagination = match map.remove("pagination") {
            Some(pagination) => serde_json::from_value(pagination)?,
            None => None,
        };

        Ok(Self::Envelope {
            success,
            data,
            pagination,
        })
    }
}

impl<T> ApiResponse<T> {
    /// Unwraps `data` from an envelope, or returns the bare body
    pub fn into_data(self) -> T {
        match self {
            Self::Envelope { data, .. } => data,
            Self::Bare(data) => data,
        }
    }

    /// Splits the response into its data and pagination metadata, if any
    pub fn into_parts(self) -> (T, Option<PaginationMeta>) {
        match self {
            Self::Envelope {
                data, pagination, ..
            } => (data, pagination),
            Self::Bare(data) => (data, None),
        }
    }

    /// `success` flag of an envelope, bare bodies only arrive on success
    pub fn is_success(&self) -> bool {
        match self {
            Self::Envelope { success, .. } => *success,
            Self::Bare(_) => true,
        }
    }
}

/// One page of a paginated collection
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub pagination: Option<PaginationMeta>,
}

impl<T> From<ApiResponse<Vec<T>>> for Page<T> {
    fn from(response: ApiResponse<Vec<T>>) -> Self {
        let (data, pagination) = response.into_parts();

        Self { data, pagination }
    }
}
