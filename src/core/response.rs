//! Success response envelope

use serde::Serialize;

/// Success body: every payload is wrapped as `{data: ...}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

impl<T> DataEnvelope<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
