//! Built-in demo data, the last link of the loader chain.

use async_trait::async_trait;

use super::{Backend, BackendError, DataSource};
use crate::codec;
use crate::item::demo_items;

pub struct DemoBackend;

#[async_trait]
impl Backend for DemoBackend {
    fn source(&self) -> DataSource {
        DataSource::Demo
    }

    async fn load(&self) -> Result<Option<String>, BackendError> {
        codec::encode(&demo_items())
            .map(Some)
            .map_err(|e| BackendError::Parse(e.to_string()))
    }

    async fn save(&self, _text: &str) -> Result<bool, BackendError> {
        Err(BackendError::Unsupported("demo data is read-only".to_string()))
    }
}
