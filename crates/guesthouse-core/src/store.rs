//! In-memory booking store (for development/testing)

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::booking::BookingRequest;
use crate::error::Result;
use crate::provider::BookingStore;

/// Keeps bookings in a vector; keys are sequential
#[derive(Default)]
pub struct MemoryBookingStore {
    records: RwLock<Vec<(String, BookingRequest)>>,
}

impl MemoryBookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything pushed so far, oldest first
    pub fn records(&self) -> Vec<(String, BookingRequest)> {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl BookingStore for MemoryBookingStore {
    async fn push(&self, request: &BookingRequest) -> Result<String> {
        let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);
        let key = format!("booking-{:05}", records.len() + 1);
        records.push((key.clone(), request.clone()));
        Ok(key)
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::BookingForm;

    #[tokio::test]
    async fn test_memory_store_assigns_distinct_keys() {
        let store = MemoryBookingStore::new();
        let request = BookingForm {
            name: "Test".into(),
            email: "test@test.com".into(),
            phone: "123".into(),
            guests: "1".into(),
            check_in: "2025-12-01".into(),
            check_out: "2025-12-02".into(),
            message: String::new(),
        }
        .validate()
        .unwrap();

        let first = store.push(&request).await.unwrap();
        let second = store.push(&request).await.unwrap();

        assert_ne!(first, second);
        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[0].0, first);
    }
}
