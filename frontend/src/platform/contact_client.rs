use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use serde::Serialize;

use crate::config;
use crate::error::ContactError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactRequest {
    pub email: String,
}

impl ContactRequest {
    /// Only presence is checked; the browser's `type="email"` input does the
    /// rest.
    pub fn new(email: &str) -> Result<Self, ContactError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(ContactError::EmptyEmail);
        }
        Ok(Self {
            email: email.to_string(),
        })
    }
}

pub type DeliveryFuture = Pin<Box<dyn Future<Output = Result<(), ContactError>>>>;

/// Something that can deliver a contact request, e.g. a mail or CRM API.
pub trait ContactClient {
    fn send(&self, request: ContactRequest) -> DeliveryFuture;
}

/// Pretends to deliver after a fixed round trip. Always succeeds.
pub struct MockContactClient {
    pub round_trip_ms: u32,
}

impl ContactClient for MockContactClient {
    fn send(&self, request: ContactRequest) -> DeliveryFuture {
        let round_trip_ms = self.round_trip_ms;
        Box::pin(async move {
            let body = serde_json::to_string(&request)
                .map_err(|e| ContactError::Delivery(e.to_string()))?;
            log::debug!("mock contact delivery: {}", body);
            TimeoutFuture::new(round_trip_ms).await;
            Ok(())
        })
    }
}

#[derive(Clone)]
pub struct ContactClientHandle(pub Rc<dyn ContactClient>);

impl PartialEq for ContactClientHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for ContactClientHandle {
    fn default() -> Self {
        Self(Rc::new(MockContactClient {
            round_trip_ms: config::animation().contact_round_trip_ms,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_requires_non_blank_email() {
        assert_eq!(ContactRequest::new(""), Err(ContactError::EmptyEmail));
        assert_eq!(ContactRequest::new("  \t"), Err(ContactError::EmptyEmail));
    }

    #[test]
    fn request_trims_and_serializes() {
        let request = ContactRequest::new("  me@example.com ").unwrap();
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"email":"me@example.com"}"#
        );
    }
}
