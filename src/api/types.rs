//! HTTP request/response types
//!
//! Defines abstract HTTP types used in the API layer, keeping
//! `place_order_api` independent of the web framework.

// =============================================================================
// HttpRequest
// =============================================================================

/// Abstract HTTP request type
///
/// A simple struct that holds the request body.
///
/// # Examples
///
/// ```
/// use cafe_ordering::api::HttpRequest;
///
/// let request = HttpRequest::new(r#"{"payment_method": "cash"}"#.to_string());
/// assert!(request.body().contains("payment_method"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    /// Request body
    body: String,
}

impl HttpRequest {
    /// Creates a new `HttpRequest`
    ///
    /// # Arguments
    ///
    /// * `body` - Request body
    #[must_use]
    pub const fn new(body: String) -> Self {
        Self { body }
    }

    /// Returns a reference to the request body
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}

// =============================================================================
// HttpResponse
// =============================================================================

/// Abstract HTTP response type
///
/// A struct that holds a status code and a JSON response body.
///
/// # Examples
///
/// ```
/// use cafe_ordering::api::HttpResponse;
///
/// let response = HttpResponse::new(201, r#"{"order_number": "ORD-..."}"#.to_string());
/// assert_eq!(response.status_code(), 201);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    status_code: u16,
    /// Response body
    body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`
    ///
    /// # Arguments
    ///
    /// * `status_code` - HTTP status code
    /// * `body` - Response body
    #[must_use]
    pub const fn new(status_code: u16, body: String) -> Self {
        Self { status_code, body }
    }

    /// Returns the HTTP status code
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Returns a reference to the response body
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}
