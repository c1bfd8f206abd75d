// File: src/page.rs
// Purpose: Convenience result constructors for page handlers

use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Argument violations raised by the result constructors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageError {
    #[error("redirect url must not be empty")]
    EmptyRedirectUrl,
    #[error("url `{0}` is not local to this application")]
    NonLocalUrl(String),
}

fn insert_header(headers: &mut HeaderMap, key: header::HeaderName, value: &str) {
    if let Ok(val) = HeaderValue::from_str(value) {
        headers.insert(key, val);
    }
}

/// A URL is local when it points inside this application: a single
/// leading `/` that is not followed by another `/` or a `\`.
fn is_local_url(url: &str) -> bool {
    url.starts_with('/') && !url.starts_with("//") && !url.starts_with("/\\")
}

// ============================================================================
// RedirectResult
// ============================================================================

/// Redirect to a URL, with the usual four status variants:
/// 302 Found, 301 Moved Permanently, and the method-preserving
/// 307 / 308 counterparts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectResult {
    url: String,
    permanent: bool,
    preserve_method: bool,
}

impl RedirectResult {
    pub fn new(
        url: impl Into<String>,
        permanent: bool,
        preserve_method: bool,
    ) -> Result<Self, PageError> {
        let url = url.into();
        if url.is_empty() {
            return Err(PageError::EmptyRedirectUrl);
        }
        Ok(Self {
            url,
            permanent,
            preserve_method,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn permanent(&self) -> bool {
        self.permanent
    }

    pub fn preserve_method(&self) -> bool {
        self.preserve_method
    }

    pub fn status(&self) -> StatusCode {
        match (self.permanent, self.preserve_method) {
            (false, false) => StatusCode::FOUND,
            (true, false) => StatusCode::MOVED_PERMANENTLY,
            (false, true) => StatusCode::TEMPORARY_REDIRECT,
            (true, true) => StatusCode::PERMANENT_REDIRECT,
        }
    }
}

impl IntoResponse for RedirectResult {
    fn into_response(self) -> Response {
        let mut headers = HeaderMap::new();
        insert_header(&mut headers, header::LOCATION, &self.url);
        (self.status(), headers).into_response()
    }
}

// ============================================================================
// LocalRedirectResult
// ============================================================================

/// Redirect that only accepts application-local URLs, rejecting
/// protocol-relative (`//host`) and backslash-escaped (`/\host`)
/// targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalRedirectResult(RedirectResult);

impl LocalRedirectResult {
    pub fn new(
        url: impl Into<String>,
        permanent: bool,
        preserve_method: bool,
    ) -> Result<Self, PageError> {
        let url = url.into();
        if url.is_empty() {
            return Err(PageError::EmptyRedirectUrl);
        }
        if !is_local_url(&url) {
            return Err(PageError::NonLocalUrl(url));
        }
        Ok(Self(RedirectResult {
            url,
            permanent,
            preserve_method,
        }))
    }

    pub fn url(&self) -> &str {
        self.0.url()
    }

    pub fn permanent(&self) -> bool {
        self.0.permanent()
    }

    pub fn preserve_method(&self) -> bool {
        self.0.preserve_method()
    }

    pub fn status(&self) -> StatusCode {
        self.0.status()
    }
}

impl IntoResponse for LocalRedirectResult {
    fn into_response(self) -> Response {
        self.0.into_response()
    }
}

// ============================================================================
// ContentResult
// ============================================================================

/// Plain body with an explicit content type. Defaults to
/// `text/plain; charset=utf-8`; anything beyond the caller-supplied
/// content type (negotiation, re-encoding) is the host framework's
/// business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentResult {
    body: String,
    content_type: String,
}

impl ContentResult {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            content_type: "text/plain; charset=utf-8".to_string(),
        }
    }

    /// Override the content type (may carry a charset parameter).
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

impl IntoResponse for ContentResult {
    fn into_response(self) -> Response {
        let mut headers = HeaderMap::new();
        insert_header(&mut headers, header::CONTENT_TYPE, &self.content_type);
        (StatusCode::OK, headers, self.body).into_response()
    }
}

// ============================================================================
// FileContentResult
// ============================================================================

/// In-memory file body. With a download name set, the response carries
/// a `Content-Disposition: attachment` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContentResult {
    bytes: Vec<u8>,
    content_type: String,
    download_name: Option<String>,
}

impl FileContentResult {
    pub fn new(bytes: Vec<u8>, content_type: impl Into<String>) -> Self {
        Self {
            bytes,
            content_type: content_type.into(),
            download_name: None,
        }
    }

    /// Serve as an attachment with the given file name.
    pub fn download_name(mut self, name: impl Into<String>) -> Self {
        self.download_name = Some(name.into());
        self
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl IntoResponse for FileContentResult {
    fn into_response(self) -> Response {
        let mut headers = HeaderMap::new();
        insert_header(&mut headers, header::CONTENT_TYPE, &self.content_type);
        if let Some(name) = &self.download_name {
            let disposition = format!("attachment; filename=\"{}\"", name.replace('"', ""));
            insert_header(&mut headers, header::CONTENT_DISPOSITION, &disposition);
        }
        (StatusCode::OK, headers, self.bytes).into_response()
    }
}

// ============================================================================
// StatusCodeResult
// ============================================================================

/// Bare status code, no body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCodeResult(pub StatusCode);

impl IntoResponse for StatusCodeResult {
    fn into_response(self) -> Response {
        self.0.into_response()
    }
}

// ============================================================================
// Page
// ============================================================================

/// Base abstraction for page handlers: convenience constructors for
/// the common HTTP results.
///
/// ```
/// use pagekit::page::Page;
///
/// struct EditPage;
/// impl Page for EditPage {}
///
/// let page = EditPage;
/// let redirect = page.redirect("/Customers").unwrap();
/// assert_eq!(redirect.url(), "/Customers");
/// ```
pub trait Page {
    /// 302 Found.
    fn redirect(&self, url: impl Into<String>) -> Result<RedirectResult, PageError> {
        RedirectResult::new(url, false, false)
    }

    /// 301 Moved Permanently.
    fn redirect_permanent(&self, url: impl Into<String>) -> Result<RedirectResult, PageError> {
        RedirectResult::new(url, true, false)
    }

    /// 307 Temporary Redirect.
    fn redirect_preserve_method(
        &self,
        url: impl Into<String>,
    ) -> Result<RedirectResult, PageError> {
        RedirectResult::new(url, false, true)
    }

    /// 308 Permanent Redirect.
    fn redirect_permanent_preserve_method(
        &self,
        url: impl Into<String>,
    ) -> Result<RedirectResult, PageError> {
        RedirectResult::new(url, true, true)
    }

    /// 302 Found, local URLs only.
    fn local_redirect(&self, url: impl Into<String>) -> Result<LocalRedirectResult, PageError> {
        LocalRedirectResult::new(url, false, false)
    }

    /// 301 Moved Permanently, local URLs only.
    fn local_redirect_permanent(
        &self,
        url: impl Into<String>,
    ) -> Result<LocalRedirectResult, PageError> {
        LocalRedirectResult::new(url, true, false)
    }

    /// 307 Temporary Redirect, local URLs only.
    fn local_redirect_preserve_method(
        &self,
        url: impl Into<String>,
    ) -> Result<LocalRedirectResult, PageError> {
        LocalRedirectResult::new(url, false, true)
    }

    /// 308 Permanent Redirect, local URLs only.
    fn local_redirect_permanent_preserve_method(
        &self,
        url: impl Into<String>,
    ) -> Result<LocalRedirectResult, PageError> {
        LocalRedirectResult::new(url, true, true)
    }

    /// 200 OK with a `text/plain; charset=utf-8` body.
    fn content(&self, body: impl Into<String>) -> ContentResult {
        ContentResult::new(body)
    }

    /// 200 OK with an explicit content type.
    fn content_with_type(
        &self,
        body: impl Into<String>,
        content_type: impl Into<String>,
    ) -> ContentResult {
        ContentResult::new(body).content_type(content_type)
    }

    /// 200 OK with a binary body.
    fn file(&self, bytes: Vec<u8>, content_type: impl Into<String>) -> FileContentResult {
        FileContentResult::new(bytes, content_type)
    }

    /// 200 OK with a binary body served as a named attachment.
    fn file_with_name(
        &self,
        bytes: Vec<u8>,
        content_type: impl Into<String>,
        download_name: impl Into<String>,
    ) -> FileContentResult {
        FileContentResult::new(bytes, content_type).download_name(download_name)
    }

    /// Arbitrary status code, no body.
    fn status_code(&self, status: StatusCode) -> StatusCodeResult {
        StatusCodeResult(status)
    }

    /// 404 Not Found.
    fn not_found(&self) -> StatusCodeResult {
        StatusCodeResult(StatusCode::NOT_FOUND)
    }

    /// 400 Bad Request.
    fn bad_request(&self) -> StatusCodeResult {
        StatusCodeResult(StatusCode::BAD_REQUEST)
    }

    /// 401 Unauthorized.
    fn unauthorized(&self) -> StatusCodeResult {
        StatusCodeResult(StatusCode::UNAUTHORIZED)
    }
}
