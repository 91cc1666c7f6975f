//! Pagination extractor for list endpoints.
//!
//! A list handler takes [`Paginate`] as an argument, asks its service for the
//! page described by [`Paginate::request`], and hands the result back to
//! [`Paginate::respond`], which renders:
//!
//! ```json
//! {
//!   "items": [...],
//!   "meta": {
//!     "next": "http://host/api/v1/questions?page=3&per_page=10",
//!     "page": 2,
//!     "pages": 5,
//!     "previous": "http://host/api/v1/questions?page=1&per_page=10",
//!     "per_page": 10,
//!     "total": 42,
//!     "first": "http://host/api/v1/questions?page=1&per_page=10",
//!     "last": "http://host/api/v1/questions?page=5&per_page=10"
//!   }
//! }
//! ```

use axum::{
    extract::{FromRequestParts, OriginalUri},
    http::{HeaderValue, header, request::Parts},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use url::Url;

use crate::api::dto::pagination::{
    PaginatedResponse, PaginationMeta, PaginationParams, passthrough_args,
};
use crate::domain::page::{Page, PageRequest};
use crate::error::AppError;
use crate::state::AppState;

/// The validated page request of the current call plus what is needed to link
/// back to the same route.
#[derive(Debug, Clone)]
pub struct Paginate {
    pub request: PageRequest,
    /// Absolute URL of the current route, without query.
    base: Url,
    /// Non-pagination query arguments, in request order.
    args: Vec<(String, String)>,
    pretty: bool,
}

impl Paginate {
    /// Builds the extractor from its parts. Exposed for handlers that are not
    /// mounted behind the HTTP stack.
    pub fn new(
        request: PageRequest,
        base: Url,
        args: Vec<(String, String)>,
        pretty: bool,
    ) -> Self {
        Self {
            request,
            base,
            args,
            pretty,
        }
    }

    /// Value of a carried-over query argument.
    pub fn arg(&self, key: &str) -> Option<&str> {
        self.args
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Link to `page` of the current route, keeping page size and other args.
    pub fn link(&self, page: i64) -> String {
        let mut url = self.base.clone();
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("page", &page.to_string())
                .append_pair("per_page", &self.request.per_page.to_string());
            for (k, v) in &self.args {
                query.append_pair(k, v);
            }
        }
        url.into()
    }

    /// Builds the pagination metadata for `page`.
    pub fn meta<T>(&self, page: &Page<T>) -> PaginationMeta {
        let pages = page.pages();

        PaginationMeta {
            next: page.next_num().map(|n| self.link(n)),
            page: page.page,
            pages,
            previous: page.prev_num().map(|n| self.link(n)),
            per_page: page.per_page,
            total: page.total,
            first: self.link(1),
            last: self.link(pages),
        }
    }

    /// Renders `page` as the paginated JSON envelope.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an empty page other than the first.
    pub fn respond<T: Serialize>(&self, page: Page<T>) -> Result<Response, AppError> {
        let page = page.ensure_exists()?;
        let meta = self.meta(&page);

        let body = PaginatedResponse {
            items: page.items,
            meta,
        };

        let bytes = if self.pretty {
            serde_json::to_vec_pretty(&body)
        } else {
            serde_json::to_vec(&body)
        }
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to serialize page");
            AppError::internal("Failed to serialize response", json!({}))
        })?;

        Ok((
            [(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            )],
            bytes,
        )
            .into_response())
    }
}

/// Absolute URL of the request without its query string.
///
/// The host comes from `server_name` when configured, otherwise from the
/// `Host` header.
fn base_url(parts: &Parts, scheme: &str, server_name: Option<&str>) -> Result<Url, AppError> {
    let path = parts
        .extensions
        .get::<OriginalUri>()
        .map(|OriginalUri(uri)| uri.path().to_string())
        .unwrap_or_else(|| parts.uri.path().to_string());

    let host = match server_name {
        Some(name) => name.to_string(),
        None => parts
            .headers
            .get(header::HOST)
            .and_then(|h| h.to_str().ok())
            .map(str::to_string)
            .or_else(|| parts.uri.authority().map(|a| a.to_string()))
            .unwrap_or_else(|| "localhost".to_string()),
    };

    let mut url = Url::parse(&format!("{}://{}", scheme, host))
        .map_err(|_| AppError::bad_request("Invalid Host header", json!({ "host": host })))?;
    url.set_path(&path);
    Ok(url)
}

fn query_pairs(parts: &Parts) -> Vec<(String, String)> {
    parts
        .uri
        .query()
        .map(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .into_owned()
                .collect()
        })
        .unwrap_or_default()
}

impl FromRequestParts<AppState> for Paginate {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let pairs = query_pairs(parts);
        let params = PaginationParams::from_pairs(&pairs);
        let request = PageRequest::new(params.page, params.per_page)?;

        let config = &state.config;
        let base = base_url(
            parts,
            &config.preferred_url_scheme,
            config.server_name.as_deref(),
        )?;

        Ok(Paginate::new(
            request,
            base,
            passthrough_args(&pairs),
            config.json_pretty_print,
        ))
    }
}
