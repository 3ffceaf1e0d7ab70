//! Shorten and stats operations bound to a host page.

use std::sync::Arc;

use tracing::{info, warn};
use validator::{Validate, ValidationErrors};

use crate::api::dto::{ShortenRequest, StatsRequest, StatsResponse};
use crate::domain::{ElementId, Page, ShortenerApi};
use crate::error::ClientError;

/// Runs the two page operations against a shortener service.
///
/// Each operation reads one input field, makes exactly one call and, only on
/// success, writes one display element. On any error the page is left as it was.
pub struct ShortenerService<A: ShortenerApi> {
    api: Arc<A>,
}

impl<A: ShortenerApi> Clone for ShortenerService<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
        }
    }
}

impl<A: ShortenerApi> ShortenerService<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Shortens the URL in [`ElementId::LongUrl`] and shows the result in
    /// [`ElementId::ShortResult`] as `Short URL: <short_url>`.
    ///
    /// Returns the text that was written.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingField`] or [`ClientError::Validation`] before
    /// any request is made, otherwise whatever the service call returned.
    pub async fn shorten(&self, page: &dyn Page) -> Result<String, ClientError> {
        let long_url = read_field(page, ElementId::LongUrl)?;

        let request = ShortenRequest::new(long_url);
        request
            .validate()
            .map_err(|e| validation_error(ElementId::LongUrl, &e))?;

        let response = self.api.shorten(&request).await.inspect_err(|e| {
            warn!(long_url = %request.long_url, error = %e, "Shorten failed");
        })?;

        let text = response.render();
        page.write_text(ElementId::ShortResult, &text);
        info!(long_url = %request.long_url, short_url = %response.short_url, "URL shortened");

        Ok(text)
    }

    /// Looks up statistics for the code in [`ElementId::ShortCode`] and shows
    /// the pretty-printed JSON in [`ElementId::StatsResult`].
    ///
    /// Returns the text that was written.
    ///
    /// # Errors
    ///
    /// Same as [`ShortenerService::shorten`].
    pub async fn stats(&self, page: &dyn Page) -> Result<String, ClientError> {
        self.stats_response(page)
            .await
            .map(|response| response.render())
    }

    /// Same as [`ShortenerService::stats`], but returns the service's document
    /// for callers that need more than the displayed text.
    ///
    /// # Errors
    ///
    /// Same as [`ShortenerService::shorten`].
    pub async fn stats_response(&self, page: &dyn Page) -> Result<StatsResponse, ClientError> {
        let code = read_field(page, ElementId::ShortCode)?;

        let request = StatsRequest::new(code);
        request
            .validate()
            .map_err(|e| validation_error(ElementId::ShortCode, &e))?;

        let response = self.api.stats(&request.code).await.inspect_err(|e| {
            warn!(code = %request.code, error = %e, "Stats lookup failed");
        })?;

        page.write_text(ElementId::StatsResult, &response.render());
        info!(code = %request.code, "Stats retrieved");

        Ok(response)
    }
}

fn read_field(page: &dyn Page, id: ElementId) -> Result<String, ClientError> {
    page.read_field(id).ok_or(ClientError::MissingField(id))
}

fn validation_error(field: ElementId, errors: &ValidationErrors) -> ClientError {
    let message = errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| errors.to_string());

    ClientError::validation(field, message)
}
