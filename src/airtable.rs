//! Airtable REST client: paginated listing and attachment download.
//!
//! Listing follows Airtable's cursor protocol: each page response may carry
//! an opaque `offset` token, echoed back verbatim to request the next page.
//! A response without a token is the last page. Attachment URLs come
//! pre-signed, so attachment requests carry no auth header.

use reqwest::blocking::Client;

use crate::config::{SyncConfig, FIELD_DATE_UPDATED};
use crate::error::{Result, SyncError};
use crate::models::{RecordPage, SourceRow};

/// Blocking HTTP client bound to one Airtable base and table.
pub struct AirtableClient {
    http: Client,
    list_url: String,
    token: String,
    page_size: u32,
}

impl AirtableClient {
    /// Build a client from the sync configuration.
    pub fn new(config: &SyncConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        let list_url = format!(
            "{}/{}/{}",
            config.api_url.trim_end_matches('/'),
            urlencoding::encode(&config.base),
            urlencoding::encode(&config.table),
        );
        Ok(Self {
            http,
            list_url,
            token: config.token.clone(),
            page_size: config.page_size,
        })
    }

    /// Fetch one page of rows from the table.
    ///
    /// The first request (no offset) asks for rows sorted by "Date Updated"
    /// descending. Follow-up requests send only the page size and the
    /// cursor; the sort is already baked into the cursor.
    pub fn fetch_page(&self, offset: Option<&str>) -> Result<RecordPage> {
        let mut query: Vec<(&str, String)> = vec![("pageSize", self.page_size.to_string())];
        match offset {
            Some(cursor) => query.push(("offset", cursor.to_string())),
            None => {
                query.push(("sort[0][field]", FIELD_DATE_UPDATED.to_string()));
                query.push(("sort[0][direction]", "desc".to_string()));
            }
        }

        let resp = self
            .http
            .get(&self.list_url)
            .bearer_auth(&self.token)
            .query(&query)
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(SyncError::SourceFetch { status, body });
        }
        Ok(resp.json()?)
    }

    /// Iterate over the table page by page.
    pub fn pages(&self) -> Pages<'_> {
        Pages {
            client: self,
            state: PageState::First,
        }
    }

    /// Fetch every row of the table, newest first.
    pub fn list_all(&self) -> Result<Vec<SourceRow>> {
        let mut rows = Vec::new();
        for page in self.pages() {
            rows.extend(page?);
        }
        Ok(rows)
    }

    /// Download an attachment body as text.
    pub fn fetch_attachment(&self, url: &str) -> Result<String> {
        let resp = self.http.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(SyncError::AttachmentFetch {
                status,
                url: url.to_string(),
            });
        }
        Ok(resp.text()?)
    }
}

enum PageState {
    First,
    Next(String),
    Done,
}

/// Iterator over listing pages, yielding each page's rows in order.
///
/// The iterator is fused: after the last page or an error it keeps
/// returning `None`.
pub struct Pages<'a> {
    client: &'a AirtableClient,
    state: PageState,
}

impl Iterator for Pages<'_> {
    type Item = Result<Vec<SourceRow>>;

    fn next(&mut self) -> Option<Self::Item> {
        let offset = match &self.state {
            PageState::First => None,
            PageState::Next(cursor) => Some(cursor.clone()),
            PageState::Done => return None,
        };
        match self.client.fetch_page(offset.as_deref()) {
            Ok(page) => {
                self.state = match page.offset {
                    Some(cursor) => PageState::Next(cursor),
                    None => PageState::Done,
                };
                Some(Ok(page.records))
            }
            Err(e) => {
                self.state = PageState::Done;
                Some(Err(e))
            }
        }
    }
}
