//! Canned response templates
//!
//! Every body the server can send is built here once at startup and
//! serialized to JSON a single time. Handlers only clone the resulting
//! `Bytes`, so repeated requests get byte-identical bodies.

use hyper::body::Bytes;
use serde::Serialize;

/// Which template a request resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    Fetch,
    Scrape,
    Execute,
    Default,
}

impl TemplateKind {
    /// Short name used in access logs
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fetch => "fetch",
            Self::Scrape => "scrape",
            Self::Execute => "execute",
            Self::Default => "default",
        }
    }
}

impl std::fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One entry of the fetch result list
#[derive(Debug, Serialize)]
pub struct NewsItem {
    pub title: &'static str,
    pub source: &'static str,
    pub url: &'static str,
    pub summary: &'static str,
}

#[derive(Debug, Serialize)]
pub struct FetchResult {
    pub results: Vec<NewsItem>,
}

#[derive(Debug, Serialize)]
pub struct ScrapeResult {
    pub content: &'static str,
    pub title: &'static str,
    pub links: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteResult {
    pub output: &'static str,
    pub exit_code: i32,
}

#[derive(Debug, Serialize)]
pub struct StatusMessage {
    pub message: &'static str,
}

pub fn fetch_result() -> FetchResult {
    FetchResult {
        results: vec![
            NewsItem {
                title: "Sample News 1",
                source: "Source 1",
                url: "https://example.com/1",
                summary: "This is a sample news summary 1",
            },
            NewsItem {
                title: "Sample News 2",
                source: "Source 2",
                url: "https://example.com/2",
                summary: "This is a sample news summary 2",
            },
        ],
    }
}

pub fn scrape_result() -> ScrapeResult {
    ScrapeResult {
        content: "This is a sample webpage content.",
        title: "Sample Webpage",
        links: vec!["https://example.com/1", "https://example.com/2"],
    }
}

pub const fn execute_result() -> ExecuteResult {
    ExecuteResult {
        output: "Command executed successfully",
        exit_code: 0,
    }
}

pub const fn status_message() -> StatusMessage {
    StatusMessage {
        message: "fetch server is running",
    }
}

/// Pre-rendered JSON bodies, one per `TemplateKind`
#[derive(Debug, Clone)]
pub struct Templates {
    fetch: Bytes,
    scrape: Bytes,
    execute: Bytes,
    default: Bytes,
}

impl Templates {
    pub fn render() -> Result<Self, serde_json::Error> {
        Ok(Self {
            fetch: Bytes::from(serde_json::to_vec(&fetch_result())?),
            scrape: Bytes::from(serde_json::to_vec(&scrape_result())?),
            execute: Bytes::from(serde_json::to_vec(&execute_result())?),
            default: Bytes::from(serde_json::to_vec(&status_message())?),
        })
    }

    pub fn body(&self, kind: TemplateKind) -> Bytes {
        match kind {
            TemplateKind::Fetch => self.fetch.clone(),
            TemplateKind::Scrape => self.scrape.clone(),
            TemplateKind::Execute => self.execute.clone(),
            TemplateKind::Default => self.default.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(kind: TemplateKind) -> String {
        let templates = Templates::render().unwrap();
        String::from_utf8(templates.body(kind).to_vec()).unwrap()
    }

    #[test]
    fn test_fetch_body_exact() {
        assert_eq!(
            rendered(TemplateKind::Fetch),
            r#"{"results":[{"title":"Sample News 1","source":"Source 1","url":"https://example.com/1","summary":"This is a sample news summary 1"},{"title":"Sample News 2","source":"Source 2","url":"https://example.com/2","summary":"This is a sample news summary 2"}]}"#
        );
    }

    #[test]
    fn test_scrape_body_exact() {
        assert_eq!(
            rendered(TemplateKind::Scrape),
            r#"{"content":"This is a sample webpage content.","title":"Sample Webpage","links":["https://example.com/1","https://example.com/2"]}"#
        );
    }

    #[test]
    fn test_execute_body_uses_camel_case() {
        assert_eq!(
            rendered(TemplateKind::Execute),
            r#"{"output":"Command executed successfully","exitCode":0}"#
        );
    }

    #[test]
    fn test_default_body_exact() {
        assert_eq!(
            rendered(TemplateKind::Default),
            r#"{"message":"fetch server is running"}"#
        );
    }

    #[test]
    fn test_body_is_shared_not_rebuilt() {
        let templates = Templates::render().unwrap();
        let a = templates.body(TemplateKind::Fetch);
        let b = templates.body(TemplateKind::Fetch);
        assert_eq!(a, b);
        assert_eq!(a.as_ptr(), b.as_ptr());
    }
}
