// SPDX-License-Identifier: MIT

//! The `network` module defines the [`TemplateHost`] capability used to probe & fetch remote
//! gitignore templates, with its HTTP implementation over `raw.githubusercontent.com`.

use reqwest::blocking::Client;
use reqwest::StatusCode;

lazy_static! {
    /// Shared blocking HTTP client; transport defaults only, no explicit timeout.
    static ref HTTP_CLIENT: Client = Client::builder()
        .user_agent(concat!("ignoreit/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| Client::new());
}

/// Capability to check for & fetch the contents of remote gitignore templates.
///
/// Network failures never escape this boundary: implementations degrade to "absent"/"empty" &
/// surface diagnostics through the logger.
pub trait TemplateHost {
    /// Returns `true` iff `url` points to a hosted gitignore template.
    fn exists(&self, url: &str) -> bool;

    /// Returns the contents of the template at `url`, or an empty string on any failure.
    fn contents(&self, url: &str) -> String;
}

/// [`TemplateHost`] implementation issuing HEAD & GET requests against the raw-content host.
#[derive(Debug, Default)]
pub struct RawGitHubHost;

impl TemplateHost for RawGitHubHost {
    /// Checks if the input url points to a valid hosted gitignore template.
    ///
    /// An HTTP request with method HEAD expects to return 200 OK in the response; any other
    /// response is interpreted to mean that the template does not exist.
    fn exists(&self, url: &str) -> bool {
        match HTTP_CLIENT.head(url).send() {
            Ok(response) => response.status() == StatusCode::OK,
            Err(err) => {
                error!("HEAD request for {} failed: {}", url, err);
                false
            }
        }
    }

    /// Gets the contents of the gitignore template pointed to by the input url.
    ///
    /// If the response is not 200 OK, an empty string is returned instead.
    fn contents(&self, url: &str) -> String {
        let response = match HTTP_CLIENT.get(url).send() {
            Ok(response) => response,
            Err(err) => {
                error!("GET request for {} failed: {}", url, err);
                return "".to_owned();
            }
        };

        if response.status() != StatusCode::OK {
            return "".to_owned();
        }

        response.text().unwrap_or_else(|err| {
            error!("Failed to read response body for {}: {}", url, err);
            "".to_owned()
        })
    }
}

#[cfg(test)]
pub mod testing {
    //! Deterministic [`TemplateHost`](super::TemplateHost) substitute for unit tests.

    use super::TemplateHost;

    use std::collections::HashMap;

    /// In-memory template host mapping full download URLs to template contents.
    #[derive(Debug, Default)]
    pub struct StaticHost {
        templates: HashMap<String, String>,
    }

    impl StaticHost {
        pub fn new() -> Self {
            Self::default()
        }

        /// Registers the template at `url` with the supplied `contents`.
        pub fn insert(mut self, url: &str, contents: &str) -> Self {
            self.templates.insert(url.to_owned(), contents.to_owned());
            self
        }
    }

    impl TemplateHost for StaticHost {
        fn exists(&self, url: &str) -> bool {
            self.templates.contains_key(url)
        }

        fn contents(&self, url: &str) -> String {
            self.templates.get(url).cloned().unwrap_or_default()
        }
    }
}
