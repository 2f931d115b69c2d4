//! Blocking HTTP client for adventofcode.com

use crate::error::ClientError;
use crate::parser::ResponseParser;
use reqwest::header::HeaderValue;
use std::time::Duration;
use zeroize::Zeroize;

/// Result of session verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionInfo {
    /// User ID if the session is valid, None otherwise
    pub user_id: Option<u64>,
}

/// Result of an answer submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    /// Answer was correct
    Correct,
    /// Answer was incorrect
    Incorrect,
    /// Puzzle part was already completed
    AlreadyCompleted,
    /// Submission was throttled
    Throttled {
        /// Wait time before the next submission is allowed, if the page said
        wait_time: Option<Duration>,
    },
}

/// Client for the adventofcode.com web flow.
///
/// Provides session validation, puzzle input fetching, and answer submission.
/// Redirects are never followed: a redirect from the settings page is how an
/// invalid session announces itself.
///
/// # Example
///
/// ```no_run
/// use advent_http_client::AdventClient;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = AdventClient::new()?;
/// let input = client.get_input(2015, 7, "your_session_cookie")?;
/// println!("Input length: {} bytes", input.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct AdventClient {
    client: reqwest::blocking::Client,
    base_url: reqwest::Url,
    parser: ResponseParser,
}

impl AdventClient {
    /// Create a client with the default configuration (rustls, no redirects)
    pub fn new() -> Result<Self, ClientError> {
        Self::builder().build()
    }

    /// Create a builder for configuring the client
    ///
    /// # Example
    ///
    /// ```no_run
    /// use advent_http_client::AdventClient;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = AdventClient::builder()
    ///     .base_url("http://localhost:1234")?
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn builder() -> AdventClientBuilder {
        AdventClientBuilder::new()
    }

    /// Build the session cookie header, marking it sensitive and zeroizing the
    /// scratch string afterwards
    fn create_cookie_header(session: &str) -> Result<HeaderValue, ClientError> {
        let mut cookie_string = format!("session={}", session);
        let header_value = HeaderValue::from_bytes(cookie_string.as_bytes())
            .map_err(|_| ClientError::ClientInit("Invalid session cookie format".to_string()))?;

        let mut sensitive_header = header_value;
        sensitive_header.set_sensitive(true);
        cookie_string.zeroize();

        Ok(sensitive_header)
    }

    /// Verify a session cookie and retrieve the user ID.
    ///
    /// Requests the settings page: a 2xx response means the session is valid
    /// and carries the user ID in its HTML; a redirect (3xx) or error status
    /// means the session is invalid.
    ///
    /// # Arguments
    ///
    /// * `session` - The session cookie value (without the "session=" prefix)
    pub fn verify_session(&self, session: &str) -> Result<SessionInfo, ClientError> {
        let cookie_header = Self::create_cookie_header(session)?;

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::ClientInit("Cannot modify base URL path".to_string()))?
            .clear()
            .push("settings");

        let response = self
            .client
            .get(url)
            .header("Cookie", cookie_header)
            .send()?;

        if !response.status().is_success() {
            return Ok(SessionInfo { user_id: None });
        }

        let html = response.text().map_err(|_| ClientError::Encoding)?;
        let user_id = self.parser.extract_user_id(&html);

        Ok(SessionInfo { user_id })
    }

    /// Fetch the personalized puzzle input for a year and day.
    ///
    /// # Errors
    ///
    /// * `ClientError::Request` - network error
    /// * `ClientError::InvalidStatus` - HTTP error (e.g. 404 before unlock)
    /// * `ClientError::Encoding` - response is not valid UTF-8
    pub fn get_input(&self, year: u16, day: u8, session: &str) -> Result<String, ClientError> {
        let cookie_header = Self::create_cookie_header(session)?;

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::ClientInit("Cannot modify base URL path".to_string()))?
            .clear()
            .extend(&[&year.to_string(), "day", &day.to_string(), "input"]);

        let response = self
            .client
            .get(url)
            .header("Cookie", cookie_header)
            .send()?;

        if !response.status().is_success() {
            return Err(ClientError::InvalidStatus {
                status: response.status(),
            });
        }

        response.text().map_err(|_| ClientError::Encoding)
    }

    /// Submit an answer for a puzzle part and classify the response.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use advent_http_client::{AdventClient, SubmissionResult};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = AdventClient::new()?;
    /// match client.submit_answer(2015, 7, 1, "46065", "session")? {
    ///     SubmissionResult::Correct => println!("Correct!"),
    ///     SubmissionResult::Incorrect => println!("Try again"),
    ///     SubmissionResult::AlreadyCompleted => println!("Already done"),
    ///     SubmissionResult::Throttled { wait_time } => println!("Wait: {:?}", wait_time),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn submit_answer(
        &self,
        year: u16,
        day: u8,
        part: u8,
        answer: &str,
        session: &str,
    ) -> Result<SubmissionResult, ClientError> {
        let cookie_header = Self::create_cookie_header(session)?;

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::ClientInit("Cannot modify base URL path".to_string()))?
            .clear()
            .extend(&[&year.to_string(), "day", &day.to_string(), "answer"]);

        let form = [("level", part.to_string()), ("answer", answer.to_string())];

        let response = self
            .client
            .post(url)
            .header("Cookie", cookie_header)
            .form(&form)
            .send()?;

        if !response.status().is_success() {
            return Err(ClientError::InvalidStatus {
                status: response.status(),
            });
        }

        let html = response.text().map_err(|_| ClientError::Encoding)?;
        self.parser.parse_submission_response(&html)
    }
}

/// Builder for configuring an [`AdventClient`].
///
/// Allows a custom base URL (mock servers in tests) and a custom reqwest
/// builder (timeouts, proxies). The redirect policy is always overridden to
/// `Policy::none()` because session verification depends on seeing redirects.
#[derive(Debug)]
pub struct AdventClientBuilder {
    base_url: Option<reqwest::Url>,
    client_builder: Option<reqwest::blocking::ClientBuilder>,
}

impl AdventClientBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            base_url: None,
            client_builder: None,
        }
    }

    /// Set a custom base URL, validated at builder time
    pub fn base_url(mut self, url: impl reqwest::IntoUrl) -> Result<Self, ClientError> {
        self.base_url = Some(url.into_url()?);
        Ok(self)
    }

    /// Set a custom HTTP client builder.
    ///
    /// The redirect policy of the provided builder is overridden regardless of
    /// its configuration.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use advent_http_client::AdventClient;
    /// use std::time::Duration;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = AdventClient::builder()
    ///     .client_builder(
    ///         reqwest::blocking::Client::builder()
    ///             .timeout(Duration::from_secs(30))
    ///             .use_rustls_tls(),
    ///     )
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn client_builder(mut self, builder: reqwest::blocking::ClientBuilder) -> Self {
        self.client_builder = Some(builder);
        self
    }

    /// Build the client with the configured settings
    pub fn build(self) -> Result<AdventClient, ClientError> {
        let base_url = self.base_url.unwrap_or_else(|| {
            reqwest::Url::parse("https://adventofcode.com")
                .expect("Default base URL should always be valid")
        });

        let builder = self
            .client_builder
            .unwrap_or_else(|| reqwest::blocking::Client::builder().use_rustls_tls());

        // Never follow redirects; session verification depends on it
        let client = builder
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| ClientError::ClientInit(e.to_string()))?;

        Ok(AdventClient {
            client,
            base_url,
            parser: ResponseParser::new(),
        })
    }
}

impl Default for AdventClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_base_url() {
        let client = AdventClient::builder().build().unwrap();
        assert_eq!(client.base_url.as_str(), "https://adventofcode.com/");
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(AdventClient::builder().base_url("not a valid url").is_err());
    }

    #[test]
    fn test_redirect_policy_enforcement() {
        let mut server = mockito::Server::new();

        // Home page must never be hit if redirects are disabled
        let base_mock = server
            .mock("GET", "/")
            .with_status(200)
            .with_body("<html><body>Home page</body></html>")
            .expect(0)
            .create();

        let settings_mock = server
            .mock("GET", "/settings")
            .with_status(303)
            .with_header("location", "/")
            .expect(1)
            .create();

        let client = AdventClient::builder()
            .base_url(server.url())
            .unwrap()
            .build()
            .unwrap();

        // 303 means invalid session (redirect to homepage), seen directly
        let info = client.verify_session("test_session").unwrap();
        assert!(info.user_id.is_none());

        base_mock.assert();
        settings_mock.assert();
    }

    #[test]
    fn test_verify_session_extracts_user_id() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/settings")
            .with_status(200)
            .with_body(r#"<html><body>Settings (anonymous user #123456)</body></html>"#)
            .expect(1)
            .create();

        let client = AdventClient::builder()
            .base_url(server.url())
            .unwrap()
            .build()
            .unwrap();

        let info = client.verify_session("some_session").unwrap();
        assert_eq!(info.user_id, Some(123456));
        mock.assert();
    }

    #[test]
    fn test_get_input_returns_body() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/2015/day/7/input")
            .with_status(200)
            .with_body("123 -> x\n")
            .expect(1)
            .create();

        let client = AdventClient::builder()
            .base_url(server.url())
            .unwrap()
            .build()
            .unwrap();

        let input = client.get_input(2015, 7, "session").unwrap();
        assert_eq!(input, "123 -> x\n");
        mock.assert();
    }

    #[test]
    fn test_submit_answer_posts_form() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/2015/day/7/answer")
            .match_body(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("level".into(), "2".into()),
                mockito::Matcher::UrlEncoded("answer".into(), "14134".into()),
            ]))
            .with_status(200)
            .with_body(r#"<html><body><main>That's the right answer!</main></body></html>"#)
            .expect(1)
            .create();

        let client = AdventClient::builder()
            .base_url(server.url())
            .unwrap()
            .build()
            .unwrap();

        let result = client
            .submit_answer(2015, 7, 2, "14134", "session")
            .unwrap();
        assert_eq!(result, SubmissionResult::Correct);
        mock.assert();
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10))]

        #[test]
        fn prop_base_url_configuration(
            scheme in prop::sample::select(vec!["http", "https"]),
            host in "[a-z]{3,10}",
            port in 1000u16..10000u16,
        ) {
            let base_url = format!("{}://{}:{}", scheme, host, port);
            let client = AdventClient::builder()
                .base_url(&base_url)
                .unwrap()
                .build()
                .unwrap();

            prop_assert_eq!(client.base_url.scheme(), scheme);
            prop_assert_eq!(client.base_url.host_str(), Some(host.as_str()));
            prop_assert_eq!(client.base_url.port(), Some(port));
        }

        #[test]
        fn prop_session_redirects_and_errors_are_invalid(
            session in "[a-f0-9]{32,64}",
            status_code in prop::sample::select(vec![301usize, 302, 303, 307, 308, 400, 401, 403, 404, 500, 503]),
        ) {
            let mut server = mockito::Server::new();
            let mock_builder = server.mock("GET", "/settings").with_status(status_code).expect(1);
            let mock = if (300..400).contains(&status_code) {
                mock_builder.with_header("location", "/").create()
            } else {
                mock_builder.create()
            };

            let client = AdventClient::builder()
                .base_url(server.url())
                .unwrap()
                .build()
                .unwrap();

            let info = client.verify_session(&session).unwrap();
            prop_assert!(info.user_id.is_none());
            mock.assert();
        }

        #[test]
        fn prop_input_fetch_error_status(
            year in 2015u16..2030u16,
            day in 1u8..=25u8,
            status_code in prop::sample::select(vec![400usize, 404, 429, 500, 503]),
        ) {
            let mut server = mockito::Server::new();
            let path = format!("/{}/day/{}/input", year, day);
            let mock = server
                .mock("GET", path.as_str())
                .with_status(status_code)
                .with_body("Error response")
                .expect(1)
                .create();

            let client = AdventClient::builder()
                .base_url(server.url())
                .unwrap()
                .build()
                .unwrap();

            match client.get_input(year, day, "session") {
                Err(ClientError::InvalidStatus { status }) => {
                    prop_assert_eq!(status.as_u16() as usize, status_code);
                }
                other => prop_assert!(false, "Expected InvalidStatus, got {:?}", other.map(|_| ())),
            }
            mock.assert();
        }
    }
}
