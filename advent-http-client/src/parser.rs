//! HTML response parsing for adventofcode.com pages

use crate::{SubmissionResult, error::ClientError};
use regex::Regex;
use scraper::{Html, Selector};
use std::sync::OnceLock;
use std::time::Duration;

/// Parser for AoC HTML responses with lazily compiled patterns and selectors
#[derive(Clone, Debug)]
pub(crate) struct ResponseParser {
    user_id_regex: OnceLock<Regex>,
    throttle_regex: OnceLock<Regex>,
    main_selector: OnceLock<Selector>,
}

impl ResponseParser {
    pub fn new() -> Self {
        Self {
            user_id_regex: OnceLock::new(),
            throttle_regex: OnceLock::new(),
            main_selector: OnceLock::new(),
        }
    }

    fn user_id_regex(&self) -> &Regex {
        self.user_id_regex
            .get_or_init(|| Regex::new(r"\(anonymous user #(\d+)\)").unwrap())
    }

    fn throttle_regex(&self) -> &Regex {
        self.throttle_regex
            .get_or_init(|| Regex::new(r"You have (.+?) left to wait\.").unwrap())
    }

    fn main_selector(&self) -> &Selector {
        self.main_selector
            .get_or_init(|| Selector::parse("main").unwrap())
    }

    /// Extract the user ID from the settings page HTML
    pub fn extract_user_id(&self, html: &str) -> Option<u64> {
        let captures = self.user_id_regex().captures(html)?;
        captures.get(1)?.as_str().parse::<u64>().ok()
    }

    /// Extract the text content of the `<main>` element
    pub fn extract_main_text(&self, html: &str) -> Result<String, ClientError> {
        let document = Html::parse_document(html);

        let main_element = document
            .select(self.main_selector())
            .next()
            .ok_or(ClientError::HtmlParse)?;

        Ok(main_element.text().collect::<String>())
    }

    /// Extract the throttle wait time from response text
    fn extract_throttle_duration(&self, text: &str) -> Option<Duration> {
        let captures = self.throttle_regex().captures(text)?;
        humantime::parse_duration(captures.get(1)?.as_str()).ok()
    }

    /// Classify an answer-submission response page
    pub fn parse_submission_response(&self, html: &str) -> Result<SubmissionResult, ClientError> {
        let text = self.extract_main_text(html)?;

        if text.contains("not the right answer") {
            return Ok(SubmissionResult::Incorrect);
        }

        if text.contains("already complete it") {
            return Ok(SubmissionResult::AlreadyCompleted);
        }

        if text.contains("gave an answer too recently") {
            let wait_time = self.extract_throttle_duration(&text);
            return Ok(SubmissionResult::Throttled { wait_time });
        }

        // None of the failure markers matched, so the answer was accepted
        Ok(SubmissionResult::Correct)
    }
}

impl Default for ResponseParser {
    fn default() -> Self {
        Self::new()
    }
}
