//! HTTP client for adventofcode.com
//!
//! Blocking client covering the three interactions a solver harness needs:
//! session validation, puzzle input fetching, and answer submission. TLS goes
//! through rustls and the session cookie is zeroized after use.
//!
//! There is deliberately no retry or backoff logic here; throttle handling is
//! the caller's concern.
//!
//! # Example
//!
//! ```no_run
//! use advent_http_client::{AdventClient, SubmissionResult};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AdventClient::new()?;
//! let session = "your_session_cookie";
//!
//! if let Some(user_id) = client.verify_session(session)?.user_id {
//!     println!("Session is valid! User ID: {}", user_id);
//! }
//!
//! let input = client.get_input(2015, 7, session)?;
//!
//! match client.submit_answer(2015, 7, 1, "46065", session)? {
//!     SubmissionResult::Correct => println!("Correct!"),
//!     SubmissionResult::Incorrect => println!("Incorrect"),
//!     SubmissionResult::AlreadyCompleted => println!("Already done"),
//!     SubmissionResult::Throttled { wait_time } => println!("Throttled: {:?}", wait_time),
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod parser;

pub use client::{AdventClient, AdventClientBuilder, SessionInfo, SubmissionResult};
pub use error::ClientError;
