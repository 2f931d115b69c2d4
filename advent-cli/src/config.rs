//! Configuration resolution from CLI args
//!
//! The session cookie comes from the `AOC_SESSION` environment variable or an
//! interactive `rpassword` prompt, never from argv, and stays wrapped in a
//! [`Zeroizing`] string.

use crate::cli::{Args, ParallelMode};
use crate::error::CliError;
use std::path::{Path, PathBuf};
use zeroize::Zeroizing;

/// Resolved runtime configuration
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    /// Cache directory path
    pub cache_dir: PathBuf,
    /// Number of threads for parallel execution
    pub thread_count: usize,
    /// Scheduling mode
    pub parallel: ParallelMode,
    /// Whether to submit answers
    pub submit: bool,
    /// User ID for cache organization
    pub user_id: u64,
    /// Whether the user ID was explicitly provided (vs derived from session)
    pub user_id_provided: bool,
    /// Session cookie (empty when none is available yet)
    pub session: Zeroizing<String>,
    /// Whether to sleep and retry on throttled submissions
    pub auto_retry: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args, resolving the session and user ID
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let cache_dir = expand_tilde(&args.cache_dir);
        let thread_count = args.threads.unwrap_or_else(num_cpus);

        let user_id_provided = args.user_id.is_some();
        let (session, user_id) = resolve_session_and_user_id(args.user_id, args.submit)?;

        Ok(Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            cache_dir,
            thread_count,
            parallel: args.parallel,
            submit: args.submit,
            user_id,
            user_id_provided,
            session,
            auto_retry: args.auto_retry,
            quiet: args.quiet,
        })
    }
}

/// Expand a leading `~` to the home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && let Some(home) = dirs::home_dir()
    {
        if path_str == "~" {
            return home;
        }
        if let Some(rest) = path_str.strip_prefix("~/") {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}

fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Prompt for the numeric user ID shown in the profile URL
fn prompt_user_id() -> Result<u64, CliError> {
    use std::io::Write;
    println!("No user ID provided. Enter your Advent of Code user ID.");
    print!("User ID: ");
    std::io::stdout().flush().ok();

    let mut input = String::new();
    std::io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::Config(format!("failed to read user ID: {}", e)))?;

    input
        .trim()
        .parse()
        .map_err(|_| CliError::Config("invalid user ID: must be a number".to_string()))
}

/// Prompt for the session cookie without echoing it
pub fn prompt_session(reason: &str) -> Result<Zeroizing<String>, CliError> {
    println!("{}", reason);
    let s = rpassword::prompt_password("Enter session cookie: ")
        .map_err(|e| CliError::Config(format!("failed to read session: {}", e)))?;
    if s.is_empty() {
        return Err(CliError::Config("a session cookie is required".to_string()));
    }
    Ok(Zeroizing::new(s))
}

/// Verify a session against adventofcode.com and check the user ID matches
/// the explicitly provided one, when there is one
pub fn verify_session(session: &str, expected_user_id: Option<u64>) -> Result<u64, CliError> {
    let client = advent_http_client::AdventClient::new()?;
    let info = client.verify_session(session)?;
    let actual = info
        .user_id
        .ok_or_else(|| CliError::Config("invalid session: verification failed".to_string()))?;

    if let Some(expected) = expected_user_id
        && actual != expected
    {
        return Err(CliError::UserIdMismatch { expected, actual });
    }
    Ok(actual)
}

/// Resolve the session cookie and user ID.
///
/// The user ID comes from `--user-id`, from session verification, or from a
/// prompt when there is neither. The session comes from `AOC_SESSION`, or a
/// prompt when submission requires one.
fn resolve_session_and_user_id(
    provided_user_id: Option<u64>,
    submit: bool,
) -> Result<(Zeroizing<String>, u64), CliError> {
    let env_session = std::env::var("AOC_SESSION").ok();

    let explicit_user_id = match (provided_user_id, &env_session) {
        (Some(uid), _) => Some(uid),
        // Session present: the user ID can be derived from verification
        (None, Some(_)) => None,
        (None, None) => Some(prompt_user_id()?),
    };

    let session = match env_session {
        Some(s) => Zeroizing::new(s),
        None if submit => prompt_session("A session cookie is required to submit answers.")?,
        None => Zeroizing::new(String::new()),
    };

    let user_id = if session.is_empty() {
        // Cache-only run; the prompt above guarantees an explicit ID
        explicit_user_id
            .ok_or_else(|| CliError::Config("no user ID available".to_string()))?
    } else {
        verify_session(&session, explicit_user_id)?
    };

    Ok((session, user_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tilde_home() {
        let home = dirs::home_dir().unwrap();
        assert_eq!(
            expand_tilde(Path::new("~/.cache/advent")),
            home.join(".cache/advent")
        );
    }

    #[test]
    fn test_expand_bare_tilde() {
        let home = dirs::home_dir().unwrap();
        assert_eq!(expand_tilde(Path::new("~")), home);
    }

    #[test]
    fn test_expand_tilde_leaves_absolute_paths() {
        assert_eq!(
            expand_tilde(Path::new("/var/cache/advent")),
            PathBuf::from("/var/cache/advent")
        );
        assert_eq!(
            expand_tilde(Path::new("relative/cache")),
            PathBuf::from("relative/cache")
        );
    }
}
