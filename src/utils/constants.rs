//! Shared constants and invariants

pub const DEFAULT_PROBE_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_TOKEN_TIMEOUT_MS: u64 = 15_000;
pub const DEFAULT_TOKEN_TTL_SECONDS: u64 = 24 * 60 * 60;

pub const DEFAULT_TOKEN_PATH: &str = "/getToken";
pub const LOGIN_QUERY_PARAM: &str = "login";

// Response body fields
pub const TOKEN_FIELD: &str = "token";
pub const ERROR_FIELD: &str = "erro";

/// probe statuses meaning "server answered", authorized or not
pub const REACHABLE_STATUSES: [u16; 3] = [200, 401, 403];

/// characters of a probe response body written to the log
pub const PROBE_BODY_LOG_LIMIT: usize = 200;
