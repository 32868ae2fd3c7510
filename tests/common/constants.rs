//! Shared constants for end-to-end tests
//!
//! When test fixtures change (tokens, classroom ids, scores), update only
//! this file.

// ============================================================================
// Test credentials (opaque bearer tokens; never verified by the server)
// ============================================================================

/// A teacher who can see every record of their two classrooms
pub const TEACHER_TOKEN: &str = "Bearer teacher-token";

/// A student who can only see their own record
pub const STUDENT_TOKEN: &str = "Bearer student-token";

/// A head teacher with full visibility plus their profile row
pub const HEAD_TEACHER_TOKEN: &str = "Bearer head-teacher-token";

/// A token the stub records backend answers with a query error
pub const BROKEN_TOKEN: &str = "Bearer broken-token";

/// A token with no visible rows at all
pub const UNKNOWN_TOKEN: &str = "Bearer unknown-token";

/// A token whose profile row carries a role string the server does not know
pub const LEGACY_ROLE_TOKEN: &str = "Bearer legacy-role-token";

// ============================================================================
// Test classrooms
// ============================================================================

/// Classroom with scores [80, 90, 100] (average 90.0)
pub const CLASSROOM_MATH: &str = "classroom-math";

/// Classroom with scores [70, 71] (average 70.5)
pub const CLASSROOM_BIO: &str = "classroom-bio";

/// Classroom id that matches no records
pub const CLASSROOM_GHOST: &str = "classroom-ghost";

// ============================================================================
// Stub backend credentials
// ============================================================================

/// Public API key the server sends to the records backend
pub const RECORDS_ANON_KEY: &str = "test-anon-key";

/// Write API key the server sends to the analytics store
pub const ANALYTICS_API_KEY: &str = "test-analytics-key";

/// Request timeout for test clients, in seconds
pub const REQUEST_TIMEOUT_SECS: u64 = 5;
