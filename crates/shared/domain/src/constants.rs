//! Domain-level constants.

// =============================================================================
// User Roles
// =============================================================================

/// Role of a user enrolled in courses
pub const ROLE_STUDENT: &str = "student";

/// Role of a user who runs courses
pub const ROLE_TEACHER: &str = "teacher";

/// Administrator role
pub const ROLE_ADMIN: &str = "admin";

// =============================================================================
// Identity
// =============================================================================

/// Identity value of an entity that has not been stored yet
pub const UNSET_ID: crate::Id = 0;
