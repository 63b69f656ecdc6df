// tagmark shared type definitions
// The validated bookmark domain model and the error taxonomy.

pub mod bookmark;
pub mod errors;
