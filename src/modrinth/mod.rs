// Modrinth client: API endpoints, shared HTTP plumbing, version matching

pub mod api;
pub mod http;
pub mod version_matcher;
