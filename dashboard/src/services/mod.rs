// Builds engine collaborators from the dashboard configuration
pub mod engine_client;
