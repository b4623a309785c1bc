// Real HTTP transport
pub mod client;

// Scripted service for tests and offline demos
pub mod mock;
