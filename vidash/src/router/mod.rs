pub mod channel;
pub mod dashboard;
pub mod enrich;
pub mod search;
pub mod videos;
