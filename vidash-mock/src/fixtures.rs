pub mod analytics;
pub mod channel;
pub mod comments;
pub mod videos;
