pub mod content;
pub mod dispatch;
pub mod kinds;
pub mod schema;
