pub mod factory;
pub mod filter;
pub mod models;
pub mod seed;
pub mod stats;
pub mod status;

pub use factory::ValidationError;
pub use models::{Channel, Subscriber, SubscriberStatus, TelegramSettings};
pub use status::classify;
