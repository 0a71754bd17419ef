pub mod channel;
pub mod settings;
pub mod subscriber;

pub use channel::Channel;
pub use settings::TelegramSettings;
pub use subscriber::{Subscriber, SubscriberStatus};
