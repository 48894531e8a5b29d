pub mod notification;
pub mod providers;
pub mod repository;
pub mod summary;

pub use notification::{ConsoleNotifier, MockNotifier, Notifier};
pub use repository::BreachRepository;
