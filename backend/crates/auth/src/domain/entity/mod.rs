mod credentials;
mod order;
mod user;

pub use credentials::Credentials;
pub use order::{Order, OrderStatus};
pub use user::User;
