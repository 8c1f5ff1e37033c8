mod email;
mod order_id;
mod user_id;
mod user_password;
mod user_role;

pub use email::Email;
pub use order_id::OrderId;
pub use user_id::UserId;
pub use user_password::{RawPassword, StoredPassword};
pub use user_role::UserRole;
