pub use super::audit::Entity as Audit;
pub use super::friendship::Entity as Friendship;
pub use super::organization::Entity as Organization;
pub use super::user::Entity as User;
pub use super::vacation::Entity as Vacation;
