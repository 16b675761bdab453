pub use super::beverages::Entity as Beverages;
pub use super::categories::Entity as Categories;
pub use super::dishes::Entity as Dishes;
pub use super::status::ItemStatus;
