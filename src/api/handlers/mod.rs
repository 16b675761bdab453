pub mod beverages;
pub mod categories;
pub mod dishes;
pub mod health;
