pub mod catalog_service;
pub mod dish_service;
