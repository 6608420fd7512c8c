pub mod audit;
pub mod categories;
pub mod companies;
pub mod localizations;
pub mod users;
