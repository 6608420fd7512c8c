pub mod audit_event;
pub mod category;
pub mod company;
pub mod enums;
pub mod localization;
pub mod user;

pub use audit_event::AuditEvent;
pub use category::Category;
pub use company::Company;
pub use enums::{DateFormat, NumberFormat, TimeFormat, WeekStart};
pub use localization::Localization;
pub use user::User;
