pub mod entities;
pub mod schema;
pub mod use_cases;
