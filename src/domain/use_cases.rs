pub mod blog;
pub mod boundary;
pub mod content;
pub mod deferred;
pub mod validation;
