//! Request dispatch and argument validation.

pub mod dispatcher;
pub mod validator;

pub use dispatcher::Dispatcher;
pub use validator::validate_arguments;
