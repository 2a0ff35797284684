mod aggregate;
mod gateway;
mod validator;

pub use aggregate::{Category, CATEGORY};
pub use gateway::CategoryGateway;
pub use validator::CategoryValidator;
