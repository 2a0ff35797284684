mod aggregate;
mod gateway;
mod validator;

pub use aggregate::{Genre, GENRE};
pub use gateway::GenreGateway;
pub use validator::GenreValidator;
