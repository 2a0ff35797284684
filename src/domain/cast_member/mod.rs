mod aggregate;
mod gateway;
mod member_type;
mod validator;

pub use aggregate::{CastMember, CAST_MEMBER};
pub use gateway::CastMemberGateway;
pub use member_type::CastMemberType;
pub use validator::CastMemberValidator;
