pub mod auth;
pub mod contract;
pub mod meeting;

pub use auth::AuthCommands;
pub use contract::ContractCommands;
pub use meeting::MeetingCommands;
