//! Raw record structs as the contracts/meetings REST API returns them.
//!
//! Every field except the identifier is optional on the wire. Deserialization
//! never fails on a missing optional field; deciding what is required is the
//! job of the view-model mapper.

mod contract;
mod meeting;
mod refs;

pub use contract::ContractRecord;
pub use meeting::MeetingRecord;
pub use refs::{ContractRef, UserRef};
