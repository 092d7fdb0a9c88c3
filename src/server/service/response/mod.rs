//! Response builders.
//!
//! Every function here is pure: the same arguments always produce an equal payload,
//! and each command always produces the same set of fields.

pub mod announcement;
pub mod fake;
pub mod giveaway;
pub mod membership;
pub mod server_info;
pub mod ticket;
