//! The household member directory.

mod core;
mod create_endpoint;
mod list_endpoint;

pub use core::{
    DEFAULT_MEMBERS, Member, create_member, create_member_table, delete_all_members,
    get_all_members,
};
pub use create_endpoint::{MemberData, MemberState, create_member_endpoint};
pub use list_endpoint::list_members_endpoint;
