//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (Guild, Role, User, CommandInteraction) for testing purposes. These factories create valid Serenity
//! objects by deserializing JSON, simulating what Discord's API would return.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_guild, create_test_role};
//!
//! #[test]
//! fn test_role_count() {
//!     let mut guild = create_test_guild(123456789, "Test Guild", 10);
//!     let role = create_test_role(111111111, "Admin");
//!     guild.roles.insert(role.id, role);
//!     // Use in your tests...
//! }
//! ```
//!
//! # Available Factories
//!
//! - `guild::create_test_guild` - Create Serenity Guild objects
//! - `role::create_test_role` - Create Serenity Role objects
//! - `user::create_test_user` - Create Serenity User objects
//! - `command::create_test_command_interaction` - Create slash command interactions

pub mod command;
pub mod guild;
pub mod role;
pub mod user;

// Re-export commonly used functions for convenience
pub use command::create_test_command_interaction;
pub use guild::create_test_guild;
pub use role::create_test_role;
pub use user::create_test_user;
