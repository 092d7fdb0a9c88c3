//! Pixel Bot Test Utils
//!
//! Provides shared testing utilities for the bot's unit tests. The bot keeps no
//! database, so this crate only offers factories for Serenity models that the
//! conversion code reads from.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_guild, create_test_user};
//!
//! #[test]
//! fn test_guild_counts() {
//!     let guild = create_test_guild(123456789, "Test Guild", 42);
//!     let user = create_test_user(987654321, "bob");
//!     // Convert and assert...
//! }
//! ```

pub mod serenity;
