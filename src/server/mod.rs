//! Bot backend.
//!
//! This module contains the complete implementation of the bot: the Discord
//! integration, the command handling services, and the liveness web endpoint.
//!
//! # Architecture
//!
//! - **Bot Layer** (`bot/`) - Serenity client, event handlers, rendering and reply handles
//! - **Service Layer** (`service/`) - Command dispatch, response builders, giveaway timers
//! - **Model Layer** (`model/`) - Command invocations, membership changes, message payloads
//! - **Controller Layer** (`controller/`) - HTTP handlers for the liveness endpoint
//! - **Error Layer** (`error/`) - Application error types
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based configuration
//! - **Startup** (`startup`) - Logging setup and the liveness listener
//! - **Router** (`router`) - Axum route configuration
//! - **Util** (`util/`) - Duration parsing
//!
//! # Event Flow
//!
//! 1. **Bot** receives a gateway event and converts it to a domain model
//! 2. **Service** parses the command and builds the response payload
//! 3. **Bot** renders the payload and sends it through Serenity's HTTP client
//! 4. For giveaways, the **timer service** edits the reply once the duration elapses

pub mod bot;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
