//! XYLO backend.
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, access control and DTO responses
//! - **Service Layer** (`service/`) - Business rules, point awards and the scheduled job bodies
//! - **Data Layer** (`data/`) - Repositories over the SeaORM entities
//! - **Model Layer** (`model/`) - Domain enums, constants and operation parameters
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session access and authentication guards
//! - **YouTube** (`youtube/`) - YouTube Data API client and URL/handle parsing
//!
//! Supporting modules:
//!
//! - **Configuration** (`config`) - Environment-based configuration
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Database, session store and HTTP client setup
//! - **Router** (`router`) - Route table and OpenAPI documentation
//! - **Scheduler** (`scheduler/`) - Daily cron jobs
//!
//! # Request Flow
//!
//! 1. **Router** dispatches the request to a controller
//! 2. **Controller** checks the session through `AuthGuard` and calls a service
//! 3. **Service** applies the business rules using repositories
//! 4. **Controller** returns the service's DTO as JSON, or the `AppError` response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
pub mod youtube;
