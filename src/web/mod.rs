//! Web server for browser-based RLFS search.
//!
//! This module provides an interactive web interface using Axum.
//! Users paste a sequence into a form and get every structure back as an
//! annotated, colour-coded sequence.
//!
//! ## Starting the Server
//!
//! ```text
//! # Start on default port 8686
//! rlfs-finder serve
//!
//! # Custom port, auto-open browser, log every request
//! rlfs-finder serve --port 3000 --open --monitor
//!
//! # Bind to all interfaces
//! rlfs-finder serve --address 0.0.0.0
//! ```
//!
//! ## Endpoints
//!
//! - `GET /` - Main page with the sequence form
//! - `POST /` - Search the submitted `sequence` form field, results rendered as HTML
//! - `POST /api/find` - Search `{"sequence": "..."}` and return JSON

pub mod server;
