//! randomuser_rs
//!
//! A lightweight Rust library for retrieving synthetic user records from the
//! randomuser.me API, summarizing them, and exporting CSV reports. Pairs
//! with the `randomuser` CLI.
//!
//! ### Features
//! - Fetch any number of random user records in one call
//! - Flatten each record into a fixed twelve-column schema
//! - Quick descriptive statistics (age spread, gender shares, country counts)
//! - Save as CSV or JSON plus a plain-text statistics report
//!
//! ### Example
//! ```no_run
//! use randomuser_rs::Client;
//!
//! let client = Client::default();
//! let users = client.fetch(50)?;
//! randomuser_rs::storage::save_csv(&users, "users.csv")?;
//! let ages = randomuser_rs::stats::describe_ages(&users);
//! println!("{:#?}", ages);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod api;
pub mod models;
pub mod report;
pub mod stats;
pub mod storage;

pub use api::Client;
pub use models::FlatUser;
