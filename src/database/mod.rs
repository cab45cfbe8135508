//! SQLite backing for the start page's persisted state.
//!
//! Every value the page keeps (links, recent searches, the theme flag and the
//! active engine) lives as one row of the `kv_store` table. [`Database`] owns
//! the connection; [`migrations`] brings the schema up to
//! [`migrations::CURRENT_SCHEMA_VERSION`] whenever a database is opened.
//!
//! ```no_run
//! use startpage::database::Database;
//!
//! let db = Database::open("startpage.db").expect("failed to open database");
//! let rows: i64 = db
//!     .connection()
//!     .query_row("SELECT COUNT(*) FROM kv_store", [], |row| row.get(0))
//!     .expect("kv_store is created on open");
//! ```

pub mod connection;
pub mod migrations;

pub use connection::Database;
