//! Connection management. SQLite allows one writer; every operation goes
//! through the single guarded connection.

pub mod pragmas;
pub mod write_connection;

pub use write_connection::WriteConnection;
