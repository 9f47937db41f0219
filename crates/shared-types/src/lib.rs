pub mod access;
pub mod clinic;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod session;
pub mod theme;

pub use clinic::*;
pub use config::*;
pub use dashboard::*;
pub use error::*;
pub use session::*;
pub use theme::*;
// access items are NOT glob re-exported (`Guard` and `Capability` are too
// generic at the crate root). Use shared_types::access::* explicitly.
