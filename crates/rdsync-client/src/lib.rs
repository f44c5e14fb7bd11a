pub mod client;
pub mod error;
mod retry;
pub mod types;
pub mod window;

pub use client::DealsClient;
pub use error::ClientError;
pub use types::DealsPage;
pub use window::RequestWindow;
