// Declare all our modules
mod client;
mod error;
mod handlers;
mod models;

// Publicly export the parts of our library that users will need
pub use client::SpamExpertsClient;
pub use error::{Result, SpamExpertsError};
pub use handlers::auth_ticket::{extract_ticket, is_valid_ticket};
pub use models::{ApiResponse, TicketDebug};
