pub mod auth_ticket;
