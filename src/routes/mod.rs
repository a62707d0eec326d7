pub mod auth_routes;
pub mod payment_routes;
pub mod route_routes;
pub mod ticket_routes;
pub mod user_routes;
pub mod vendor_routes;
