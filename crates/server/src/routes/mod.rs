pub mod auctions;
pub mod health;
pub mod root;

/// The full route table, reported by the root endpoint.
pub const ROUTES: &[(&str, &str)] = &[
    ("get", "/api/auctions"),
    ("get", "/api/auctions/:id"),
    ("get", "/api/auction-details"),
    ("get", "/health"),
];
