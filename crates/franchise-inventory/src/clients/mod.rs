pub mod franchise_client;

pub use franchise_client::FranchiseClient;
