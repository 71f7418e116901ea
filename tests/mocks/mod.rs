pub mod dom;
pub mod fixtures;
pub mod harness;
pub mod mock_client;
