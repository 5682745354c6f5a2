//! Test doubles shared by the integration tests.

pub mod mock_relay;

pub use mock_relay::MockRelay;
