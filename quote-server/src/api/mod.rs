pub mod awesome;

pub use awesome::{AwesomeApiClient, CURRENCY_PAIR};
