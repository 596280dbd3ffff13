mod address;
mod identity;

pub use address::{Address, AddressProps};
pub use identity::Identity;
