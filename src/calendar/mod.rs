pub mod date;
pub mod registry;
pub mod reminder;
pub mod store;

pub use registry::Registry;
pub use reminder::ReminderId;
pub use store::Store;
