// Service exports
pub mod navigation;

pub use navigation::{MemoryHistory, Navigator, RequestNavigator};
