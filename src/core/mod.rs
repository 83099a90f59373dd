// Core Layer
pub mod actions;
pub mod navigator;
pub mod transfer;

pub use navigator::NavigationSynchronizer;
pub use transfer::{TransferEngine, TransferPolicy, TransferStats};
