//! Scripted demo of the product dashboard: tab switcher, live-looking mock
//! metrics, kitchen queue and table map.

pub mod catalog;
pub mod controller;
pub mod kitchen;
pub mod metrics;
pub mod mock_updater;
pub mod tab_switcher;

pub use controller::DemoController;
pub use kitchen::KitchenBoard;
pub use mock_updater::{MockDataUpdater, TickReport};
pub use tab_switcher::TabSwitcher;
