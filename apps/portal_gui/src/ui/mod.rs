//! UI layer for the portal: app shell and the page state the backend renders into.

pub mod app;
pub mod page;

pub use app::PortalApp;
pub use page::PortalPage;
