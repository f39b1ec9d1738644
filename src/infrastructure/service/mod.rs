//! Service Manager Implementations

mod systemd;

pub use systemd::Systemd;
