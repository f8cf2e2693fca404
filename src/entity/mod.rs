pub mod audit_logs;
pub mod orders;

pub use audit_logs::Entity as AuditLogs;
pub use orders::Entity as Orders;
