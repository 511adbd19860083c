pub mod a001_tenant;
pub mod a002_device;
pub mod a003_sync_log;
pub mod a004_device_log;
pub mod a005_db_table;
