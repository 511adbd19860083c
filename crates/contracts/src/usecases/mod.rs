pub mod u501_manual_sync;
