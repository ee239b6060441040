// src/ui/mod.rs
pub mod architecture;
pub mod backup;
pub mod charts;
pub mod load_testing;
pub mod queries;
pub mod replication;
pub mod widgets;

pub use architecture::show_architecture_view;
pub use backup::show_backup_view;
pub use load_testing::show_load_testing_view;
pub use queries::show_queries_view;
pub use replication::show_replication_view;
