pub mod init_db;
pub mod seed_demo;
pub mod serve;
