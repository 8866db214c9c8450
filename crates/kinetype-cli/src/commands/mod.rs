pub mod init;
pub mod run;
pub mod sample;
pub mod timeline;
