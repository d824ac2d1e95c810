pub mod check;
pub mod init;
pub mod plot;
pub mod practice;
