pub mod gav;

pub use gav::gav_command;
