pub mod eve;
pub mod killmail;
