pub mod major;
