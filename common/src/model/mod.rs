pub mod alta;
