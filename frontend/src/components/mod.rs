pub mod altas;
