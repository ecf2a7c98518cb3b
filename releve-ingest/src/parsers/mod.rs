pub mod pea;
