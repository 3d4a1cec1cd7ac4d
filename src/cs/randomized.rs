pub mod random_base;

pub use random_base::RandomBase;
