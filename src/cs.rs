pub mod hashing;
pub mod randomized;
pub mod string;

// Re-export all modules
pub use hashing::*;
pub use randomized::*;
pub use string::*;
