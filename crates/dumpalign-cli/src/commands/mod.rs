pub mod align;
pub mod blocks;
pub mod key;
