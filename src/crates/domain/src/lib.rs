pub mod like;
pub mod value;
