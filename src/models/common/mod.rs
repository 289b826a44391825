pub mod lenient;

pub use lenient::{deserialize_optional_i32, deserialize_optional_i64};
