pub mod entities;
pub mod payload;

pub use entities::Student;
pub use payload::StudentPayload;
