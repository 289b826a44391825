pub mod students;

pub use students::StudentService;
