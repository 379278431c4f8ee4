pub mod err;

pub mod students;
