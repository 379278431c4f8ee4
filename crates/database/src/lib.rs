//! 数据库操作模块
//!
//! 这个模块提供了数据库连接、迁移以及学生数据的存取功能

pub mod connection;
pub mod error;
pub mod models;
pub mod repositories;

pub use connection::{initialize_database, DatabasePool};
pub use error::DatabaseError;
pub use models::student::Student;
pub use repositories::{memory::InMemoryStudentRepository, student::StudentRepository, traits::StudentRepositoryTrait};

/// 数据库操作结果类型
pub type DatabaseResult<T> = Result<T, DatabaseError>;
