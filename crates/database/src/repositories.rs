//! 数据库仓库模块
//!
//! 这里定义数据库操作的Repository层

pub mod memory;
pub mod student;
pub mod traits;

// 重新导出具体的类型
pub use memory::InMemoryStudentRepository;
pub use student::StudentRepository;
pub use traits::StudentRepositoryTrait;
