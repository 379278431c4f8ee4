//! 服务层模块
//!
//! 包含业务逻辑的服务层实现，遵循六边形架构原则

pub mod student;
pub mod traits;

pub use student::StudentService;
pub use traits::StudentServiceTrait;
