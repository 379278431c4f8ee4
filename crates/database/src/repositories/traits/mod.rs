//! 数据库仓库 trait 定义
//!
//! 这里定义了各种数据库仓库的抽象接口
//!
//! ## Repository Trait 设计模式 🎯
//!
//! 所有 Repository trait 都遵循统一的 trait 约束：
//!
//! ```rust,ignore
//! pub trait XxxRepositoryTrait: Send + Sync + 'static {
//!     // 异步方法定义...
//! }
//! ```
//!
//! - `Send` + `Sync`：同一个仓库实例会被多个并发请求共享访问
//! - `'static`：仓库作为应用服务长期存活，可以放进 `Arc` 中跨协程传递
//!
//! 服务层只依赖 trait，不依赖具体实现，因此可以在不同存储之间切换：
//!
//! ```rust,ignore
//! // 生产环境：PostgreSQL
//! let service = StudentService::new(StudentRepository::new(pool.clone()));
//!
//! // 本地调试/测试：内存存储
//! let service = StudentService::new(InMemoryStudentRepository::new());
//! ```
//!
//! ### 约定 ✅
//!
//! 1. **异步优先**：所有数据访问方法都是异步的
//! 2. **错误处理**：统一使用 `DatabaseResult<T>`
//! 3. **不存在不是错误**：按 id 查询返回 [`Option`]，删除不存在的记录直接成功
//! 4. **排序一致**：列表结果按 `name`、`id` 升序返回，不同实现保持一致

pub mod student;

// 重新导出
pub use student::StudentRepositoryTrait;
