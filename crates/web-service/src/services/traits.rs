//! 服务层 trait 定义
//!
//! 定义服务层的抽象接口，遵循六边形架构的端口适配器模式

use database::{DatabaseResult, Student};

/// 学生服务 trait 定义
///
/// 定义了学生相关的业务逻辑接口，作为应用层的端口(Port)
///
/// 该 trait 作为业务逻辑的抽象接口，具体实现由 [`crate::services::StudentService`] 提供。
/// handler 通过 `Arc<dyn StudentServiceTrait>` 使用它，因此不能要求 `Clone`
#[async_trait::async_trait]
pub trait StudentServiceTrait: Send + Sync + 'static {
    /// 查询全部学生
    async fn get_all(&self) -> DatabaseResult<Vec<Student>>;

    /// 根据 ID 获取学生信息，不存在时返回 `None`
    async fn get_by_id(&self, id: &str) -> DatabaseResult<Option<Student>>;

    /// 按姓名搜索学生
    ///
    /// `keyword` 为 `None`、空字符串或只包含空白字符时等同于 [`StudentServiceTrait::get_all`]
    async fn search_by_name(&self, keyword: Option<&str>) -> DatabaseResult<Vec<Student>>;

    /// 创建新学生
    ///
    /// # 参数
    /// - `student`: 学生信息，`id` 为空时自动生成
    ///
    /// # 返回值
    /// 返回保存后的学生信息（包含最终使用的 `id`）
    async fn create(&self, student: Student) -> DatabaseResult<Student>;

    /// 更新学生信息
    ///
    /// 只更新 `name`、`email`、`age`，`id` 保持不变
    ///
    /// # 参数
    /// - `id`: 学生 ID
    /// - `student`: 新的学生信息，其中的 `id` 会被忽略
    ///
    /// # 返回值
    /// 学生不存在时返回 `None`，且不写入任何数据
    async fn update(&self, id: &str, student: Student) -> DatabaseResult<Option<Student>>;

    /// 删除学生，不存在时什么也不做
    async fn delete(&self, id: &str) -> DatabaseResult<()>;
}
