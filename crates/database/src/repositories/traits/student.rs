//! 学生仓库 trait 定义
//!
//! 定义学生数据库操作的抽象接口

use crate::models::student::Student;
use crate::DatabaseResult;

/// 学生仓库trait定义
///
/// 以 `id` 为键的集合式访问接口，支持：
/// - 查询全部学生
/// - 根据 id 查询
/// - 按姓名模糊搜索（忽略大小写）
/// - 保存（新增或覆盖）
/// - 根据 id 删除
#[async_trait::async_trait]
pub trait StudentRepositoryTrait: Send + Sync + 'static {
    /// 查询全部学生
    async fn find_all(&self) -> DatabaseResult<Vec<Student>>;

    /// 根据 ID 获取学生信息
    ///
    /// # 返回值
    /// 学生不存在时返回 `None`
    async fn find_by_id(&self, id: &str) -> DatabaseResult<Option<Student>>;

    /// 搜索姓名中包含 `name` 的学生，忽略大小写
    ///
    /// `name` 按字面匹配，`%`、`_` 不作为通配符。
    /// 内存实现按 Unicode 规则转小写，PostgreSQL 的 `lower()` 取决于数据库 collation，
    /// 在 `C` locale 下非 ASCII 字符的大小写可能不一致
    async fn find_by_name_containing_ignore_case(&self, name: &str) -> DatabaseResult<Vec<Student>>;

    /// 保存学生信息
    ///
    /// `id` 不存在则新增，否则覆盖同 `id` 的记录
    ///
    /// # 返回值
    /// 返回保存后的学生信息
    async fn save(&self, student: Student) -> DatabaseResult<Student>;

    /// 根据 ID 删除学生，记录不存在时什么也不做
    async fn delete_by_id(&self, id: &str) -> DatabaseResult<()>;
}
