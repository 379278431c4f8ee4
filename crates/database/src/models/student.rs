//! 学生数据库模型

/// 学生信息结构体
///
/// 对应 `students` 表，`id` 为主键
#[derive(Debug, Clone, Default, PartialEq, Eq, sqlx::FromRow)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub email: String,
    pub age: i32,
}
