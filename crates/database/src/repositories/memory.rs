//! 内存学生仓库
//!
//! 没有配置数据库时使用，也用于服务层测试。进程退出后数据丢失。

use crate::models::student::Student;
use crate::repositories::traits::StudentRepositoryTrait;
use crate::DatabaseResult;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// 基于 [`HashMap`] 的学生仓库
///
/// 内部数据放在 `Arc` 中，clone 出来的实例共享同一份数据
#[derive(Debug, Clone, Default)]
pub struct InMemoryStudentRepository {
    students: Arc<RwLock<HashMap<String, Student>>>,
}

impl InMemoryStudentRepository {
    /// 创建空的内存仓库
    pub fn new() -> Self {
        Self::default()
    }
}

/// 与数据库实现保持一致：按 `name`、`id` 排序
fn sorted(mut students: Vec<Student>) -> Vec<Student> {
    students.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
    students
}

#[async_trait::async_trait]
impl StudentRepositoryTrait for InMemoryStudentRepository {
    async fn find_all(&self) -> DatabaseResult<Vec<Student>> {
        let students = self.students.read().await;
        Ok(sorted(students.values().cloned().collect()))
    }

    async fn find_by_id(&self, id: &str) -> DatabaseResult<Option<Student>> {
        Ok(self.students.read().await.get(id).cloned())
    }

    async fn find_by_name_containing_ignore_case(&self, name: &str) -> DatabaseResult<Vec<Student>> {
        let needle = name.to_lowercase();
        let students = self.students.read().await;

        Ok(sorted(
            students
                .values()
                .filter(|s| s.name.to_lowercase().contains(&needle))
                .cloned()
                .collect(),
        ))
    }

    async fn save(&self, student: Student) -> DatabaseResult<Student> {
        debug!("📝 保存学生: {}", student.id);

        self.students.write().await.insert(student.id.clone(), student.clone());
        Ok(student)
    }

    async fn delete_by_id(&self, id: &str) -> DatabaseResult<()> {
        if self.students.write().await.remove(id).is_none() {
            debug!("学生 {} 不存在，忽略删除", id);
        }
        Ok(())
    }
}
