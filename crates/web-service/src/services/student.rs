//! 学生服务
//!
//! 提供学生相关的业务逻辑操作

use crate::services::traits::StudentServiceTrait;
use database::{DatabaseResult, Student, StudentRepositoryTrait};
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct StudentService<SR: StudentRepositoryTrait> {
    student_repository: SR,
}

impl<SR: StudentRepositoryTrait> StudentService<SR> {
    pub fn new(student_repository: SR) -> Self {
        Self { student_repository }
    }
}

#[async_trait::async_trait]
impl<SR: StudentRepositoryTrait> StudentServiceTrait for StudentService<SR> {
    async fn get_all(&self) -> DatabaseResult<Vec<Student>> {
        self.student_repository.find_all().await
    }

    async fn get_by_id(&self, id: &str) -> DatabaseResult<Option<Student>> {
        self.student_repository.find_by_id(id).await
    }

    async fn search_by_name(&self, keyword: Option<&str>) -> DatabaseResult<Vec<Student>> {
        match keyword {
            Some(keyword) if !keyword.trim().is_empty() => {
                self.student_repository.find_by_name_containing_ignore_case(keyword).await
            }
            _ => self.get_all().await,
        }
    }

    async fn create(&self, mut student: Student) -> DatabaseResult<Student> {
        if student.id.is_empty() {
            student.id = Uuid::new_v4().to_string();
            debug!("生成学生ID: {}", student.id);
        }
        self.student_repository.save(student).await
    }

    async fn update(&self, id: &str, student: Student) -> DatabaseResult<Option<Student>> {
        let Some(mut existing) = self.student_repository.find_by_id(id).await? else {
            debug!("学生 {} 不存在，跳过更新", id);
            return Ok(None);
        };

        existing.name = student.name;
        existing.email = student.email;
        existing.age = student.age;

        self.student_repository.save(existing).await.map(Some)
    }

    async fn delete(&self, id: &str) -> DatabaseResult<()> {
        self.student_repository.delete_by_id(id).await
    }
}
