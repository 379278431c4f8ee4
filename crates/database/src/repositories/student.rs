//! 学生仓库
//!
//! 负责学生相关的PostgreSQL数据库操作

use crate::models::student::Student;
use crate::repositories::traits::StudentRepositoryTrait;
use crate::DatabaseResult;
use sqlx::PgPool;
use tracing::debug;

/// 学生仓库结构体
#[derive(Debug, Clone)]
pub struct StudentRepository {
    pool: PgPool,
}

impl StudentRepository {
    /// 创建新的学生仓库实例
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl StudentRepositoryTrait for StudentRepository {
    async fn find_all(&self) -> DatabaseResult<Vec<Student>> {
        debug!("🔍 查询全部学生");

        let students = sqlx::query_as::<_, Student>(
            r#"
            SELECT id, name, email, age
            FROM students
            ORDER BY name, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!("✅ 查询完成 - 共 {} 个学生", students.len());
        Ok(students)
    }

    async fn find_by_id(&self, id: &str) -> DatabaseResult<Option<Student>> {
        debug!("🔍 根据 ID 获取学生: {}", id);

        let student = sqlx::query_as::<_, Student>(
            r#"
            SELECT id, name, email, age
            FROM students
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(student)
    }

    /// 按姓名模糊搜索
    ///
    /// 这里没有使用 `ILIKE '%' || $1 || '%'`，因为用户输入中的 `%`、`_` 会被当作通配符。
    /// `strpos` 按字面查找子串，配合 `lower` 实现忽略大小写。
    async fn find_by_name_containing_ignore_case(&self, name: &str) -> DatabaseResult<Vec<Student>> {
        debug!("🔍 搜索学生 - 名称: {:?}", name);

        let students = sqlx::query_as::<_, Student>(
            r#"
            SELECT id, name, email, age
            FROM students
            WHERE strpos(lower(name), lower($1)) > 0
            ORDER BY name, id
            "#,
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await?;

        debug!("✅ 搜索完成 - 找到 {} 个学生", students.len());
        Ok(students)
    }

    async fn save(&self, student: Student) -> DatabaseResult<Student> {
        debug!("📝 保存学生: {:#?}", student);

        let student = sqlx::query_as::<_, Student>(
            r#"
            INSERT INTO students (id, name, email, age)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE
                SET name  = EXCLUDED.name,
                    email = EXCLUDED.email,
                    age   = EXCLUDED.age
            RETURNING id, name, email, age
            "#,
        )
        .bind(&student.id)
        .bind(&student.name)
        .bind(&student.email)
        .bind(student.age)
        .fetch_one(&self.pool)
        .await?;

        debug!("✅ 学生保存成功: {}", student.id);
        Ok(student)
    }

    async fn delete_by_id(&self, id: &str) -> DatabaseResult<()> {
        debug!("🗑️ 删除学生: {}", id);

        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            debug!("学生 {} 不存在，忽略删除", id);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::initialize_database;
    use shared_lib::AppConfig;

    #[tokio::test]
    #[ignore = "requires DATABASE_URL pointing at a disposable postgresql database"]
    async fn test_postgres_round_trip() {
        let config = AppConfig::from_lookup(|key| std::env::var(key).ok()).unwrap();
        let database = config.database.expect("DATABASE_URL must be set");
        let pool = initialize_database(&database).await.unwrap();
        let repo = StudentRepository::new(pool);

        let student = Student {
            id: "pg-test-1".to_string(),
            name: "Percent_%Literal".to_string(),
            email: "pg@example.com".to_string(),
            age: 30,
        };
        repo.save(student.clone()).await.unwrap();

        assert_eq!(repo.find_by_id("pg-test-1").await.unwrap(), Some(student.clone()));

        let found = repo.find_by_name_containing_ignore_case("_%lit").await.unwrap();
        assert!(found.iter().any(|s| s.id == "pg-test-1"));

        // `%` 不能匹配任意字符
        let found = repo.find_by_name_containing_ignore_case("p%l").await.unwrap();
        assert!(!found.iter().any(|s| s.id == "pg-test-1"));

        let updated = repo
            .save(Student {
                age: 31,
                ..student
            })
            .await
            .unwrap();
        assert_eq!(updated.age, 31);

        repo.delete_by_id("pg-test-1").await.unwrap();
        repo.delete_by_id("pg-test-1").await.unwrap();
        assert_eq!(repo.find_by_id("pg-test-1").await.unwrap(), None);
    }
}
