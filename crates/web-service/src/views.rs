//! 页面视图
//!
//! 使用 [`askama`] 在编译期检查模板，模板文件位于 `templates/` 目录，`.html` 模板会自动转义。

use askama::Template;
use database::Student;

/// 学生列表页
#[derive(Template, Debug)]
#[template(path = "students.html")]
pub struct StudentListView {
    pub students: Vec<Student>,
    /// 回显的搜索关键字，没有时为空字符串
    pub keyword: String,
}

/// 学生详情页
#[derive(Template, Debug)]
#[template(path = "student-detail.html")]
pub struct StudentDetailView {
    pub student: Student,
}

/// 新建/编辑学生表单页
#[derive(Template, Debug)]
#[template(path = "student-form.html")]
pub struct StudentFormView {
    pub student: Student,
    pub is_edit: bool,
}
