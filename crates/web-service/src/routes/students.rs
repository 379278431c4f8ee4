//! 学生相关页面
//!
//! 所有修改类接口都在完成后重定向（303）到列表页，避免刷新时重复提交表单。
//! 查询不到学生时同样重定向到列表页，不返回404。

use crate::models::err::AppError;
use crate::models::students::{StudentForm, StudentQuery};
use crate::views::{StudentDetailView, StudentFormView, StudentListView};
use crate::AppState;
use askama::Template;
use axum::extract::{Path, Query, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use database::Student;
use tracing::debug;
use validator::Validate;

/// 学生列表页地址
pub const STUDENTS_PATH: &str = "/students";

fn redirect_to_list() -> Redirect {
    Redirect::to(STUDENTS_PATH)
}

/// 学生列表
///
/// `keyword` 非空时按姓名搜索，否则返回全部学生。关键字会回显到搜索框中。
#[utoipa::path(get,
    path = "/students",
    tag = "students",
    params(StudentQuery),
    responses(
        (status = 200, description = "Student list page", body = String, content_type = "text/html")
    ),
)]
pub async fn list_students(
    State(state): State<AppState>,
    Query(query): Query<StudentQuery>,
) -> Result<Html<String>, AppError> {
    debug!("🔍 Listing students {:?}", query);

    let students = match query.keyword.as_deref() {
        Some(keyword) if !keyword.is_empty() => state.student_service.search_by_name(Some(keyword)).await?,
        _ => state.student_service.get_all().await?,
    };

    let view = StudentListView {
        students,
        keyword: query.keyword.unwrap_or_default(),
    };
    Ok(Html(view.render()?))
}

/// 学生详情
#[utoipa::path(get,
    path = "/students/{id}",
    tag = "students",
    params(("id" = String, Path, description = "学生ID")),
    responses(
        (status = 200, description = "Student detail page", body = String, content_type = "text/html"),
        (status = 303, description = "Student not found, redirect to list")
    ),
)]
pub async fn get_student(State(state): State<AppState>, Path(id): Path<String>) -> Result<Response, AppError> {
    debug!("Getting student id {}", id);

    let Some(student) = state.student_service.get_by_id(&id).await? else {
        return Ok(redirect_to_list().into_response());
    };

    Ok(Html(StudentDetailView { student }.render()?).into_response())
}

/// 新建学生表单
#[utoipa::path(get,
    path = "/students/new",
    tag = "students",
    responses(
        (status = 200, description = "Empty student form", body = String, content_type = "text/html")
    ),
)]
pub async fn new_student_form() -> Result<Html<String>, AppError> {
    let view = StudentFormView {
        student: Student::default(),
        is_edit: false,
    };
    Ok(Html(view.render()?))
}

/// 编辑学生表单
#[utoipa::path(get,
    path = "/students/{id}/edit",
    tag = "students",
    params(("id" = String, Path, description = "学生ID")),
    responses(
        (status = 200, description = "Pre-filled student form", body = String, content_type = "text/html"),
        (status = 303, description = "Student not found, redirect to list")
    ),
)]
pub async fn edit_student_form(State(state): State<AppState>, Path(id): Path<String>) -> Result<Response, AppError> {
    debug!("Editing student id {}", id);

    let Some(student) = state.student_service.get_by_id(&id).await? else {
        return Ok(redirect_to_list().into_response());
    };

    let view = StudentFormView { student, is_edit: true };
    Ok(Html(view.render()?).into_response())
}

/// 创建学生
///
/// 表单中 `id` 为空时自动生成
#[utoipa::path(post,
    path = "/students",
    tag = "students",
    request_body(content = StudentForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Created, redirect to list"),
        (status = 400, description = "Field too long")
    ),
)]
pub async fn create_student(State(state): State<AppState>, Form(form): Form<StudentForm>) -> Result<Redirect, AppError> {
    debug!("Creating student {:#?}", form);

    form.validate()?;

    let student = state.student_service.create(form.into()).await?;
    debug!("✅ Student {} created", student.id);

    Ok(redirect_to_list())
}

/// 更新学生信息
///
/// 只更新姓名、邮箱、年龄。学生不存在时同样重定向到列表页。
#[utoipa::path(post,
    path = "/students/{id}",
    tag = "students",
    params(("id" = String, Path, description = "学生ID")),
    request_body(content = StudentForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Redirect to list"),
        (status = 400, description = "Field too long")
    ),
)]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<StudentForm>,
) -> Result<Redirect, AppError> {
    debug!("Updating student {} with {:#?}", id, form);

    form.validate()?;

    if state.student_service.update(&id, form.into()).await?.is_none() {
        debug!("Student {} not found, nothing updated", id);
    }

    Ok(redirect_to_list())
}

/// 删除指定的学生
#[utoipa::path(post,
    path = "/students/{id}/delete",
    tag = "students",
    params(("id" = String, Path, description = "学生ID")),
    responses(
        (status = 303, description = "Redirect to list")
    ),
)]
pub async fn delete_student(State(state): State<AppState>, Path(id): Path<String>) -> Result<Redirect, AppError> {
    debug!("🗑️ Deleting student {}", id);

    state.student_service.delete(&id).await?;

    Ok(redirect_to_list())
}
