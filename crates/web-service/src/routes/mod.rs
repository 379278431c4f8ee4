//! 路由入口
//!
//! 提供 [`create_app_router`] 函数，导出当前App的所有路由。
//!
//! 用户可以在导出路由时传入共享数据 shared_state，这样所有路由函数都可以访问。

use crate::routes::health::__path_health_check;
use crate::routes::health::health_check;
use crate::routes::students::__path_create_student;
use crate::routes::students::__path_delete_student;
use crate::routes::students::__path_edit_student_form;
use crate::routes::students::__path_get_student;
use crate::routes::students::__path_list_students;
use crate::routes::students::__path_new_student_form;
use crate::routes::students::__path_update_student;
use crate::routes::students::{
    create_student, delete_student, edit_student_form, get_student, list_students, new_student_form, update_student,
    STUDENTS_PATH,
};
use crate::AppState;
use axum::response::Redirect;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use utoipa_scalar::{Scalar, Servable};

pub mod health;
pub mod students;

/// 导出当前App的所有路由
///
/// ## 参数定义
/// - state: 共享数据，参考 [`AppState`] 定义。
///
/// ## **❗️注意事项：**
///
/// 由于 [`routes!`] 宏限制，同一个宏里面的接口必须是同一个路径，且不能同时定义多个相同类型的http接口。
/// 因此 `/students/new` 和 `/students/{id}` 需要拆开定义，静态路径会优先于路径参数匹配。
fn routers(state: AppState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(list_students, create_student))
        .routes(routes!(new_student_form))
        .routes(routes!(get_student, update_student))
        .routes(routes!(edit_student_form))
        .routes(routes!(delete_student))
        .routes(routes!(health_check))
        .with_state(state)
}

/// 创建当前App的路由
///
/// 完成以下功能：
/// - 生成OpenAPI文档
/// - 生成App路由
/// - 使用Scalar作为最终在线文档格式
/// - 记录每个http请求的trace日志
pub fn create_app_router(shared_state: AppState) -> Router {
    // 当前项目的OpenAPI声明
    #[derive(OpenApi)]
    #[openapi(
        tags(
            (name = "students", description = "学生信息管理页面（服务端渲染的html页面与表单提交）"),
            (name = "system", description = "运维接口")
        ),
    )]
    struct ApiDoc;

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(routers(shared_state))
        .split_for_parts();

    // 合并文档路由，用户可通过 /docs 访问文档网页地址
    router
        .route("/", get(|| async { Redirect::to(STUDENTS_PATH) }))
        .merge(Scalar::with_url("/docs", api))
        .layer(TraceLayer::new_for_http())
}
