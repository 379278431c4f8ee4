use database::Student;
use serde::de::{self, Deserializer};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

/// 学生列表查询参数
#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StudentQuery {
    /// 按姓名搜索的关键字（忽略大小写），为空时返回全部学生
    pub keyword: Option<String>,
}

/// 新建/编辑学生的表单
///
/// 所有字段都可以缺省：
/// - `id` 为空时由服务层生成，编辑时以路径中的 id 为准
/// - `age` 为空时按 0 处理
///
/// 长度限制与 `students` 表字段宽度保持一致。
/// `id` 不能为 `new`，否则详情页地址会与新建表单 `/students/new` 冲突
#[derive(Deserialize, Debug, Default, ToSchema, Validate)]
pub struct StudentForm {
    #[schema(example = "")]
    #[serde(default)]
    #[validate(length(max = 64), custom(function = "validate_student_id"))]
    /// 学生ID，新建时可留空
    pub id: Option<String>,

    #[schema(example = "Jane")]
    #[serde(default)]
    #[validate(length(max = 255))]
    /// 姓名
    pub name: String,

    #[schema(example = "jane@example.com")]
    #[serde(default)]
    #[validate(length(max = 255))]
    /// 邮箱
    pub email: String,

    #[schema(example = 21)]
    #[serde(default, deserialize_with = "empty_string_as_none")]
    /// 年龄
    pub age: Option<i32>,
}

impl From<StudentForm> for Student {
    fn from(form: StudentForm) -> Self {
        Student {
            id: form.id.unwrap_or_default(),
            name: form.name,
            email: form.email,
            age: form.age.unwrap_or_default(),
        }
    }
}

fn validate_student_id(id: &str) -> Result<(), ValidationError> {
    if id == "new" {
        return Err(ValidationError::new("reserved_id").with_message("`new` is reserved for the create form".into()));
    }
    Ok(())
}

/// html表单中未填写的输入框会以空字符串提交，这里将其视为 `None`
fn empty_string_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let opt = Option::<String>::deserialize(de)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => T::from_str(s).map_err(de::Error::custom).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_into_student_defaults() {
        let student: Student = StudentForm {
            name: "Jane".to_string(),
            ..Default::default()
        }
        .into();

        assert_eq!(student.id, "");
        assert_eq!(student.name, "Jane");
        assert_eq!(student.email, "");
        assert_eq!(student.age, 0);
    }

    #[test]
    fn test_form_length_limits() {
        let form = StudentForm {
            name: "x".repeat(256),
            ..Default::default()
        };
        assert!(form.validate().is_err());

        let form = StudentForm {
            id: Some("x".repeat(64)),
            name: "x".repeat(255),
            ..Default::default()
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_form_rejects_reserved_id() {
        let form = StudentForm {
            id: Some("new".to_string()),
            ..Default::default()
        };
        assert!(form.validate().is_err());

        let form = StudentForm {
            id: Some("a/b?c".to_string()),
            ..Default::default()
        };
        assert!(form.validate().is_ok());
    }
}
