use serde::de::value::MapAccessDeserializer;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::models::common::{deserialize_optional_i32, deserialize_optional_i64};

// 学生实体
//
// 所有字段均可选且不做任何约束；前端以 `IStudent` 接口引用该结构。
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "student.ts", rename = "IStudent")]
pub struct Student {
    // 学生ID，由服务端分配，未保存时为空
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional, type = "number")]
    pub id: Option<i64>,
    // 名
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub first_name: Option<String>,
    // 姓
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub last_name: Option<String>,
    // 年龄
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub age: Option<i32>,
}

// 反序列化用的字段集合，只经由 JSON 对象构造
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StudentObject {
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    id: Option<i64>,
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    last_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_i32")]
    age: Option<i32>,
}

struct StudentVisitor;

impl<'de> Visitor<'de> for StudentVisitor {
    type Value = Student;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a student object")
    }

    fn visit_map<A>(self, access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let object = StudentObject::deserialize(MapAccessDeserializer::new(access))?;
        Ok(Student {
            id: object.id,
            first_name: object.first_name,
            last_name: object.last_name,
            age: object.age,
        })
    }
}

// 只接受对象形式，数组按位置填充字段的写法会被拒绝
impl<'de> Deserialize<'de> for Student {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(StudentVisitor)
    }
}

impl Student {
    /// 线上格式中的字段名，按声明顺序排列
    pub const FIELDS: [&'static str; 4] = ["id", "firstName", "lastName", "age"];

    pub fn new(
        id: Option<i64>,
        first_name: Option<String>,
        last_name: Option<String>,
        age: Option<i32>,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            age,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    pub fn with_age(mut self, age: i32) -> Self {
        self.age = Some(age);
        self
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Student{{id=")?;
        match self.id {
            Some(id) => write!(f, "{id}")?,
            None => write!(f, "null")?,
        }
        write!(f, ", firstName=")?;
        write_quoted(f, self.first_name.as_deref())?;
        write!(f, ", lastName=")?;
        write_quoted(f, self.last_name.as_deref())?;
        write!(f, ", age=")?;
        match self.age {
            Some(age) => write!(f, "{age}")?,
            None => write!(f, "null")?,
        }
        write!(f, "}}")
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, value: Option<&str>) -> fmt::Result {
    match value {
        Some(v) => write!(f, "'{v}'"),
        None => write!(f, "null"),
    }
}
