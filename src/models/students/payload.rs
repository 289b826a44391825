use serde::{Deserialize, Serialize};

use super::entities::Student;
use crate::errors::Result;

// 学生请求/响应体：单个对象或列表（列表接口返回数组）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StudentPayload {
    Many(Vec<Student>),
    One(Student),
}

impl StudentPayload {
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn into_students(self) -> Vec<Student> {
        match self {
            StudentPayload::One(student) => vec![student],
            StudentPayload::Many(students) => students,
        }
    }
}

impl Student {
    /// 从 JSON 解析，缺失字段与 `null` 都视为缺省
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// 序列化为 JSON，缺省字段不输出
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
