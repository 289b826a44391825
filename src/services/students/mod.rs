pub mod inspect;

pub use inspect::{InspectReport, InspectedStudent};

use crate::errors::Result;

pub struct StudentService {
    pretty: bool,
}

impl StudentService {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    // 解析学生请求体并输出规范化结果
    pub fn inspect_payload(&self, input: &str) -> Result<InspectReport> {
        inspect::inspect_payload(self, input)
    }
}
