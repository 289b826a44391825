pub mod common;
pub mod students;

use serde::{Deserialize, Serialize};

// 程序启动时间
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
