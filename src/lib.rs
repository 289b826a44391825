//! Student Model - 学生数据模型
//!
//! 前端表单与 HTTP 服务共用的学生数据传输对象，并通过 ts-rs 导出
//! TypeScript 接口 `IStudent`。
//!
//! # 架构
//! - `config`: 配置管理
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `services`: 请求体解析与检查

pub mod config;
pub mod errors;
pub mod models;
pub mod services;
