//! 数据库网关客户端
//!
//! 通过 HTTP 调用远程 API 网关访问数据库，客户端无需 VPN，
//! 也不直连数据库，仅消费网关的 JSON 接口。

pub mod client;
pub mod demo;
pub mod format;

pub use client::GatewayClient;
