use crate::domain::model::GreetingResponse;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Local};

/// 牆上時鐘；問候服務唯一讀取的外部狀態
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// 對遠端 ping 端點發出請求並回傳解析後的問候
#[async_trait]
pub trait PingProbe: Send + Sync {
    async fn ping(&self, name: Option<&str>) -> Result<GreetingResponse>;
}
