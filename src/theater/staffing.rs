//! 人手输入解析
//!
//! 三个回答（收银员 / 零食售卖员 / 检票员）都必须是纯数字，否则整体退回 1/1/1。

use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Staffing {
    pub cashiers: u32,
    pub servers: u32,
    pub ushers: u32,
}

impl Default for Staffing {
    fn default() -> Self {
        Self {
            cashiers: 1,
            servers: 1,
            ushers: 1,
        }
    }
}

fn parse_count(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// 按顺序解析收银员、零食售卖员、检票员人数。
///
/// 只检查是否为数字；`0` 能通过这里，由配置校验拒绝。
pub fn parse_staffing(cashiers: &str, servers: &str, ushers: &str) -> Option<Staffing> {
    Some(Staffing {
        cashiers: parse_count(cashiers)?,
        servers: parse_count(servers)?,
        ushers: parse_count(ushers)?,
    })
}

/// 同 `parse_staffing`，但非法输入时告警并使用 1/1/1。
pub fn staffing_or_default(cashiers: &str, servers: &str, ushers: &str) -> Staffing {
    parse_staffing(cashiers, servers, ushers).unwrap_or_else(|| {
        warn!(
            cashiers,
            servers,
            ushers,
            "The input is not valid. We will be using 1 cashier, 1 server, 1 usher"
        );
        Staffing::default()
    })
}
