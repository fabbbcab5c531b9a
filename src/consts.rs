/// 群机器人 webhook 接口地址前缀，后面拼上机器人的 key
pub static WEBHOOK_SEND_URL: &str = "https://qyapi.weixin.qq.com/cgi-bin/webhook/send?key=";

/// 由机器人的 key 拼出完整的 webhook 地址
pub fn webhook_url(key: &str) -> String {
    format!("{WEBHOOK_SEND_URL}{key}")
}
