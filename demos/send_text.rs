use wecom_bot_sdk::{Error, http::client::WebhookClient, model::TextMessage};

#[tokio::main]
async fn main() {
    async_main().await.unwrap();
}

async fn async_main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,wecom_bot_sdk=debug")),
        )
        .init();
    // 群机器人的 key，建群后在机器人资料页查看
    let key = std::env::var("WECOM_BOT_KEY").unwrap();
    let client = WebhookClient::from_key(&key);

    let message = TextMessage::new("广州今日天气：29度，大部分多云，降雨概率：60%")
        .add_user_ids(["wangqing"])
        .add_mobiles(["13800001111"]);
    let response = client.send_message(message).await?;
    tracing::info!(%response, "text message pushed");

    let response = client
        .send_message(TextMessage::new_at_all("开会啦！"))
        .await?;
    tracing::info!(%response, "at-all message pushed");
    Ok(())
}
