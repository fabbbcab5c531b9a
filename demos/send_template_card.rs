use wecom_bot_sdk::{
    Error,
    http::client::WebhookClient,
    model::{
        CardAction, CardHorizontalContent, CardImage, CardJump, CardMainTitle, CardSource,
        ClickType, DescColor, HorizontalContentType, NewsNoticeCard, TextNoticeCard,
    },
};

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
    let key = std::env::var("WECOM_BOT_KEY").unwrap();
    let client = WebhookClient::from_key(&key);

    // 文本通知模版卡片
    let card = TextNoticeCard::new(
        CardMainTitle::new()
            .set_title("欢迎使用企业微信")
            .set_desc("您的好友正在邀请您加入企业微信"),
        CardAction::new(ClickType::Url).set_url("https://work.weixin.qq.com"),
    )
    .set_source(
        CardSource::new()
            .set_icon_url("https://wework.qpic.cn/wwpic/252813_jOfDHtcISzuodLa_1629280209/0")
            .set_desc("企业微信")
            .set_desc_color(DescColor::Grey),
    )
    .set_sub_title("下载企业微信还能抢红包！")
    .set_horizontal_contents([
        CardHorizontalContent::new("邀请人").set_value("张三"),
        CardHorizontalContent::new("企微官网")
            .set_type(HorizontalContentType::Url)
            .set_value("点击访问")
            .set_url("https://work.weixin.qq.com"),
    ])
    .set_jumps([CardJump::new("企业微信官网")
        .set_type(ClickType::Url)
        .set_url("https://work.weixin.qq.com")]);
    let response = client.send_message(card).await?;
    tracing::info!(%response, "text notice card pushed");

    // 图文展示模版卡片
    let card = NewsNoticeCard::new(
        CardMainTitle::new()
            .set_title("欢迎使用企业微信")
            .set_desc("您的好友正在邀请您加入企业微信"),
        CardImage::new("https://wework.qpic.cn/wwpic/354393_4zpkKXd7SrGMvfg_1629280616/0")
            .set_aspect_ratio(2.25),
        CardAction::new(ClickType::Url).set_url("https://work.weixin.qq.com"),
    );
    let response = client.send_message(card).await?;
    tracing::info!(%response, "news notice card pushed");
    Ok(())
}
