use std::sync::Arc;

use reqwest::{ClientBuilder, header::CONTENT_TYPE};

use crate::{consts, http::api::WebhookResponse, model::Message};

/// 群机器人 webhook 客户端
///
/// 内部持有连接池，Clone 开销很小，可以在多个任务间共享。
#[derive(Clone, Debug)]
pub struct WebhookClient {
    client: reqwest::Client,
    webhook: Arc<str>,
}

impl WebhookClient {
    /// 用完整的 webhook 地址构建一个默认的客户端
    pub fn new(webhook: &str) -> Self {
        let client = ClientBuilder::new().build().unwrap_or_default();
        Self {
            client,
            webhook: webhook.into(),
        }
    }

    /// 用机器人的 key 构建一个默认的客户端
    pub fn from_key(key: &str) -> Self {
        Self::new(consts::webhook_url(key).as_str())
    }

    /// 自己提供一个客户端
    pub fn from_client(client: reqwest::Client, webhook: &str) -> Self {
        Self {
            client,
            webhook: webhook.into(),
        }
    }

    /// 客户端绑定的 webhook 地址
    pub fn webhook(&self) -> &str {
        &self.webhook
    }

    /// 向绑定的 webhook 推送一条消息
    ///
    /// 报文送达而被接口拒绝时同样返回 `Ok`，
    /// 用 [`WebhookResponse::is_success`] 区分推送是否被接受。
    pub async fn send_message(
        &self,
        message: impl Into<Message>,
    ) -> crate::Result<WebhookResponse> {
        let webhook = self.webhook.clone();
        self.send_message_by_url(&webhook, message).await
    }

    /// 向指定的 webhook 地址推送一条消息，不使用客户端绑定的地址
    pub async fn send_message_by_url(
        &self,
        url: &str,
        message: impl Into<Message>,
    ) -> crate::Result<WebhookResponse> {
        let message = message.into();
        tracing::debug!(msg_type = %message.msg_type(), "push message to webhook");
        let body =
            serde_json::to_vec(&message).map_err(crate::Error::context("serialize message"))?;
        self.post(url, body).await
    }

    /// 把序列化好的 JSON 报文原样推送到绑定的 webhook
    ///
    /// 报文不经过消息模型，内容是否符合接口要求由调用方负责。
    pub async fn send_raw(&self, body: impl Into<String>) -> crate::Result<WebhookResponse> {
        let webhook = self.webhook.clone();
        self.send_raw_by_url(&webhook, body).await
    }

    /// 把序列化好的 JSON 报文原样推送到指定的 webhook 地址
    pub async fn send_raw_by_url(
        &self,
        url: &str,
        body: impl Into<String>,
    ) -> crate::Result<WebhookResponse> {
        let body = body.into();
        tracing::debug!(len = body.len(), "push raw body to webhook");
        self.post(url, body.into_bytes()).await
    }

    async fn post(&self, url: &str, body: Vec<u8>) -> crate::Result<WebhookResponse> {
        let resp = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(crate::Error::context("send webhook request"))?;
        let response = resp
            .json::<WebhookResponse>()
            .await
            .map_err(crate::Error::context("parse webhook response"))?;
        if !response.is_success() {
            tracing::warn!(
                errcode = response.errcode,
                errmsg = %response.errmsg,
                "message rejected by webhook"
            );
        }
        Ok(response)
    }
}
