use serde::Serialize;

use super::message::MsgType;

/// 图文消息
#[derive(Serialize, Clone, Debug, Default)]
pub struct NewsMessage {
    /// 图文列表，一条图文消息支持 1 到 8 条图文
    pub articles: Vec<Article>,
}

impl NewsMessage {
    pub fn new(articles: impl IntoIterator<Item = Article>) -> Self {
        Self {
            articles: articles.into_iter().collect(),
        }
    }

    /// 向图文列表追加
    pub fn add_articles(mut self, articles: impl IntoIterator<Item = Article>) -> Self {
        self.articles.extend(articles);
        self
    }

    pub const fn msg_type(&self) -> MsgType {
        MsgType::News
    }
}

/// 图文消息中的一条图文
#[derive(Serialize, Clone, Debug, Default)]
pub struct Article {
    /// 标题，不超过 128 个字节，超过会自动截断
    pub title: String,
    /// 描述，不超过 512 个字节，超过会自动截断
    pub description: String,
    /// 点击后跳转的链接
    pub url: String,
    /// 图文消息的图片链接，支持 JPG、PNG 格式，较好的效果为大图 1068*455，小图 150*150
    #[serde(rename = "picurl")]
    pub pic_url: String,
}

impl Article {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn set_desc(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    pub fn set_pic_url(mut self, pic_url: impl Into<String>) -> Self {
        self.pic_url = pic_url.into();
        self
    }
}
