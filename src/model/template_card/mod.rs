//! 模版卡片消息
//!
//! 两种模版，由 `card_type` 区分:
//!
//! - `text_notice` 文本通知模版卡片 [`TextNoticeCard`]
//! - `news_notice` 图文展示模版卡片 [`NewsNoticeCard`]

use serde::Serialize;

mod components;
pub use components::*;

use super::message::MsgType;

/// 模版卡片的类型
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardType {
    /// 文本通知模版
    TextNotice,
    /// 图文展示模版
    NewsNotice,
}

impl CardType {
    pub const fn as_str(self) -> &'static str {
        match self {
            CardType::TextNotice => "text_notice",
            CardType::NewsNotice => "news_notice",
        }
    }
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 模版卡片消息的内容，序列化时以 `card_type` 字段标记模版
#[derive(Serialize, Clone, Debug)]
#[serde(tag = "card_type", rename_all = "snake_case")]
pub enum TemplateCard {
    TextNotice(TextNoticeCard),
    NewsNotice(NewsNoticeCard),
}

impl TemplateCard {
    pub const fn card_type(&self) -> CardType {
        match self {
            TemplateCard::TextNotice(_) => CardType::TextNotice,
            TemplateCard::NewsNotice(_) => CardType::NewsNotice,
        }
    }

    pub const fn msg_type(&self) -> MsgType {
        MsgType::TemplateCard
    }
}

impl From<TextNoticeCard> for TemplateCard {
    fn from(card: TextNoticeCard) -> Self {
        TemplateCard::TextNotice(card)
    }
}

impl From<NewsNoticeCard> for TemplateCard {
    fn from(card: NewsNoticeCard) -> Self {
        TemplateCard::NewsNotice(card)
    }
}

/// 文本通知模版卡片
#[derive(Serialize, Clone, Debug)]
pub struct TextNoticeCard {
    /// 卡片来源样式信息
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<CardSource>,
    /// 模版卡片的主要内容
    pub main_title: CardMainTitle,
    /// 关键数据样式
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emphasis_content: Option<CardEmphasisContent>,
    /// 引用文献样式，建议不与关键数据共用
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_area: Option<CardQuoteArea>,
    /// 二级普通文本，建议不超过 112 个字
    pub sub_title_text: String,
    /// 二级标题+文本列表，列表长度不超过 6
    #[serde(
        rename = "horizontal_content_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub horizontal_contents: Vec<CardHorizontalContent>,
    /// 跳转指引样式的列表，列表长度不超过 3
    #[serde(rename = "jump_list", skip_serializing_if = "Vec::is_empty")]
    pub jumps: Vec<CardJump>,
    /// 整体卡片的点击跳转事件
    #[serde(rename = "card_action")]
    pub action: CardAction,
}

impl TextNoticeCard {
    pub fn new(main_title: CardMainTitle, action: CardAction) -> Self {
        Self {
            source: None,
            main_title,
            emphasis_content: None,
            quote_area: None,
            sub_title_text: String::new(),
            horizontal_contents: Vec::new(),
            jumps: Vec::new(),
            action,
        }
    }

    pub const fn msg_type(&self) -> MsgType {
        MsgType::TemplateCard
    }

    pub fn set_source(mut self, source: CardSource) -> Self {
        self.source = Some(source);
        self
    }

    pub fn set_emphasis_content(mut self, emphasis_content: CardEmphasisContent) -> Self {
        self.emphasis_content = Some(emphasis_content);
        self
    }

    pub fn set_quote_area(mut self, quote_area: CardQuoteArea) -> Self {
        self.quote_area = Some(quote_area);
        self
    }

    pub fn set_sub_title(mut self, sub_title_text: impl Into<String>) -> Self {
        self.sub_title_text = sub_title_text.into();
        self
    }

    /// 替换整个二级标题+文本列表
    pub fn set_horizontal_contents(
        mut self,
        contents: impl IntoIterator<Item = CardHorizontalContent>,
    ) -> Self {
        self.horizontal_contents = contents.into_iter().collect();
        self
    }

    /// 在二级标题+文本列表尾部追加
    pub fn add_horizontal_contents(
        mut self,
        contents: impl IntoIterator<Item = CardHorizontalContent>,
    ) -> Self {
        self.horizontal_contents.extend(contents);
        self
    }

    /// 替换整个跳转指引列表
    pub fn set_jumps(mut self, jumps: impl IntoIterator<Item = CardJump>) -> Self {
        self.jumps = jumps.into_iter().collect();
        self
    }

    /// 在跳转指引列表尾部追加
    pub fn add_jumps(mut self, jumps: impl IntoIterator<Item = CardJump>) -> Self {
        self.jumps.extend(jumps);
        self
    }
}

/// 图文展示模版卡片
#[derive(Serialize, Clone, Debug)]
pub struct NewsNoticeCard {
    /// 卡片来源样式信息
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<CardSource>,
    /// 模版卡片的主要内容
    pub main_title: CardMainTitle,
    /// 图片样式
    #[serde(rename = "card_image")]
    pub image: CardImage,
    /// 左图右文样式
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_text_area: Option<CardImageTextArea>,
    /// 引用文献样式
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_area: Option<CardQuoteArea>,
    /// 卡片二级垂直内容，列表长度不超过 4
    #[serde(rename = "vertical_content_list", skip_serializing_if = "Vec::is_empty")]
    pub vertical_contents: Vec<CardVerticalContent>,
    /// 二级标题+文本列表，列表长度不超过 6
    #[serde(
        rename = "horizontal_content_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub horizontal_contents: Vec<CardHorizontalContent>,
    /// 跳转指引样式的列表，列表长度不超过 3
    #[serde(rename = "jump_list", skip_serializing_if = "Vec::is_empty")]
    pub jumps: Vec<CardJump>,
    /// 整体卡片的点击跳转事件
    #[serde(rename = "card_action")]
    pub action: CardAction,
}

impl NewsNoticeCard {
    pub fn new(main_title: CardMainTitle, image: CardImage, action: CardAction) -> Self {
        Self {
            source: None,
            main_title,
            image,
            image_text_area: None,
            quote_area: None,
            vertical_contents: Vec::new(),
            horizontal_contents: Vec::new(),
            jumps: Vec::new(),
            action,
        }
    }

    pub const fn msg_type(&self) -> MsgType {
        MsgType::TemplateCard
    }

    pub fn set_source(mut self, source: CardSource) -> Self {
        self.source = Some(source);
        self
    }

    pub fn set_image_text_area(mut self, image_text_area: CardImageTextArea) -> Self {
        self.image_text_area = Some(image_text_area);
        self
    }

    pub fn set_quote_area(mut self, quote_area: CardQuoteArea) -> Self {
        self.quote_area = Some(quote_area);
        self
    }

    /// 替换整个二级垂直内容列表
    pub fn set_vertical_contents(
        mut self,
        contents: impl IntoIterator<Item = CardVerticalContent>,
    ) -> Self {
        self.vertical_contents = contents.into_iter().collect();
        self
    }

    /// 在二级垂直内容列表尾部追加
    pub fn add_vertical_contents(
        mut self,
        contents: impl IntoIterator<Item = CardVerticalContent>,
    ) -> Self {
        self.vertical_contents.extend(contents);
        self
    }

    /// 替换整个二级标题+文本列表
    pub fn set_horizontal_contents(
        mut self,
        contents: impl IntoIterator<Item = CardHorizontalContent>,
    ) -> Self {
        self.horizontal_contents = contents.into_iter().collect();
        self
    }

    /// 在二级标题+文本列表尾部追加
    pub fn add_horizontal_contents(
        mut self,
        contents: impl IntoIterator<Item = CardHorizontalContent>,
    ) -> Self {
        self.horizontal_contents.extend(contents);
        self
    }

    /// 替换整个跳转指引列表
    pub fn set_jumps(mut self, jumps: impl IntoIterator<Item = CardJump>) -> Self {
        self.jumps = jumps.into_iter().collect();
        self
    }

    /// 在跳转指引列表尾部追加
    pub fn add_jumps(mut self, jumps: impl IntoIterator<Item = CardJump>) -> Self {
        self.jumps.extend(jumps);
        self
    }
}
