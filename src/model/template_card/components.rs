use serde::Serialize;
use serde_repr::Serialize_repr;

/// 来源文字的颜色
#[derive(Serialize_repr, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum DescColor {
    /// 灰色
    #[default]
    Grey = 0,
    /// 黑色
    Black = 1,
    /// 红色
    Red = 2,
    /// 绿色
    Green = 3,
}

/// 区域点击事件的类型
#[derive(Serialize_repr, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum ClickType {
    /// 没有点击事件
    #[default]
    None = 0,
    /// 跳转 url
    Url = 1,
    /// 跳转小程序
    MiniApp = 2,
}

/// 二级标题+文本列表单项支持的内容类型
#[derive(Serialize_repr, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum HorizontalContentType {
    /// 普通文本
    #[default]
    Text = 0,
    /// 跳转 url
    Url = 1,
    /// 下载附件
    File = 2,
    /// @员工
    MentionUser = 3,
}

/// 卡片来源样式信息，不需要来源样式可不填写
#[derive(Serialize, Clone, Debug, Default)]
pub struct CardSource {
    /// 来源图片的 url
    pub icon_url: String,
    /// 来源图片的描述，建议不超过 13 个字
    pub desc: String,
    /// 来源文字的颜色
    pub desc_color: DescColor,
}

impl CardSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_icon_url(mut self, icon_url: impl Into<String>) -> Self {
        self.icon_url = icon_url.into();
        self
    }

    pub fn set_desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = desc.into();
        self
    }

    pub fn set_desc_color(mut self, desc_color: DescColor) -> Self {
        self.desc_color = desc_color;
        self
    }
}

/// 模版卡片的主要内容，包括一级标题和标题辅助信息
#[derive(Serialize, Clone, Debug, Default)]
pub struct CardMainTitle {
    /// 一级标题，建议不超过 26 个字
    pub title: String,
    /// 标题辅助信息，建议不超过 30 个字
    pub desc: String,
}

impl CardMainTitle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn set_desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = desc.into();
        self
    }
}

/// 关键数据样式
#[derive(Serialize, Clone, Debug, Default)]
pub struct CardEmphasisContent {
    /// 关键数据样式的数据内容，建议不超过 10 个字
    pub title: String,
    /// 关键数据样式的数据描述内容，建议不超过 15 个字
    pub desc: String,
}

impl CardEmphasisContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn set_desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = desc.into();
        self
    }
}

/// 引用文献样式，建议不与关键数据共用
#[derive(Serialize, Clone, Debug, Default)]
pub struct CardQuoteArea {
    /// 引用文献样式区域的点击事件
    pub r#type: ClickType,
    /// 点击跳转的 url，type 为 Url 时必填
    pub url: String,
    /// 点击跳转的小程序的 appid，type 为 MiniApp 时必填
    #[serde(rename = "appid")]
    pub app_id: String,
    /// 点击跳转的小程序的 pagepath，type 为 MiniApp 时选填
    #[serde(rename = "pagepath")]
    pub page_path: String,
    /// 引用文献样式的标题
    pub title: String,
    /// 引用文献样式的引用文案
    pub quote_text: String,
}

impl CardQuoteArea {
    pub fn new(click_type: ClickType) -> Self {
        Self {
            r#type: click_type,
            ..Self::default()
        }
    }

    pub fn set_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn set_app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = app_id.into();
        self
    }

    pub fn set_page_path(mut self, page_path: impl Into<String>) -> Self {
        self.page_path = page_path.into();
        self
    }

    pub fn set_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn set_quote_text(mut self, quote_text: impl Into<String>) -> Self {
        self.quote_text = quote_text.into();
        self
    }
}

/// 图片样式
#[derive(Serialize, Clone, Debug)]
pub struct CardImage {
    /// 图片的 url
    pub url: String,
    /// 图片的宽高比，要小于 2.25、大于 1.3，不填默认 1.3
    pub aspect_ratio: f32,
}

impl CardImage {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            aspect_ratio: 1.3,
        }
    }

    pub fn set_aspect_ratio(mut self, aspect_ratio: f32) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }
}

/// 左图右文样式
#[derive(Serialize, Clone, Debug, Default)]
pub struct CardImageTextArea {
    /// 左图右文样式区域的点击事件
    pub r#type: ClickType,
    /// 点击跳转的 url，type 为 Url 时必填
    pub url: String,
    /// 点击跳转的小程序的 appid，type 为 MiniApp 时必填
    #[serde(rename = "appid")]
    pub app_id: String,
    /// 点击跳转的小程序的 pagepath，type 为 MiniApp 时选填
    #[serde(rename = "pagepath")]
    pub page_path: String,
    /// 左图右文样式的标题
    pub title: String,
    /// 左图右文样式的描述
    pub desc: String,
    /// 左图右文样式的图片 url
    pub image_url: String,
}

impl CardImageTextArea {
    pub fn new(image_url: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
            ..Self::default()
        }
    }

    pub fn set_type(mut self, click_type: ClickType) -> Self {
        self.r#type = click_type;
        self
    }

    pub fn set_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn set_app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = app_id.into();
        self
    }

    pub fn set_page_path(mut self, page_path: impl Into<String>) -> Self {
        self.page_path = page_path.into();
        self
    }

    pub fn set_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn set_desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = desc.into();
        self
    }
}

/// 卡片二级垂直内容
#[derive(Serialize, Clone, Debug, Default)]
pub struct CardVerticalContent {
    /// 卡片二级标题，建议不超过 26 个字
    pub title: String,
    /// 二级普通文本，建议不超过 112 个字
    pub desc: String,
}

impl CardVerticalContent {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn set_desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = desc.into();
        self
    }
}

/// 二级标题+文本列表的单项
#[derive(Serialize, Clone, Debug, Default)]
pub struct CardHorizontalContent {
    /// 单项内容的类型
    pub r#type: HorizontalContentType,
    /// 二级标题，建议不超过 5 个字
    #[serde(rename = "keyname")]
    pub key_name: String,
    /// 二级文本，type 为 File 时代表文件名称（要包含文件类型），建议不超过 26 个字
    pub value: String,
    /// 链接跳转的 url，type 为 Url 时必填
    pub url: String,
    /// 附件的 media_id，type 为 File 时必填
    pub media_id: String,
    /// 被@的成员的 userid，type 为 MentionUser 时必填
    #[serde(rename = "userid")]
    pub user_id: String,
}

impl CardHorizontalContent {
    pub fn new(key_name: impl Into<String>) -> Self {
        Self {
            key_name: key_name.into(),
            ..Self::default()
        }
    }

    pub fn set_type(mut self, content_type: HorizontalContentType) -> Self {
        self.r#type = content_type;
        self
    }

    pub fn set_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn set_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn set_media_id(mut self, media_id: impl Into<String>) -> Self {
        self.media_id = media_id.into();
        self
    }

    pub fn set_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }
}

/// 跳转指引样式的单项
#[derive(Serialize, Clone, Debug, Default)]
pub struct CardJump {
    /// 跳转链接的类型
    pub r#type: ClickType,
    /// 跳转链接样式的文案内容，建议不超过 13 个字
    pub title: String,
    /// 跳转链接的 url，type 为 Url 时必填
    pub url: String,
    /// 跳转链接的小程序的 appid，type 为 MiniApp 时必填
    #[serde(rename = "appid")]
    pub app_id: String,
    /// 跳转链接的小程序的 pagepath，type 为 MiniApp 时选填
    #[serde(rename = "pagepath")]
    pub page_path: String,
}

impl CardJump {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn set_type(mut self, click_type: ClickType) -> Self {
        self.r#type = click_type;
        self
    }

    pub fn set_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn set_app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = app_id.into();
        self
    }

    pub fn set_page_path(mut self, page_path: impl Into<String>) -> Self {
        self.page_path = page_path.into();
        self
    }
}

/// 整体卡片的点击跳转事件
#[derive(Serialize, Clone, Debug, Default)]
pub struct CardAction {
    /// 卡片跳转的类型
    pub r#type: ClickType,
    /// 跳转事件的 url，type 为 Url 时必填
    pub url: String,
    /// 跳转事件的小程序的 appid，type 为 MiniApp 时必填
    #[serde(rename = "appid")]
    pub app_id: String,
    /// 跳转事件的小程序的 pagepath，type 为 MiniApp 时选填
    #[serde(rename = "pagepath")]
    pub page_path: String,
}

impl CardAction {
    pub fn new(click_type: ClickType) -> Self {
        Self {
            r#type: click_type,
            ..Self::default()
        }
    }

    pub fn set_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn set_app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = app_id.into();
        self
    }

    pub fn set_page_path(mut self, page_path: impl Into<String>) -> Self {
        self.page_path = page_path.into();
        self
    }
}
