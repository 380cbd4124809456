//! 国际化（i18n）模块
//!
//! 使用纯 Rust 结构体方案，编译期类型检查，零运行时开销。
//! 只翻译界面文本；错误提示固定为英文，由 humble-heroes-core 提供。

use std::sync::atomic::{AtomicUsize, Ordering};

mod en_us;
pub mod keys;
mod zh_cn;

pub use keys::*;

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// 英语（美国）
    #[default]
    EnUs,
    /// 简体中文（中国）
    ZhCn,
}

impl Language {
    /// 获取语言代码（BCP 47 标准）
    pub fn code(&self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::ZhCn => "zh-CN",
        }
    }

    /// 从语言代码解析
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en-US" | "en" => Some(Language::EnUs),
            "zh-CN" | "zh" => Some(Language::ZhCn),
            _ => None,
        }
    }
}

/// 当前语言索引（原子操作，线程安全）
static CURRENT_LANGUAGE: AtomicUsize = AtomicUsize::new(0); // 0 = EnUs

/// 获取当前语言的翻译
///
/// ```ignore
/// let text = t().form.add_button; // "Add Superhero" 或 "添加超级英雄"
/// ```
pub fn t() -> &'static Translations {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => &zh_cn::TRANSLATIONS,
        _ => &en_us::TRANSLATIONS,
    }
}

/// 设置当前语言
pub fn set_language(lang: Language) {
    let index = match lang {
        Language::EnUs => 0,
        Language::ZhCn => 1,
    };
    CURRENT_LANGUAGE.store(index, Ordering::Relaxed);
}
