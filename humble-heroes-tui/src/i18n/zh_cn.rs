//! 简体中文翻译 (zh-CN)

use super::keys::{AppTexts, FormTexts, HelpTexts, HintTexts, ListTexts, Translations};

pub const TRANSLATIONS: Translations = Translations {
    app: AppTexts {
        title: "🦸 谦逊的超级英雄",
        api: "接口",
    },
    form: FormTexts {
        title: "新的超级英雄",
        name_label: "名字",
        superpower_label: "超能力",
        humility_label: "谦逊分数",
        add_button: "添加超级英雄",
        adding: "添加中...",
    },
    list: ListTexts {
        title: "超级英雄",
        loading: "正在加载超级英雄...",
        empty: "还没有超级英雄",
        power: "能力",
        humility: "谦逊",
    },
    hints: HintTexts {
        switch_field: "切换字段",
        submit: "添加",
        select: "选择",
        refresh: "刷新",
        help: "帮助",
        quit: "退出",
        close: "关闭",
    },
    help: HelpTexts {
        title: " 帮助 ",
        form_section: "表单",
        global_section: "全局快捷键",
        next_field: "下一个字段",
        prev_field: "上一个字段",
        submit: "添加超级英雄",
        delete_char: "删除字符",
        select: "移动选中项",
        jump: "第一个 / 最后一个",
        refresh: "重新加载列表",
        help: "显示帮助",
        quit: "退出",
        close_hint: "按 Esc 关闭帮助",
    },
};
