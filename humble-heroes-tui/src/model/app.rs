//! 应用主状态结构

use humble_heroes_core::{update, Command, ViewEvent, ViewState};

use super::{FormField, Modal};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 列表、草稿、加载与错误状态（由 reducer 管理）
    pub view: ViewState,

    /// 当前焦点控件
    pub focus: FormField,

    /// 列表中选中的索引
    pub selected: usize,

    /// 当前弹窗
    pub modal: Option<Modal>,

    /// API 地址（显示在状态栏）
    pub endpoint: String,
}

impl App {
    /// 创建新的应用实例（尚未挂载）
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            view: ViewState::default(),
            focus: FormField::default(),
            selected: 0,
            modal: None,
            endpoint: endpoint.into(),
        }
    }

    /// 挂载视图，返回首次拉取列表的命令
    pub fn mount(&mut self, session: u64) -> Option<Command> {
        self.apply(ViewEvent::Mounted { session })
    }

    /// 将事件交给 reducer，返回需要执行的网络命令
    pub fn apply(&mut self, event: ViewEvent) -> Option<Command> {
        let (next, command) = update(std::mem::take(&mut self.view), event);
        self.view = next;
        self.clamp_selection();
        command
    }

    /// 谦逊分数输入框当前显示的文本
    pub fn humility_text(&self) -> String {
        self.view.draft.humility_score.to_string()
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.view.records.len() {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self) {
        self.selected = self.view.records.len().saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        if self.selected >= self.view.records.len() {
            self.select_last();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use humble_heroes_client::Superhero;

    fn hero(id: &str) -> Superhero {
        Superhero {
            id: id.to_string(),
            name: format!("Hero {id}"),
            superpower: "flight".to_string(),
            humility_score: 5,
        }
    }

    fn mounted_with(count: usize) -> App {
        let mut app = App::new("http://localhost/api");
        app.mount(1);
        app.apply(ViewEvent::FetchSucceeded {
            session: 1,
            records: (0..count).map(|i| hero(&i.to_string())).collect(),
        });
        app
    }

    #[test]
    fn mount_requests_list() {
        let mut app = App::new("http://localhost/api");
        let command = app.mount(1);
        assert_eq!(command, Some(Command::FetchList { session: 1 }));
        assert!(app.view.loading);
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut app = mounted_with(3);
        app.select_previous();
        assert_eq!(app.selected, 0);
        app.select_last();
        assert_eq!(app.selected, 2);
        app.select_next();
        assert_eq!(app.selected, 2);
    }

    #[test]
    fn selection_clamped_when_list_shrinks() {
        let mut app = mounted_with(5);
        app.select_last();
        app.apply(ViewEvent::RefreshRequested);
        app.apply(ViewEvent::FetchSucceeded {
            session: 1,
            records: vec![hero("a")],
        });
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn humility_text_shows_zero_initially() {
        let app = mounted_with(0);
        assert_eq!(app.humility_text(), "0");
    }
}
