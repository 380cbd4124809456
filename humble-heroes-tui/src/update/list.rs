//! 列表更新逻辑

use crate::message::ListMessage;
use crate::model::App;

/// 处理列表消息
pub fn update(app: &mut App, msg: ListMessage) {
    match msg {
        ListMessage::SelectPrevious => app.select_previous(),
        ListMessage::SelectNext => app.select_next(),
        ListMessage::SelectFirst => app.select_first(),
        ListMessage::SelectLast => app.select_last(),
    }
}
