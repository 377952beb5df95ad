#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Всплывающее уведомление. `seq` растёт с каждым новым уведомлением,
/// таймер скрывает только «своё».
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub seq: u64,
    pub kind: NoticeKind,
    pub text: String,
}

/// Сколько уведомление висит на экране
pub const NOTICE_TIMEOUT_MS: u32 = 3_000;
