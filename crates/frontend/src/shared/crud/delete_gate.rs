/// Подтверждение удаления: `Idle -> Pending(id) -> Deleting(id) -> Idle`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteGate {
    #[default]
    Idle,
    Pending(i64),
    Deleting(i64),
}

impl DeleteGate {
    /// Открывает запрос подтверждения. Во время удаления игнорируется.
    pub fn request(&mut self, id: i64) -> bool {
        match self {
            DeleteGate::Deleting(_) => false,
            _ => {
                *self = DeleteGate::Pending(id);
                true
            }
        }
    }

    /// Возвращает id к удалению ровно один раз
    pub fn confirm(&mut self) -> Option<i64> {
        match *self {
            DeleteGate::Pending(id) => {
                *self = DeleteGate::Deleting(id);
                Some(id)
            }
            _ => None,
        }
    }

    pub fn cancel(&mut self) -> bool {
        match self {
            DeleteGate::Pending(_) => {
                *self = DeleteGate::Idle;
                true
            }
            _ => false,
        }
    }

    /// Удаление завершено (успешно или нет)
    pub fn finish(&mut self) {
        *self = DeleteGate::Idle;
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, DeleteGate::Idle)
    }

    pub fn is_deleting(&self) -> bool {
        matches!(self, DeleteGate::Deleting(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_yields_id_once() {
        let mut gate = DeleteGate::default();
        assert!(gate.request(7));
        assert_eq!(gate, DeleteGate::Pending(7));
        assert_eq!(gate.confirm(), Some(7));
        assert_eq!(gate, DeleteGate::Deleting(7));
        assert_eq!(gate.confirm(), None);
        gate.finish();
        assert_eq!(gate, DeleteGate::Idle);
    }

    #[test]
    fn test_cancel_discards_pending_target() {
        let mut gate = DeleteGate::default();
        gate.request(3);
        assert!(gate.cancel());
        assert_eq!(gate, DeleteGate::Idle);
        assert_eq!(gate.confirm(), None);
        assert!(!gate.cancel());
    }

    #[test]
    fn test_deleting_ignores_cancel_and_new_requests() {
        let mut gate = DeleteGate::Pending(1);
        gate.confirm();
        assert!(!gate.cancel());
        assert!(!gate.request(2));
        assert_eq!(gate, DeleteGate::Deleting(1));
        assert!(gate.is_deleting());
    }

    #[test]
    fn test_request_replaces_pending_target() {
        let mut gate = DeleteGate::Pending(1);
        gate.request(2);
        assert_eq!(gate.confirm(), Some(2));
    }
}
