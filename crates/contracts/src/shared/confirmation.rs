//! Подтверждение разрушающих действий: удаление устройства и массовый импорт.

/// Текст вопроса перед удалением устройства
pub fn delete_prompt(device_id: &str) -> String {
    format!("Are you sure you want to delete device ID {}?", device_id)
}

/// Что делать с отправкой формы после диалога подтверждения
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitDecision {
    Proceed,
    Cancel,
}

impl SubmitDecision {
    /// `None`: браузер не смог показать диалог, форма уходит как обычно
    pub fn from_answer(answer: Option<bool>) -> Self {
        match answer {
            Some(false) => SubmitDecision::Cancel,
            Some(true) | None => SubmitDecision::Proceed,
        }
    }
}

/// Состояние модального окна подтверждения импорта
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ImportDialog {
    #[default]
    Closed,
    Pending { file_name: String },
}

/// Действие над формой импорта после нажатия кнопки в окне
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportAction {
    /// Очистить выбранный файл и закрыть окно
    ClearFile,
    /// Закрыть окно и отправить форму
    Submit,
    Ignore,
}

impl ImportDialog {
    pub fn is_open(&self) -> bool {
        matches!(self, ImportDialog::Pending { .. })
    }

    /// Пользователь выбрал файл (или очистил выбор)
    pub fn file_chosen(&mut self, file_name: Option<String>) {
        *self = match file_name {
            Some(file_name) => ImportDialog::Pending { file_name },
            None => ImportDialog::Closed,
        };
    }

    pub fn cancel(&mut self) -> ImportAction {
        *self = ImportDialog::Closed;
        ImportAction::ClearFile
    }

    pub fn confirm(&mut self) -> ImportAction {
        match std::mem::take(self) {
            ImportDialog::Pending { .. } => ImportAction::Submit,
            ImportDialog::Closed => ImportAction::Ignore,
        }
    }

    /// Текст для окна подтверждения
    pub fn prompt(&self) -> Option<String> {
        match self {
            ImportDialog::Pending { file_name } => Some(format!("Import devices from {}?", file_name)),
            ImportDialog::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_prompt() {
        assert_eq!(delete_prompt("42"), "Are you sure you want to delete device ID 42?");
    }

    #[test]
    fn test_submit_decision() {
        assert_eq!(SubmitDecision::from_answer(Some(false)), SubmitDecision::Cancel);
        assert_eq!(SubmitDecision::from_answer(Some(true)), SubmitDecision::Proceed);
        assert_eq!(SubmitDecision::from_answer(None), SubmitDecision::Proceed);
    }

    #[test]
    fn test_import_cancel_clears_file() {
        let mut dialog = ImportDialog::default();
        dialog.file_chosen(Some("devices.csv".to_string()));
        assert!(dialog.is_open());
        assert_eq!(dialog.prompt().as_deref(), Some("Import devices from devices.csv?"));
        assert_eq!(dialog.cancel(), ImportAction::ClearFile);
        assert!(!dialog.is_open());
    }

    #[test]
    fn test_import_confirm_submits_once() {
        let mut dialog = ImportDialog::default();
        dialog.file_chosen(Some("devices.csv".to_string()));
        assert_eq!(dialog.confirm(), ImportAction::Submit);
        assert_eq!(dialog.confirm(), ImportAction::Ignore);
        assert_eq!(dialog, ImportDialog::Closed);
    }

    #[test]
    fn test_empty_file_choice_keeps_dialog_closed() {
        let mut dialog = ImportDialog::default();
        dialog.file_chosen(None);
        assert!(!dialog.is_open());
        assert_eq!(dialog.confirm(), ImportAction::Ignore);
    }
}
