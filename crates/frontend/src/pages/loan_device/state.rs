use contracts::domain::a001_device::DeviceRow;
use contracts::shared::loan_selection::LoanSelection;
use contracts::shared::page_config::LoanPageConfig;
use leptos::prelude::*;

/// Состояние выбора живёт в арене leptos; хэндл `Copy`, его можно
/// захватывать в любое количество обработчиков.
pub fn create_state(rows: Vec<DeviceRow>, config: LoanPageConfig) -> StoredValue<LoanSelection> {
    StoredValue::new(LoanSelection::new(rows, config))
}
