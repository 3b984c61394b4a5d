//! Сортировка строк таблицы по колонке: ключи, направление, индикаторы.
//!
//! DOM здесь не используется: на вход приходят тексты ячеек, на выход
//! порядок индексов строк. Переставляет элементы фронтенд.

use std::cmp::Ordering;
use std::collections::HashMap;

/// Тип значения в колонке
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKind {
    Numeric,
    Text,
}

impl SortKind {
    /// Разбор значения атрибута `data-sort-type`
    pub fn from_attr(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "number" | "numeric" => SortKind::Numeric,
            _ => SortKind::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Состояние индикатора в заголовке колонки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    Neutral,
    Ascending,
    Descending,
}

impl SortIndicator {
    pub fn glyph(&self) -> &'static str {
        match self {
            SortIndicator::Neutral => "⇅",
            SortIndicator::Ascending => "▲",
            SortIndicator::Descending => "▼",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            SortIndicator::Neutral => "sort-none",
            SortIndicator::Ascending => "sort-asc",
            SortIndicator::Descending => "sort-desc",
        }
    }

    pub fn all_classes() -> [&'static str; 3] {
        ["sort-none", "sort-asc", "sort-desc"]
    }
}

impl From<SortDirection> for SortIndicator {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Ascending => SortIndicator::Ascending,
            SortDirection::Descending => SortIndicator::Descending,
        }
    }
}

/// Индикатор для колонки `column`, если последней сортировали `sorted`
pub fn indicator_for(column: usize, sorted: usize, direction: SortDirection) -> SortIndicator {
    if column == sorted {
        direction.into()
    } else {
        SortIndicator::Neutral
    }
}

/// Направления сортировки по парам (таблица, колонка).
/// Живёт, пока открыта страница.
#[derive(Debug, Clone, Default)]
pub struct SortState {
    directions: HashMap<(String, usize), SortDirection>,
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Следующее направление для колонки: первый вызов даёт Ascending,
    /// каждый следующий переключает.
    pub fn next(&mut self, table_id: &str, column: usize) -> SortDirection {
        let direction = match self.directions.get(&(table_id.to_string(), column)) {
            Some(previous) => previous.toggled(),
            None => SortDirection::Ascending,
        };
        self.directions
            .insert((table_id.to_string(), column), direction);
        direction
    }
}

/// Числовой ключ ячейки: остаются только цифры, `.` и `-`, затем берётся
/// самое длинное число в начале строки. Если разобрать нечего, 0.
pub fn numeric_key(text: &str) -> f64 {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    leading_number(&cleaned).unwrap_or(0.0)
}

fn leading_number(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut end = 0;
    if bytes.first() == Some(&b'-') {
        end = 1;
    }
    let mut digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        let mut frac_end = end + 1;
        let mut frac_digits = 0;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
            frac_digits += 1;
        }
        if frac_digits > 0 || digits > 0 {
            end = frac_end;
            digits += frac_digits;
        }
    }
    if digits == 0 {
        return None;
    }
    s[..end].trim_end_matches('.').parse().ok()
}

/// Сравнение строк для текстовых колонок
pub trait TextCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

/// Естественный порядок без учёта регистра: последовательности цифр
/// сравниваются как числа ("item 2" < "item 10"). Диакритика латиницы
/// снимается ("école" рядом с "ecole"), остальное сравнивается по кодовым
/// точкам, правил конкретной локали здесь нет.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaturalCollator;

impl TextCollator for NaturalCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        let a = chunks(a);
        let b = chunks(b);
        for (left, right) in a.iter().zip(b.iter()) {
            let ordering = match (left, right) {
                (Chunk::Digits(x), Chunk::Digits(y)) => compare_digit_runs(x, y),
                (Chunk::Digits(_), Chunk::Text(_)) => Ordering::Less,
                (Chunk::Text(_), Chunk::Digits(_)) => Ordering::Greater,
                (Chunk::Text(x), Chunk::Text(y)) => x.cmp(y),
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        a.len().cmp(&b.len())
    }
}

#[derive(Debug, PartialEq)]
enum Chunk {
    Digits(String),
    Text(String),
}

fn chunks(s: &str) -> Vec<Chunk> {
    let mut result: Vec<Chunk> = Vec::new();
    for c in s.trim().chars() {
        let is_digit = c.is_ascii_digit();
        match (result.last_mut(), is_digit) {
            (Some(Chunk::Digits(run)), true) => {
                run.push(c);
                continue;
            }
            (Some(Chunk::Text(run)), false) => {
                run.extend(c.to_lowercase().map(fold_accent));
                continue;
            }
            _ => {}
        }
        if is_digit {
            result.push(Chunk::Digits(c.to_string()));
        } else {
            result.push(Chunk::Text(c.to_lowercase().map(fold_accent).collect()));
        }
    }
    result
}

/// Строчная латинская буква с диакритикой -> базовая буква
fn fold_accent(c: char) -> char {
    match c {
        'à'..='å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'ď' => 'd',
        'è'..='ë' | 'ē' | 'ė' | 'ę' | 'ě' => 'e',
        'ì'..='ï' | 'ī' | 'į' => 'i',
        'ł' => 'l',
        'ñ' | 'ń' | 'ň' => 'n',
        'ò'..='ö' | 'ø' | 'ō' | 'ő' => 'o',
        'ř' => 'r',
        'ś' | 'š' => 's',
        'ť' => 't',
        'ù'..='ü' | 'ū' | 'ů' | 'ű' => 'u',
        'ý' | 'ÿ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        _ => c,
    }
}

fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Порядок строк после сортировки: `result[i]` это исходный индекс строки,
/// которая встаёт на позицию `i`. Равные ключи сохраняют исходный порядок.
pub fn sort_order<C>(cells: &[String], kind: SortKind, direction: SortDirection, collator: &C) -> Vec<usize>
where
    C: TextCollator + ?Sized,
{
    let mut order: Vec<usize> = (0..cells.len()).collect();
    match kind {
        SortKind::Numeric => {
            let keys: Vec<f64> = cells.iter().map(|c| numeric_key(c)).collect();
            order.sort_by(|&a, &b| direction.apply(keys[a].total_cmp(&keys[b])));
        }
        SortKind::Text => {
            order.sort_by(|&a, &b| direction.apply(collator.compare(&cells[a], &cells[b])));
        }
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_direction_alternates_per_column() {
        let mut state = SortState::new();
        assert_eq!(state.next("devices-table", 2), SortDirection::Ascending);
        assert_eq!(state.next("devices-table", 2), SortDirection::Descending);
        // Другая колонка начинает с Ascending и не сбрасывает первую
        assert_eq!(state.next("devices-table", 0), SortDirection::Ascending);
        assert_eq!(state.next("devices-table", 2), SortDirection::Ascending);
        assert_eq!(state.next("loans-table", 2), SortDirection::Ascending);
    }

    #[test]
    fn test_numeric_key() {
        assert_eq!(numeric_key("$15"), 15.0);
        assert_eq!(numeric_key("$120 (Qty: 3)"), 1203.0);
        assert_eq!(numeric_key("1,234.50"), 1234.5);
        assert_eq!(numeric_key("-7 units"), -7.0);
        assert_eq!(numeric_key(".5"), 0.5);
        assert_eq!(numeric_key("12.3.4"), 12.3);
        assert_eq!(numeric_key("n/a"), 0.0);
        assert_eq!(numeric_key("-"), 0.0);
        assert_eq!(numeric_key(""), 0.0);
    }

    #[test]
    fn test_numeric_sort_ascending_and_descending() {
        let values = cells(&["$120 (Qty: 3)", "$15", "n/a"]);
        let asc = sort_order(&values, SortKind::Numeric, SortDirection::Ascending, &NaturalCollator);
        assert_eq!(asc, vec![2, 1, 0]);
        let desc = sort_order(&values, SortKind::Numeric, SortDirection::Descending, &NaturalCollator);
        assert_eq!(desc, vec![0, 1, 2]);
    }

    #[test]
    fn test_natural_collator() {
        let c = NaturalCollator;
        assert_eq!(c.compare("item 2", "item 10"), Ordering::Less);
        assert_eq!(c.compare("Laptop", "laptop"), Ordering::Equal);
        assert_eq!(c.compare("apple", "Banana"), Ordering::Less);
        assert_eq!(c.compare("SHC-LQ-007", "SHC-LQ-7"), Ordering::Equal);
        assert_eq!(c.compare("abc", "abcd"), Ordering::Less);
        assert_eq!(c.compare("10", "9"), Ordering::Greater);
    }

    #[test]
    fn test_natural_collator_ignores_accents() {
        let c = NaturalCollator;
        assert_eq!(c.compare("école", "fax"), Ordering::Less);
        assert_eq!(c.compare("Élan", "elan"), Ordering::Equal);
        assert_eq!(c.compare("Čtečka 2", "ctecka 10"), Ordering::Less);

        let values = cells(&["fax", "école", "dock"]);
        let order = sort_order(&values, SortKind::Text, SortDirection::Ascending, &c);
        assert_eq!(order, vec![2, 1, 0]);
    }

    #[test]
    fn test_text_sort_is_stable_for_equal_keys() {
        let values = cells(&["b", "A", "a", "B"]);
        let order = sort_order(&values, SortKind::Text, SortDirection::Ascending, &NaturalCollator);
        assert_eq!(order, vec![1, 2, 0, 3]);
    }

    #[test]
    fn test_indicators() {
        assert_eq!(indicator_for(1, 1, SortDirection::Descending), SortIndicator::Descending);
        assert_eq!(indicator_for(0, 1, SortDirection::Descending), SortIndicator::Neutral);
        assert_eq!(SortIndicator::Ascending.css_class(), "sort-asc");
    }

    #[test]
    fn test_sort_kind_from_attr() {
        assert_eq!(SortKind::from_attr("number"), SortKind::Numeric);
        assert_eq!(SortKind::from_attr(" Numeric "), SortKind::Numeric);
        assert_eq!(SortKind::from_attr("string"), SortKind::Text);
        assert_eq!(SortKind::from_attr(""), SortKind::Text);
    }
}
