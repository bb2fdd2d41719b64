//! Утилиты форматирования цен

use crate::enums::Locale;

/// Форматирует число с разделителем тысяч (пробел) и указанным количеством знаков после запятой
///
/// # Примеры
///
/// ```
/// use contracts::shared::number_format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1 234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = match decimals {
        0 => format!("{:.0}", value),
        1 => format!("{:.1}", value),
        _ => format!("{:.2}", value),
    };

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((integer, decimal)) => (integer, Some(decimal)),
        None => (formatted.as_str(), None),
    };

    // Вставляем пробелы каждые 3 цифры с конца целой части
    let mut result = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 && c != '-' {
            result.push(' ');
        }
        result.push(c);
    }
    let formatted_integer = result.chars().rev().collect::<String>();

    match decimal_part {
        Some(d) => format!("{}.{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// Цена без валюты: целые суммы без копеек, дробные с 2 знаками
///
/// ```
/// use contracts::shared::number_format::format_price;
/// assert_eq!(format_price(49.0), "49");
/// assert_eq!(format_price(49.5), "49.50");
/// ```
pub fn format_price(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format_number_with_decimals(amount, 0)
    } else {
        format_number_with_decimals(amount, 2)
    }
}

/// Цена для текста сообщения: без разделителей разрядов и без дополнения нулями
///
/// ```
/// use contracts::shared::number_format::format_price_plain;
/// assert_eq!(format_price_plain(1234.0), "1234");
/// assert_eq!(format_price_plain(149.5), "149.5");
/// ```
pub fn format_price_plain(amount: f64) -> String {
    format!("{}", amount)
}

/// Обозначение валюты (дирхам) на выбранном языке
pub fn currency_label(locale: Locale) -> &'static str {
    match locale {
        Locale::En | Locale::Fr => "DH",
        Locale::Ar => "درهم",
    }
}

pub fn format_price_with_currency(locale: Locale, amount: f64) -> String {
    format!("{} {}", format_price(amount), currency_label(locale))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_plain() {
        assert_eq!(format_price_plain(49.0), "49");
        assert_eq!(format_price_plain(149.5), "149.5");
        assert_eq!(format_price_plain(1234.0), "1234");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1 235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1 234.6");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1 234.57");
        assert_eq!(format_number_with_decimals(-1234.0, 0), "-1 234");
        assert_eq!(format_number_with_decimals(0.0, 2), "0.00");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(49.0), "49");
        assert_eq!(format_price(149.0), "149");
        assert_eq!(format_price(1490.0), "1 490");
        assert_eq!(format_price(49.9), "49.90");
    }

    #[test]
    fn test_format_price_with_currency() {
        assert_eq!(format_price_with_currency(Locale::En, 49.0), "49 DH");
        assert_eq!(format_price_with_currency(Locale::Fr, 149.0), "149 DH");
        assert_eq!(format_price_with_currency(Locale::Ar, 49.0), "49 درهم");
    }
}
