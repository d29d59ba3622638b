//! Форматирование чисел для ячеек таблиц (en-US: запятая между тысячами)

/// Вставляет разделитель тысяч в целую часть уже отформатированного числа.
fn group_thousands(formatted: &str, separator: char) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (integer_part, decimal_part) = match unsigned.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (i, c) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Число с `decimals` знаками после точки и запятой между тысячами
///
/// ```ignore
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    // "-0.00" после округления
    if formatted.starts_with('-') && formatted[1..].chars().all(|c| c == '0' || c == '.') {
        return group_thousands(&formatted[1..], ',');
    }
    group_thousands(&formatted, ',')
}

/// Цена: ровно 2 знака после точки
pub fn format_price(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

/// Целое количество (остаток на складе)
pub fn format_count(value: i64) -> String {
    group_thousands(&value.to_string(), ',')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(1234.5), "1,234.50");
        assert_eq!(format_price(1234567.891), "1,234,567.89");
        assert_eq!(format_price(0.0), "0.00");
        assert_eq!(format_price(-1234.56), "-1,234.56");
        assert_eq!(format_price(999.999), "1,000.00");
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(format_price(-0.001), "0.00");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(123.4, 3), "123.400");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(-1234567), "-1,234,567");
    }
}
