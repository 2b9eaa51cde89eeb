use serde_json::{Map, Value};

/// Groups an unsigned digit string the Indian way: last three digits, then pairs.
pub fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// Rounds half away from zero and groups the whole part.
pub fn grouped_integer(number: f64) -> String {
    let rounded = number.abs().round();
    let digits = format!("{:.0}", rounded);
    let grouped = group_indian(&digits);
    if number < 0.0 && rounded > 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Plain number text without a trailing `.0` for whole values.
pub fn plain_number(number: f64) -> String {
    if number.fract() == 0.0 && number.abs() < 1e15 {
        format!("{}", number as i64)
    } else {
        number.to_string()
    }
}

/// `powerBackup` / `power_backup` → `Power Backup`.
pub fn humanize_key(key: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut previous_lower = false;

    for ch in key.chars() {
        if ch == '_' || ch == '-' || ch.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            previous_lower = false;
            continue;
        }
        if ch.is_uppercase() && previous_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        previous_lower = ch.is_lowercase() || ch.is_ascii_digit();
        current.push(ch);
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Boolean view of `true`/`false`/`yes`/`no` values.
pub fn boolean_like(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(flag) => Some(*flag),
        Value::String(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" => Some(true),
            "false" | "no" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map(|n| n != 0.0).unwrap_or(false),
        Value::String(raw) => !raw.trim().is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Keys of an object whose values are truthy, humanized.
pub(crate) fn truthy_keys(map: &Map<String, Value>) -> Vec<String> {
    map.iter()
        .filter(|(_, value)| is_truthy(value))
        .map(|(key, _)| humanize_key(key))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn indian_grouping() {
        assert_eq!(group_indian("0"), "0");
        assert_eq!(group_indian("999"), "999");
        assert_eq!(group_indian("1000"), "1,000");
        assert_eq!(group_indian("150000"), "1,50,000");
        assert_eq!(group_indian("1500000"), "15,00,000");
        assert_eq!(group_indian("123456789"), "12,34,56,789");
    }

    #[test]
    fn grouped_integer_rounds_and_keeps_sign() {
        assert_eq!(grouped_integer(1234.5), "1,235");
        assert_eq!(grouped_integer(-25000.0), "-25,000");
        assert_eq!(grouped_integer(-0.2), "0");
    }

    #[test]
    fn humanizes_mixed_key_styles() {
        assert_eq!(humanize_key("powerBackup"), "Power Backup");
        assert_eq!(humanize_key("swimming_pool"), "Swimming Pool");
        assert_eq!(humanize_key("gym"), "Gym");
        assert_eq!(humanize_key("24x7Security"), "24x7 Security");
    }

    #[test]
    fn boolean_like_values() {
        assert_eq!(boolean_like(&json!("Yes")), Some(true));
        assert_eq!(boolean_like(&json!("false")), Some(false));
        assert_eq!(boolean_like(&json!(1)), None);
        assert_eq!(boolean_like(&json!("maybe")), None);
    }
}
