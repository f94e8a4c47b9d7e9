//! 金額の表示整形（ja-JP）

/// 3桁区切り（ja-JPの桁区切りはカンマ）
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// 差額を「+1,000円」形式に整形
///
/// 正の値のみ `+` を付ける。負の値は `-` がそのまま付き、0は符号なし。
pub fn yen(value: i64) -> String {
    let sign = if value > 0 { "+" } else { "" };
    format!("{}{}円", sign, group_thousands(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yen_positive() {
        assert_eq!(yen(1000), "+1,000円");
        assert_eq!(yen(1500), "+1,500円");
        assert_eq!(yen(5), "+5円");
    }

    #[test]
    fn test_yen_negative() {
        assert_eq!(yen(-500), "-500円");
        assert_eq!(yen(-12345), "-12,345円");
    }

    #[test]
    fn test_yen_zero() {
        assert_eq!(yen(0), "0円");
    }

    #[test]
    fn test_group_thousands_boundaries() {
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(100000), "100,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(-1000000), "-1,000,000");
    }

    #[test]
    fn test_group_thousands_extremes() {
        assert_eq!(group_thousands(i64::MIN), "-9,223,372,036,854,775,808");
        assert_eq!(group_thousands(i64::MAX), "9,223,372,036,854,775,807");
    }
}
