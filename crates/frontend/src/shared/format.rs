/// Format elapsed seconds as `M:SS`
/// Example: 65 -> "1:05"
pub fn format_elapsed(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Russian plural form for counters: (1 модуль, 2 модуля, 5 модулей)
pub fn plural<'a>(n: usize, one: &'a str, few: &'a str, many: &'a str) -> &'a str {
    let n100 = n % 100;
    let n10 = n % 10;
    if (11..=14).contains(&n100) {
        many
    } else if n10 == 1 {
        one
    } else if (2..=4).contains(&n10) {
        few
    } else {
        many
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(0), "0:00");
        assert_eq!(format_elapsed(7), "0:07");
        assert_eq!(format_elapsed(65), "1:05");
        assert_eq!(format_elapsed(600), "10:00");
    }

    #[test]
    fn test_plural() {
        let p = |n| plural(n, "модуль", "модуля", "модулей");
        assert_eq!(p(1), "модуль");
        assert_eq!(p(3), "модуля");
        assert_eq!(p(5), "модулей");
        assert_eq!(p(11), "модулей");
        assert_eq!(p(21), "модуль");
        assert_eq!(p(112), "модулей");
    }
}
