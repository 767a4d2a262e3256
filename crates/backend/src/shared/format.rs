/// Group digits in threes with dots: `1234567` → `1.234.567`
pub fn format_number(n: usize) -> String {
    let digits = n.to_string();
    let head = digits.len() % 3;
    let mut groups: Vec<&str> = Vec::with_capacity(digits.len() / 3 + 1);
    if head > 0 {
        groups.push(&digits[..head]);
    }
    groups.extend(
        digits.as_bytes()[head..]
            .chunks(3)
            .filter_map(|chunk| std::str::from_utf8(chunk).ok()),
    );
    groups.join(".")
}

/// Response size for the request log; `-` when the length isn't known up front
pub fn format_size(len: Option<usize>) -> String {
    len.map(format_number).unwrap_or_else(|| "-".to_string())
}
