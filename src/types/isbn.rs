/// Converts a 978-prefixed ISBN-13 into its ISBN-10 form.
///
/// Hyphens are stripped before validation. Returns `None` unless the
/// stripped input is exactly 13 characters, starts with `978`, and carries
/// an all-digit 9-digit body; the caller is expected to drop whatever
/// depends on the conversion rather than fail.
pub fn to_isbn10(isbn13: &str) -> Option<String> {
    let stripped: String = isbn13.chars().filter(|c| *c != '-').collect();
    if !stripped.is_ascii() || stripped.len() != 13 || !stripped.starts_with("978") {
        return None;
    }
    let body = &stripped[3..12];
    let mut sum = 0;
    for (i, c) in body.chars().enumerate() {
        sum += (10 - i as u32) * c.to_digit(10)?;
    }
    // 11 - (sum % 11) is 11 exactly when sum % 11 == 0; that case is the
    // zero check digit, written out so the match stays total.
    let check = match 11 - (sum % 11) {
        10 => 'X',
        11 => '0',
        n => char::from_digit(n, 10)?,
    };
    let mut isbn10 = body.to_string();
    isbn10.push(check);
    Some(isbn10)
}
