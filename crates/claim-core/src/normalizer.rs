//! Normalizer — per-field value transforms shared by the dump and spreadsheet paths.

/// Join a multi-line cell or field onto one line, each line break becoming `", "`.
pub fn single_line(value: &str) -> String {
    value.replace("\r\n", "\n").replace('\n', ", ")
}

/// Keep ASCII digits only. Used for taxpayer numbers.
pub fn digits_only(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Normalise a raw plate match: no whitespace at all, uppercase.
pub fn plate_number(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}
