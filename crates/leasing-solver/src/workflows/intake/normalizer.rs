/// Strips byte-order marks and zero-width spaces that leak out of spreadsheet exports.
pub(crate) fn clean_field(value: &str) -> String {
    value.replace(['\u{feff}', '\u{200b}'], "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_invisible_characters_and_padding() {
        assert_eq!(clean_field("\u{feff} A-201\u{200b} "), "A-201");
        assert_eq!(clean_field("Available"), "Available");
    }
}
