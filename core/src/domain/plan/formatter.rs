/// Prepares model output for the HTML client: line breaks become `<br>` and
/// markdown bold markers are dropped.
pub fn format_for_display(text: &str) -> String {
    text.replace("**", "")
        .replace("\r\n", "<br>")
        .replace(['\n', '\r'], "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_breaks_and_emphasis() {
        assert_eq!(
            format_for_display("Meal 1\nMeal 2\n**Tip:** drink water"),
            "Meal 1<br>Meal 2<br>Tip: drink water"
        );
    }

    #[test]
    fn test_crlf_is_a_single_break() {
        assert_eq!(format_for_display("a\r\nb\rc"), "a<br>b<br>c");
    }

    #[test]
    fn test_empty_and_plain_text_unchanged() {
        assert_eq!(format_for_display(""), "");
        assert_eq!(format_for_display("single *star*"), "single *star*");
    }
}
