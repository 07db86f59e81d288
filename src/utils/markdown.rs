/// Escapes every character that Telegram's MarkdownV2 mode treats as markup.
///
/// ```
/// use flight_search_bot::utils::markdown::escape_markdown;
///
/// assert_eq!(escape_markdown("Москва (SVO) - Сочи!"), "Москва \\(SVO\\) \\- Сочи\\!");
/// ```
pub fn escape_markdown(text: &str) -> String {
    const SPECIAL: &[char] = &[
        '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
    ];

    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if SPECIAL.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
