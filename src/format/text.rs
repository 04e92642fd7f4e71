/// Left-justifies `label` in a column of exactly `width` characters,
/// truncating when it is longer.
pub fn pad_label(label: &str, width: usize) -> String {
    let mut s: String = label.chars().take(width).collect();
    let len = s.chars().count();
    s.extend(std::iter::repeat_n(' ', width - len));
    s
}

pub fn blank_label(width: usize) -> String {
    " ".repeat(width)
}

/// Output spelling of a field identifier: uppercase, `-` replaced by `_`.
pub fn normalize_label(id: &str) -> String {
    id.trim()
        .chars()
        .map(|c| if c == '-' { '_' } else { c })
        .flat_map(char::to_uppercase)
        .collect()
}

/// Greedy word-wrap on whitespace runs.
///
/// Always returns at least one line; a word longer than `width` is kept whole
/// on a line of its own.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Prefixes the first line with `label` and every other line with a blank
/// label of the same width.
pub(crate) fn label_lines<I>(label: &str, lines: I, width: usize) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let head = pad_label(label, width);
    let blank = blank_label(width);
    lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let prefix = if i == 0 { &head } else { &blank };
            format!("{prefix}{line}")
        })
        .collect()
}
