use unicode_width::UnicodeWidthStr;

/// Breaks `s` into lines no wider than `width` columns, character by character.
pub fn wrap_text(s: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let mut result = String::with_capacity(s.len() + s.len() / width);
    let mut current_line_width = 0;

    for c in s.chars() {
        let char_width = UnicodeWidthStr::width(c.encode_utf8(&mut [0; 4]));

        if current_line_width + char_width > width {
            result.push('\n');
            current_line_width = char_width;
        } else {
            current_line_width += char_width;
        }

        result.push(c);
    }

    result
}

/// Word-wraps `s` into lines no wider than `width` columns.
///
/// Runs of whitespace collapse to a single space. A word wider than `width`
/// is split with [`wrap_text`].
pub fn wrap_words(s: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![];
    }

    let mut lines: Vec<String> = vec![];
    let mut current = String::new();

    for word in s.split_whitespace() {
        let word_width = word.width();
        if word_width > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let pieces: Vec<String> = wrap_text(word, width).lines().map(String::from).collect();
            let (last, init) = match pieces.split_last() {
                Some(split) => split,
                None => continue,
            };
            lines.extend(init.iter().cloned());
            current = last.clone();
            continue;
        }

        if current.is_empty() {
            current.push_str(word);
        } else if current.width() + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Cuts `s` to at most `width` display columns, ending with `…` when cut.
pub fn truncate_to_width(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut used = 0;
    for c in s.chars() {
        let char_width = UnicodeWidthStr::width(c.encode_utf8(&mut [0; 4]));
        if used + char_width > width - 1 {
            break;
        }
        used += char_width;
        result.push(c);
    }
    result.push('…');
    result
}
