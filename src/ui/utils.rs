use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Safely truncate string to a display width, appending "…" if truncated 🛡️
pub fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        out.push(ch);
        width += w;
    }
    if max_width > 0 {
        out.push('…');
    }
    out
}

/// Truncate, then pad with spaces to exactly `width` columns
pub fn fit(s: &str, width: usize) -> String {
    let t = truncate(s, width);
    let pad = width.saturating_sub(t.width());
    format!("{}{}", t, " ".repeat(pad))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_by_display_width() {
        assert_eq!(truncate("Whips", 10), "Whips");
        assert_eq!(truncate("Llama Whipping", 6), "Llama…");
        assert_eq!(truncate("🎵🎵🎵", 4), "🎵…");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn test_fit_pads_to_width() {
        assert_eq!(fit("ab", 4), "ab  ");
        assert_eq!(fit("abcdef", 4).width(), 4);
    }
}
