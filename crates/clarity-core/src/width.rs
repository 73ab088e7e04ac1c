//! ---
//! clarity_section: "02-print-pipeline"
//! clarity_subsection: "module"
//! clarity_type: "source"
//! clarity_scope: "code"
//! clarity_description: "Display-width arithmetic for column alignment."
//! clarity_version: "v0.0.0-prealpha"
//! clarity_owner: "tbd"
//! ---
use unicode_width::UnicodeWidthStr;

/// Terminal columns occupied by `text`. Wide glyphs (emoji, CJK) count 2.
pub fn symbol_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Number of decimal digits needed to print `value`.
pub fn digit_width(value: u32) -> usize {
    value.checked_ilog10().map_or(1, |log| log as usize + 1)
}

/// `count` spaces.
pub fn blank(count: usize) -> String {
    " ".repeat(count)
}

/// Widest entry of a symbol table.
pub fn max_symbol_width<'a>(symbols: impl IntoIterator<Item = &'a str>) -> usize {
    symbols.into_iter().map(symbol_width).max().unwrap_or(0)
}

/// `symbol` followed by enough spaces to fill `width` columns.
pub fn pad_to(symbol: &str, width: usize) -> String {
    let mut padded = symbol.to_owned();
    padded.push_str(&blank(width.saturating_sub(symbol_width(symbol))));
    padded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_glyphs_count_double() {
        assert_eq!(symbol_width("A"), 1);
        assert_eq!(symbol_width("ENTCC"), 5);
        assert_eq!(symbol_width("ENTCC🍎"), 7);
        assert_eq!(symbol_width("✅"), 2);
        assert_eq!(symbol_width(""), 0);
    }

    #[test]
    fn digit_widths() {
        assert_eq!(digit_width(0), 1);
        assert_eq!(digit_width(9), 1);
        assert_eq!(digit_width(10), 2);
        assert_eq!(digit_width(999), 3);
        assert_eq!(digit_width(1000), 4);
        assert_eq!(digit_width(u32::MAX), 10);
    }

    #[test]
    fn padding_fills_to_width() {
        assert_eq!(pad_to("✅", 3), "✅ ");
        assert_eq!(pad_to("", 2), "  ");
        assert_eq!(pad_to("abc", 2), "abc");
        assert_eq!(max_symbol_width(["a", "🟪", "xyz"]), 3);
    }
}
